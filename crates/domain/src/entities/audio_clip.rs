//! Recorded learner audio

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Container/codec of a recorded clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// RIFF WAV (the format assumed when nothing else is known)
    #[default]
    Wav,
    /// WebM, what browsers' MediaRecorder produces by default
    Webm,
    /// OGG container
    Ogg,
    /// Opus codec
    Opus,
    /// MP3
    Mp3,
    /// MPEG-4 audio
    M4a,
    /// FLAC
    Flac,
}

impl AudioFormat {
    /// Get the MIME type for this format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
            Self::Ogg => "audio/ogg",
            Self::Opus => "audio/opus",
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/mp4",
            Self::Flac => "audio/flac",
        }
    }

    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Webm => "webm",
            Self::Ogg => "ogg",
            Self::Opus => "opus",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Flac => "flac",
        }
    }

    /// Parse from a MIME type, ignoring parameters such as `;codecs=opus`
    #[must_use]
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let base = mime.split(';').next().unwrap_or(mime).trim();
        match base.to_ascii_lowercase().as_str() {
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(Self::Wav),
            "audio/webm" | "video/webm" => Some(Self::Webm),
            "audio/ogg" => Some(Self::Ogg),
            "audio/opus" => Some(Self::Opus),
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/mp4" | "audio/m4a" | "audio/x-m4a" => Some(Self::M4a),
            "audio/flac" | "audio/x-flac" => Some(Self::Flac),
            _ => None,
        }
    }

    /// Like [`Self::from_mime_type`], reporting the rejected type
    pub fn parse_mime_type(mime: &str) -> Result<Self, DomainError> {
        Self::from_mime_type(mime)
            .ok_or_else(|| DomainError::UnsupportedAudioFormat(mime.trim().to_string()))
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Decoded audio bytes plus their format
#[derive(Clone, PartialEq, Eq)]
pub struct AudioClip {
    data: Vec<u8>,
    format: AudioFormat,
}

impl AudioClip {
    /// Create a clip
    #[must_use]
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Raw bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the raw bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for AudioClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioClip")
            .field("format", &self.format)
            .field("size_bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_wav() {
        assert_eq!(AudioFormat::default(), AudioFormat::Wav);
        assert_eq!(AudioFormat::Wav.mime_type(), "audio/wav");
        assert_eq!(AudioFormat::Wav.extension(), "wav");
    }

    #[test]
    fn from_mime_type_strips_parameters() {
        assert_eq!(
            AudioFormat::from_mime_type("audio/webm;codecs=opus"),
            Some(AudioFormat::Webm)
        );
        assert_eq!(
            AudioFormat::from_mime_type(" Audio/MPEG "),
            Some(AudioFormat::Mp3)
        );
    }

    #[test]
    fn from_mime_type_rejects_unknown() {
        assert_eq!(AudioFormat::from_mime_type("text/plain"), None);
        assert!(matches!(
            AudioFormat::parse_mime_type("image/png"),
            Err(DomainError::UnsupportedAudioFormat(m)) if m == "image/png"
        ));
    }

    #[test]
    fn mime_round_trip_for_every_format() {
        for format in [
            AudioFormat::Wav,
            AudioFormat::Webm,
            AudioFormat::Ogg,
            AudioFormat::Opus,
            AudioFormat::Mp3,
            AudioFormat::M4a,
            AudioFormat::Flac,
        ] {
            assert_eq!(AudioFormat::from_mime_type(format.mime_type()), Some(format));
        }
    }

    #[test]
    fn clip_accessors() {
        let clip = AudioClip::new(vec![1, 2, 3], AudioFormat::Ogg);
        assert_eq!(clip.len(), 3);
        assert!(!clip.is_empty());
        assert_eq!(clip.format(), AudioFormat::Ogg);
        assert_eq!(clip.data(), &[1, 2, 3]);
        assert_eq!(clip.into_data(), vec![1, 2, 3]);
    }

    #[test]
    fn debug_hides_bytes() {
        let clip = AudioClip::new(vec![0; 2048], AudioFormat::Wav);
        let debug = format!("{clip:?}");
        assert!(debug.contains("size_bytes: 2048"));
        assert!(!debug.contains("[0, 0"));
    }
}
