//! Base64 audio payloads as sent by browser clients
//!
//! Clients post either raw base64 or a data URL such as
//! `data:audio/webm;codecs=opus;base64,GkXf...`. The data URL header, when
//! present, names the container; everything else defaults to WAV.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use domain::{AudioClip, AudioFormat};
use tracing::debug;

use crate::error::ApplicationError;

/// Standard alphabet that tolerates missing padding and non-zero trailing bits
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const DATA_URL_SCHEME: &str = "data:";

/// Decode a client audio payload into a clip
///
/// When the payload contains a comma, only the segment between the first and
/// second comma is decoded. Characters outside the base64 alphabet (line
/// breaks, spaces) are skipped.
///
/// # Errors
///
/// Returns `ApplicationError::Decode` if the payload is not valid base64 or
/// decodes to nothing.
pub fn decode_audio_payload(payload: &str) -> Result<AudioClip, ApplicationError> {
    let (header, encoded) = match payload.split_once(',') {
        Some((header, rest)) => (Some(header), rest.split(',').next().unwrap_or_default()),
        None => (None, payload),
    };

    let format = header.map_or_else(AudioFormat::default, format_from_header);

    let cleaned: String = encoded
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect();

    let data = LENIENT
        .decode(cleaned.as_bytes())
        .map_err(|e| ApplicationError::Decode(e.to_string()))?;

    if data.is_empty() {
        return Err(ApplicationError::Decode("Audio payload is empty".to_string()));
    }

    debug!(bytes = data.len(), %format, "Decoded audio payload");
    Ok(AudioClip::new(data, format))
}

/// Encode audio bytes as standard padded base64
#[must_use]
pub fn encode_audio(data: &[u8]) -> String {
    STANDARD.encode(data)
}

fn format_from_header(header: &str) -> AudioFormat {
    let Some(media_type) = header.trim().strip_prefix(DATA_URL_SCHEME) else {
        return AudioFormat::default();
    };
    let mime = media_type.split(';').next().unwrap_or_default();
    AudioFormat::from_mime_type(mime).unwrap_or_else(|| {
        debug!(mime, "Unrecognised audio MIME type, assuming WAV");
        AudioFormat::default()
    })
}
