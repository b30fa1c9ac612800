//! Synthesizer port - Interface for text-to-speech

use std::fmt;

use async_trait::async_trait;
use domain::AudioFormat;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Voice configuration for synthesis
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceConfig {
    /// Voice identifier (e.g., "nova", "alloy")
    pub voice_id: String,
    /// Speech speed (0.25 - 4.0)
    pub speed: f32,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            voice_id: "nova".to_string(),
            speed: 0.9,
        }
    }
}

/// Result of a speech synthesis operation
#[derive(Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    /// Generated audio data
    pub audio_data: Vec<u8>,
    /// Format of the audio
    pub format: AudioFormat,
}

impl fmt::Debug for SynthesisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynthesisResult")
            .field("audio_bytes", &self.audio_data.len())
            .field("format", &self.format)
            .finish()
    }
}

/// Port for text-to-speech
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SynthesizerPort: Send + Sync {
    /// Speak `text` with the given voice
    async fn synthesize(
        &self,
        text: String,
        voice: VoiceConfig,
    ) -> Result<SynthesisResult, ApplicationError>;
}
