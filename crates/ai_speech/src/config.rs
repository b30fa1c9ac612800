//! Configuration for speech processing

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::AudioFormat;

/// Configuration for the OpenAI speech endpoints (transcription and TTS)
#[derive(Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// OpenAI API key
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// OpenAI API base URL (for custom endpoints)
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Speech-to-text model
    #[serde(default = "default_stt_model")]
    pub stt_model: String,

    /// Text-to-speech model
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// Default voice for TTS
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Output audio format for TTS
    #[serde(default = "default_output_format")]
    pub output_format: AudioFormat,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Largest upload accepted for transcription
    #[serde(default = "default_max_audio_bytes")]
    pub max_audio_bytes: usize,

    /// TTS speaking speed (0.25 to 4.0)
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// Write uploads to a scoped temporary file before sending them
    #[serde(default = "default_stage_uploads")]
    pub stage_uploads: bool,

    /// Directory for staged uploads (system temp dir when unset)
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,
}

impl fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("openai_base_url", &self.openai_base_url)
            .field("stt_model", &self.stt_model)
            .field("tts_model", &self.tts_model)
            .field("default_voice", &self.default_voice)
            .field("output_format", &self.output_format)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_audio_bytes", &self.max_audio_bytes)
            .field("speed", &self.speed)
            .field("stage_uploads", &self.stage_uploads)
            .field("staging_dir", &self.staging_dir)
            .finish()
    }
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_stt_model() -> String {
    "gpt-4o-transcribe".to_string()
}

fn default_tts_model() -> String {
    "gpt-4o-mini-tts".to_string()
}

fn default_voice() -> String {
    "nova".to_string()
}

const fn default_output_format() -> AudioFormat {
    AudioFormat::Mp3
}

const fn default_timeout_ms() -> u64 {
    60_000 // 1 minute
}

const fn default_max_audio_bytes() -> usize {
    25 * 1024 * 1024
}

const fn default_speed() -> f32 {
    0.9
}

const fn default_stage_uploads() -> bool {
    true
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: default_openai_base_url(),
            stt_model: default_stt_model(),
            tts_model: default_tts_model(),
            default_voice: default_voice(),
            output_format: default_output_format(),
            timeout_ms: default_timeout_ms(),
            max_audio_bytes: default_max_audio_bytes(),
            speed: default_speed(),
            stage_uploads: default_stage_uploads(),
            staging_dir: None,
        }
    }
}

impl SpeechConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            openai_api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    /// Whether an API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.has_api_key() {
            return Err("OpenAI API Key not configured".to_string());
        }

        validate_speed(self.speed)?;

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.max_audio_bytes == 0 {
            return Err("Max audio size must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Check a TTS speed against the range the API accepts
///
/// # Errors
///
/// Returns an error if `speed` is outside 0.25..=4.0.
pub fn validate_speed(speed: f32) -> Result<(), String> {
    if (0.25..=4.0).contains(&speed) {
        Ok(())
    } else {
        Err(format!("Speed must be between 0.25 and 4.0, got {speed}"))
    }
}

/// Configuration for ElevenLabs Scribe transcription
#[derive(Clone, Serialize, Deserialize)]
pub struct ElevenLabsConfig {
    /// ElevenLabs API key, sent as `xi-api-key`
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_elevenlabs_base_url")]
    pub base_url: String,

    /// Scribe model id
    #[serde(default = "default_elevenlabs_model")]
    pub model_id: String,

    /// Ask for speaker diarization
    #[serde(default)]
    pub diarize: bool,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Largest upload accepted for transcription
    #[serde(default = "default_max_audio_bytes")]
    pub max_audio_bytes: usize,
}

impl fmt::Debug for ElevenLabsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElevenLabsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model_id", &self.model_id)
            .field("diarize", &self.diarize)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_audio_bytes", &self.max_audio_bytes)
            .finish()
    }
}

fn default_elevenlabs_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_elevenlabs_model() -> String {
    "scribe_v1".to_string()
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_elevenlabs_base_url(),
            model_id: default_elevenlabs_model(),
            diarize: false,
            timeout_ms: default_timeout_ms(),
            max_audio_bytes: default_max_audio_bytes(),
        }
    }
}

impl ElevenLabsConfig {
    /// Whether an API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.has_api_key() {
            return Err("ElevenLabs API Key not configured".to_string());
        }
        if self.model_id.trim().is_empty() {
            return Err("ElevenLabs model_id must not be empty".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        if self.max_audio_bytes == 0 {
            return Err("Max audio size must be greater than 0".to_string());
        }
        Ok(())
    }
}
