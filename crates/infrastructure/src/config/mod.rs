//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `exercises`: Exercise catalog and selection
//! - `credentials`: Legacy provider key variables
//!
//! Provider settings (`speech`, `elevenlabs`, `inference`) and `retry` reuse
//! the config types of the crates that consume them.

mod credentials;
mod exercises;
mod server;

use std::path::Path;

use ai_core::InferenceConfig;
use ai_speech::{ElevenLabsConfig, SpeechConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::retry::RetryConfig;

pub use credentials::{ELEVENLABS_ENV_VAR, LegacyCredentials, OPENAI_ENV_VAR, clean_secret};
pub use exercises::ExerciseAppConfig;
pub use server::ServerConfig;

/// Prefix of configuration environment variables (`NATIQ__SERVER__PORT`)
pub const ENV_PREFIX: &str = "NATIQ";

/// Separator between prefix and nested keys
pub const ENV_SEPARATOR: &str = "__";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Exercise catalog configuration
    #[serde(default)]
    pub exercises: ExerciseAppConfig,

    /// OpenAI speech-to-text and text-to-speech (voice chat)
    #[serde(default)]
    pub speech: SpeechConfig,

    /// ElevenLabs Scribe speech-to-text (pronunciation attempts)
    #[serde(default)]
    pub elevenlabs: ElevenLabsConfig,

    /// OpenAI chat completions (voice chat)
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Retry policy for provider calls
    #[serde(default)]
    pub retry: RetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional `config.toml` and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false), true)
    }

    /// Load configuration from an explicit file, ignoring the environment
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true), false)
    }

    fn build<S>(file: S, with_env: bool) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .add_source(file);

        if with_env {
            // e.g. NATIQ__SERVER__PORT=9000, NATIQ__SPEECH__OPENAI_API_KEY=sk-...
            builder = builder.add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            );
        }

        builder.build()?.try_deserialize()
    }

    /// Fill provider keys the configuration left empty
    ///
    /// The ElevenLabs key goes to `elevenlabs`; the OpenAI key to both
    /// `speech` and `inference`. Keys that are already set win.
    pub fn apply_legacy_credentials(&mut self, credentials: &LegacyCredentials) {
        let missing_elevenlabs = !self.elevenlabs.has_api_key();
        if let Some(key) = credentials.elevenlabs().filter(|_| missing_elevenlabs) {
            self.elevenlabs.api_key = Some(key.to_owned());
            debug!(source = ELEVENLABS_ENV_VAR, "Loaded elevenlabs.api_key");
        }

        if let Some(key) = credentials.openai() {
            if !self.speech.has_api_key() {
                self.speech.openai_api_key = Some(key.to_owned());
                debug!(source = OPENAI_ENV_VAR, "Loaded speech.openai_api_key");
            }
            if !self.inference.has_api_key() {
                self.inference.api_key = Some(key.to_owned());
                debug!(source = OPENAI_ENV_VAR, "Loaded inference.api_key");
            }
        }
    }
}
