//! Provider credentials read from the legacy environment variables
//!
//! Deployments of the original backend set `eleven_labs` and `open_ai`
//! (lower case, often quoted inside `.env`). They are read once at startup
//! and only fill provider keys that the configuration left empty.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the ElevenLabs key
pub const ELEVENLABS_ENV_VAR: &str = "eleven_labs";

/// Environment variable holding the OpenAI key
pub const OPENAI_ENV_VAR: &str = "open_ai";

/// Credentials found in the legacy variables
#[derive(Default)]
pub struct LegacyCredentials {
    elevenlabs: Option<SecretString>,
    openai: Option<SecretString>,
}

impl fmt::Debug for LegacyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyCredentials")
            .field("elevenlabs", &self.elevenlabs.as_ref().map(|_| "[REDACTED]"))
            .field("openai", &self.openai.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl LegacyCredentials {
    /// Read both variables from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read both variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            elevenlabs: lookup(ELEVENLABS_ENV_VAR).as_deref().and_then(clean_secret),
            openai: lookup(OPENAI_ENV_VAR).as_deref().and_then(clean_secret),
        }
    }

    pub fn elevenlabs(&self) -> Option<&str> {
        self.elevenlabs.as_ref().map(|secret| secret.expose_secret())
    }

    pub fn openai(&self) -> Option<&str> {
        self.openai.as_ref().map(|secret| secret.expose_secret())
    }
}

/// Trim whitespace, then surrounding double quotes, then single quotes
///
/// Returns `None` when nothing is left.
pub fn clean_secret(raw: &str) -> Option<SecretString> {
    let cleaned = raw.trim().trim_matches('"').trim_matches('\'');
    if cleaned.is_empty() {
        None
    } else {
        Some(SecretString::from(cleaned.to_owned()))
    }
}
