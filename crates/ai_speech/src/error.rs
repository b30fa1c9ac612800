//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech processing
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to speech service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Invalid audio format or corrupted data
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// Audio larger than the provider accepts
    #[error("Audio too large: {size_bytes} bytes exceeds maximum of {max_bytes} bytes")]
    AudioTooLarge {
        /// Size of the provided audio
        size_bytes: usize,
        /// Maximum allowed size
        max_bytes: usize,
    },

    /// Transcription failed
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid response from service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during processing
    #[error("Speech processing timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Credentials rejected by the provider
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Voice not found
    #[error("Voice not found: {0}")]
    VoiceNotFound(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Service unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Writing or reading the staged upload failed
    #[error("Staging failed: {0}")]
    Staging(String),
}

impl SpeechError {
    /// Classify a transport error, reporting timeouts with the configured budget
    pub fn from_request(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }

    /// Whether retrying the same request may succeed
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout(_) | Self::RateLimited | Self::ServiceUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failed_error_message() {
        let err = SpeechError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: refused");
    }

    #[test]
    fn request_failed_error_message() {
        let err = SpeechError::RequestFailed("500 error".to_string());
        assert_eq!(err.to_string(), "Request failed: 500 error");
    }

    #[test]
    fn audio_too_large_error_message() {
        let err = SpeechError::AudioTooLarge {
            size_bytes: 30_000_000,
            max_bytes: 26_214_400,
        };
        assert_eq!(
            err.to_string(),
            "Audio too large: 30000000 bytes exceeds maximum of 26214400 bytes"
        );
    }

    #[test]
    fn transcription_failed_error_message() {
        let err = SpeechError::TranscriptionFailed("no speech detected".to_string());
        assert_eq!(err.to_string(), "Transcription failed: no speech detected");
    }

    #[test]
    fn timeout_error_message() {
        let err = SpeechError::Timeout(60000);
        assert_eq!(err.to_string(), "Speech processing timeout after 60000ms");
    }

    #[test]
    fn rate_limited_error_message() {
        assert_eq!(SpeechError::RateLimited.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn unauthorized_error_message() {
        let err = SpeechError::Unauthorized("invalid_api_key".to_string());
        assert_eq!(err.to_string(), "Authentication failed: invalid_api_key");
    }

    #[test]
    fn staging_error_message() {
        let err = SpeechError::Staging("disk full".to_string());
        assert_eq!(err.to_string(), "Staging failed: disk full");
    }

    #[test]
    fn transient_classification() {
        assert!(SpeechError::RateLimited.is_transient());
        assert!(SpeechError::Timeout(1).is_transient());
        assert!(SpeechError::ConnectionFailed(String::new()).is_transient());
        assert!(SpeechError::ServiceUnavailable(String::new()).is_transient());
        assert!(!SpeechError::Unauthorized(String::new()).is_transient());
        assert!(!SpeechError::InvalidAudio(String::new()).is_transient());
        assert!(!SpeechError::TranscriptionFailed(String::new()).is_transient());
    }
}
