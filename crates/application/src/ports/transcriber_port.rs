//! Transcriber port - Interface for speech-to-text

use async_trait::async_trait;
use domain::AudioClip;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Parameters for one transcription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRequest {
    /// ISO-639-1 language of the recording (e.g., "ar")
    pub language: String,
    /// Context that biases recognition towards expected vocabulary
    pub prompt: Option<String>,
}

impl TranscriptionRequest {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            prompt: None,
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

/// Result of a transcription operation
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult {
    /// Transcribed text, exactly as the provider returned it
    pub text: String,
    /// Detected language code
    pub detected_language: Option<String>,
    /// Duration of audio in milliseconds
    pub duration_ms: Option<u64>,
}

impl TranscriptionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detected_language: None,
            duration_ms: None,
        }
    }
}

/// Port for speech-to-text
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriberPort: Send + Sync {
    /// Transcribe a clip in the requested language
    async fn transcribe(
        &self,
        audio: AudioClip,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionResult, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder() {
        let request = TranscriptionRequest::new("ar").with_prompt("مرحبا، شكرا");
        assert_eq!(request.language, "ar");
        assert_eq!(request.prompt.as_deref(), Some("مرحبا، شكرا"));
    }

    #[tokio::test]
    async fn mock_transcriber_returns_text() {
        let mut mock = MockTranscriberPort::new();
        mock.expect_transcribe()
            .withf(|audio, request| audio.data() == b"RIFF" && request.language == "ar")
            .returning(|_, _| Ok(TranscriptionResult::new("شكرا")));

        let clip = AudioClip::new(b"RIFF".to_vec(), domain::AudioFormat::Wav);
        let result = mock
            .transcribe(clip, TranscriptionRequest::new("ar"))
            .await
            .unwrap();
        assert_eq!(result.text, "شكرا");
        assert!(result.detected_language.is_none());
    }
}
