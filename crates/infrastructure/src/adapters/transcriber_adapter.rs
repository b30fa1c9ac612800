//! Transcriber adapter - Implements TranscriberPort using ai_speech

use std::{fmt, sync::Arc};

use ai_speech::{
    AudioData, ElevenLabsConfig, ElevenLabsScribeProvider, OpenAISpeechProvider, SpeechConfig,
    SpeechToText, TranscriptionOptions,
};
use application::{ApplicationError, TranscriberPort, TranscriptionRequest, TranscriptionResult};
use async_trait::async_trait;
use domain::AudioClip;
use tracing::{debug, instrument};

use super::error_mapping::map_speech_error;
use crate::retry::{RetryConfig, retry};

/// Adapter exposing any speech-to-text provider as a `TranscriberPort`
pub struct SpeechTranscriberAdapter {
    provider: Arc<dyn SpeechToText>,
    retry: RetryConfig,
}

impl fmt::Debug for SpeechTranscriberAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechTranscriberAdapter")
            .field("model", &self.provider.model_name())
            .field("max_retries", &self.retry.max_retries)
            .finish()
    }
}

impl SpeechTranscriberAdapter {
    pub fn new(provider: Arc<dyn SpeechToText>, retry: RetryConfig) -> Self {
        Self { provider, retry }
    }

    /// ElevenLabs Scribe transcription
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the API key is missing.
    pub fn elevenlabs(config: ElevenLabsConfig, retry: RetryConfig) -> Result<Self, ApplicationError> {
        let provider = ElevenLabsScribeProvider::new(config).map_err(map_speech_error)?;
        Ok(Self::new(Arc::new(provider), retry))
    }

    /// OpenAI transcription
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the API key is missing.
    pub fn openai(config: SpeechConfig, retry: RetryConfig) -> Result<Self, ApplicationError> {
        let provider = OpenAISpeechProvider::new(config).map_err(map_speech_error)?;
        Ok(Self::new(Arc::new(provider), retry))
    }
}

#[async_trait]
impl TranscriberPort for SpeechTranscriberAdapter {
    #[instrument(skip(self, audio), fields(
        model = self.provider.model_name(),
        audio_size = audio.len(),
        language = %request.language
    ))]
    async fn transcribe(
        &self,
        audio: AudioClip,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionResult, ApplicationError> {
        let mut options = TranscriptionOptions::new().with_language(request.language);
        if let Some(prompt) = request.prompt {
            options = options.with_prompt(prompt);
        }

        let audio = AudioData::from(audio);
        let (audio, options) = (&audio, &options);
        let transcription = retry(&self.retry, || async move {
            self.provider
                .transcribe(audio.clone(), options)
                .await
                .map_err(map_speech_error)
        })
        .await?;

        debug!(text_len = transcription.text.len(), "Transcription received");

        Ok(TranscriptionResult {
            text: transcription.text,
            detected_language: transcription.language,
            duration_ms: transcription.duration_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::AudioFormat;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn clip() -> AudioClip {
        AudioClip::new(b"RIFF0000WAVE".to_vec(), AudioFormat::Wav)
    }

    fn scribe_config(base_url: &str) -> ElevenLabsConfig {
        ElevenLabsConfig {
            api_key: Some("xi-test".to_string()),
            base_url: base_url.to_string(),
            timeout_ms: 2_000,
            ..Default::default()
        }
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = SpeechTranscriberAdapter::elevenlabs(ElevenLabsConfig::default(), RetryConfig::default())
            .unwrap_err();
        assert!(
            matches!(err, ApplicationError::Configuration(msg) if msg == "ElevenLabs API Key not configured")
        );

        let err = SpeechTranscriberAdapter::openai(SpeechConfig::default(), RetryConfig::default())
            .unwrap_err();
        assert!(
            matches!(err, ApplicationError::Configuration(msg) if msg == "OpenAI API Key not configured")
        );
    }

    #[tokio::test]
    async fn scribe_transcript_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/speech-to-text"))
            .and(header("xi-api-key", "xi-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "text": "مرحبا بالعالم",
                "language_code": "ara",
                "language_probability": 0.98
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adapter =
            SpeechTranscriberAdapter::elevenlabs(scribe_config(&server.uri()), RetryConfig::default())
                .unwrap();
        let result = adapter
            .transcribe(clip(), TranscriptionRequest::new("ar"))
            .await
            .unwrap();

        assert_eq!(result.text, "مرحبا بالعالم");
        assert_eq!(result.detected_language.as_deref(), Some("ara"));
    }

    #[tokio::test]
    async fn provider_rejection_maps_to_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/speech-to-text"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "detail": {"status": "invalid_audio", "message": "Could not decode audio"}
            })))
            .mount(&server)
            .await;

        let adapter =
            SpeechTranscriberAdapter::elevenlabs(scribe_config(&server.uri()), RetryConfig::default())
                .unwrap();
        let err = adapter
            .transcribe(clip(), TranscriptionRequest::new("ar"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Provider(msg) if msg.contains("Could not decode audio")));
    }

    #[tokio::test]
    async fn rate_limit_is_retried_when_enabled() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/speech-to-text"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/speech-to-text"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"text": "شكرا"})),
            )
            .mount(&server)
            .await;

        let retry = RetryConfig::new(1, 10, 2.0, 2).without_jitter();
        let adapter =
            SpeechTranscriberAdapter::elevenlabs(scribe_config(&server.uri()), retry).unwrap();
        let result = adapter
            .transcribe(clip(), TranscriptionRequest::new("ar"))
            .await
            .unwrap();

        assert_eq!(result.text, "شكرا");
    }

    #[tokio::test]
    async fn rate_limit_fails_fast_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/speech-to-text"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&server)
            .await;

        let adapter =
            SpeechTranscriberAdapter::elevenlabs(scribe_config(&server.uri()), RetryConfig::default())
                .unwrap();
        let err = adapter
            .transcribe(clip(), TranscriptionRequest::new("ar"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::RateLimited));
    }
}
