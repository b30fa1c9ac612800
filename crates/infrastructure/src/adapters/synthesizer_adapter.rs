//! Synthesizer adapter - Implements SynthesizerPort using ai_speech

use std::{fmt, sync::Arc};

use ai_speech::{OpenAISpeechProvider, SpeechConfig, SynthesisOptions, TextToSpeech};
use application::{ApplicationError, SynthesisResult, SynthesizerPort, VoiceConfig};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::error_mapping::map_speech_error;
use crate::retry::{RetryConfig, retry};

/// Adapter exposing a text-to-speech provider as a `SynthesizerPort`
pub struct SpeechSynthesizerAdapter {
    provider: Arc<dyn TextToSpeech>,
    retry: RetryConfig,
}

impl fmt::Debug for SpeechSynthesizerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechSynthesizerAdapter")
            .field("model", &self.provider.model_name())
            .field("default_voice", &self.provider.default_voice())
            .finish_non_exhaustive()
    }
}

impl SpeechSynthesizerAdapter {
    pub fn new(provider: Arc<dyn TextToSpeech>, retry: RetryConfig) -> Self {
        Self { provider, retry }
    }

    /// OpenAI speech synthesis
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
impl SynthesizerPort for SpeechSynthesizerAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = %voice.voice_id))]
    async fn synthesize(
        &self,
        text: String,
        voice: VoiceConfig,
    ) -> Result<SynthesisResult, ApplicationError> {
        let options = SynthesisOptions::new()
            .with_voice(voice.voice_id)
            .with_speed(voice.speed);

        let (text, options) = (text.as_str(), &options);
        let audio = retry(&self.retry, || async move {
            self.provider
                .synthesize(text, options)
                .await
                .map_err(map_speech_error)
        })
        .await?;

        debug!(audio_size = audio.size_bytes(), format = %audio.format(), "Speech synthesized");

        let format = audio.format();
        Ok(SynthesisResult {
            audio_data: audio.into_data(),
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::AudioFormat;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> SpeechConfig {
        SpeechConfig {
            openai_api_key: Some("sk-test".to_string()),
            openai_base_url: server.uri(),
            timeout_ms: 2_000,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn voice_settings_reach_the_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/audio/speech"))
            .and(body_partial_json(serde_json::json!({
                "voice": "shimmer",
                "speed": 1.25
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 64]))
            .expect(1)
            .mount(&server)
            .await;

        let adapter =
            SpeechSynthesizerAdapter::openai(config_for(&server), RetryConfig::default()).unwrap();
        let voice = VoiceConfig {
            voice_id: "shimmer".to_string(),
            speed: 1.25,
        };
        let result = adapter.synthesize("أهلاً".to_string(), voice).await.unwrap();

        assert_eq!(result.audio_data, vec![7u8; 64]);
        assert_eq!(result.format, AudioFormat::Mp3);
    }

    #[tokio::test]
    async fn outage_maps_to_provider_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/audio/speech"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let adapter =
            SpeechSynthesizerAdapter::openai(config_for(&server), RetryConfig::default()).unwrap();
        let err = adapter
            .synthesize("أهلاً".to_string(), VoiceConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ProviderUnavailable(_)));
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = SpeechSynthesizerAdapter::openai(SpeechConfig::default(), RetryConfig::default())
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
