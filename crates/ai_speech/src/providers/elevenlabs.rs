//! ElevenLabs Scribe Provider
//!
//! Implements `SpeechToText` against `POST /v1/speech-to-text`. Scribe has no
//! priming prompt, so `TranscriptionOptions::prompt` is ignored.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::ElevenLabsConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{AudioData, Transcription, TranscriptionOptions};

/// Header carrying the ElevenLabs API key
const API_KEY_HEADER: &str = "xi-api-key";

/// Scribe sniffs the container itself; the upload is always labelled as WAV
const UPLOAD_FILENAME: &str = "audio.wav";
const UPLOAD_MIME: &str = "audio/wav";

/// ElevenLabs Scribe transcription provider
#[derive(Debug, Clone)]
pub struct ElevenLabsScribeProvider {
    client: Client,
    config: ElevenLabsConfig,
}

impl ElevenLabsScribeProvider {
    /// Create a new Scribe provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: ElevenLabsConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    fn stt_url(&self) -> String {
        format!("{}/v1/speech-to-text", self.config.base_url)
    }
}

/// Scribe transcription response
#[derive(Debug, Deserialize)]
struct ScribeResponse {
    text: String,
    #[serde(default)]
    language_code: Option<String>,
    #[serde(default)]
    language_probability: Option<f32>,
}

/// Scribe error body: `{"detail": {"status": ..., "message": ...}}` or `{"detail": "..."}`
#[derive(Debug, Deserialize)]
struct ScribeError {
    detail: ScribeErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScribeErrorDetail {
    Structured {
        #[serde(default)]
        status: Option<String>,
        message: String,
    },
    Text(String),
}

fn classify_failure(status: StatusCode, body: &str) -> SpeechError {
    let detail = serde_json::from_str::<ScribeError>(body).ok().map(|e| e.detail);

    let (code, message) = match detail {
        Some(ScribeErrorDetail::Structured { status: code, message }) => (code, message),
        Some(ScribeErrorDetail::Text(message)) => (None, message),
        None => (None, format!("HTTP {status}: {body}")),
    };

    match (status, code.as_deref()) {
        (StatusCode::TOO_MANY_REQUESTS, _) | (_, Some("too_many_concurrent_requests")) => {
            SpeechError::RateLimited
        },
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) | (_, Some("invalid_api_key")) => {
            SpeechError::Unauthorized(message)
        },
        (s, _) if s.is_server_error() => SpeechError::ServiceUnavailable(message),
        _ => SpeechError::TranscriptionFailed(message),
    }
}

#[async_trait]
impl SpeechToText for ElevenLabsScribeProvider {
    #[instrument(skip(self, audio, options), fields(
        audio_size = audio.size_bytes(),
        format = %audio.format(),
        language = ?options.language
    ))]
    async fn transcribe(
        &self,
        audio: AudioData,
        options: &TranscriptionOptions,
    ) -> Result<Transcription, SpeechError> {
        debug!("Transcribing audio with ElevenLabs Scribe");

        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }
        if audio.size_bytes() > self.config.max_audio_bytes {
            return Err(SpeechError::AudioTooLarge {
                size_bytes: audio.size_bytes(),
                max_bytes: self.config.max_audio_bytes,
            });
        }

        let file_part = Part::bytes(audio.into_data())
            .file_name(UPLOAD_FILENAME)
            .mime_str(UPLOAD_MIME)
            .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("model_id", self.config.model_id.clone())
            .text("diarize", self.config.diarize.to_string());
        if let Some(language) = &options.language {
            form = form.text("language_code", language.clone());
        }

        let response = self
            .client
            .post(self.stt_url())
            .header(API_KEY_HEADER, self.api_key())
            .multipart(form)
            .send()
            .await
            .map_err(|e| SpeechError::from_request(&e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(%status, "ElevenLabs transcription request failed");
            return Err(classify_failure(status, &error_body));
        }

        let body: ScribeResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        debug!(
            text_len = body.text.len(),
            language = ?body.language_code,
            "Transcription complete"
        );

        let mut transcription = Transcription::new(body.text);
        if let Some(language) = body.language_code.or_else(|| options.language.clone()) {
            transcription = transcription.with_language(language);
        }
        if let Some(probability) = body.language_probability {
            transcription = transcription.with_confidence(probability);
        }

        Ok(transcription)
    }

    fn model_name(&self) -> &str {
        &self.config.model_id
    }
}
