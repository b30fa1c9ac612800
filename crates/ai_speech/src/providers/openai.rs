//! OpenAI Speech Provider
//!
//! Implements `SpeechToText` using the OpenAI transcription endpoint and
//! `TextToSpeech` using the OpenAI speech endpoint.
//!
//! # Supported Audio Formats
//!
//! ## STT
//! - flac, m4a, mp3, ogg, wav, webm
//! - bare Opus streams are rejected; wrap them in OGG or WebM
//!
//! ## TTS
//! - mp3, opus, aac, flac, wav, pcm

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::{SpeechConfig, validate_speed};
use crate::error::SpeechError;
use crate::ports::{SpeechToText, TextToSpeech};
use crate::staging::StagedAudio;
use crate::types::{AudioData, AudioFormat, SynthesisOptions, Transcription, TranscriptionOptions};

/// Maximum TTS input length accepted by the API
const MAX_TTS_INPUT_CHARS: usize = 4096;

/// OpenAI speech provider implementing both STT and TTS
#[derive(Debug, Clone)]
pub struct OpenAISpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl OpenAISpeechProvider {
    /// Create a new OpenAI speech provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Get the API key
    fn api_key(&self) -> &str {
        self.config.openai_api_key.as_deref().unwrap_or_default()
    }

    /// Build the STT endpoint URL
    fn stt_url(&self) -> String {
        format!("{}/audio/transcriptions", self.config.openai_base_url)
    }

    /// Build the TTS endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/audio/speech", self.config.openai_base_url)
    }

    fn request_error(&self, err: &reqwest::Error) -> SpeechError {
        SpeechError::from_request(err, self.config.timeout_ms)
    }

    /// Whether the transcription endpoint accepts this container
    const fn is_transcription_supported(format: AudioFormat) -> bool {
        !matches!(format, AudioFormat::Opus)
    }

    /// Convert OpenAI response format string to AudioFormat
    fn response_format_to_audio_format(format: &str) -> AudioFormat {
        match format {
            "opus" => AudioFormat::Opus,
            "aac" => AudioFormat::M4a,
            "flac" => AudioFormat::Flac,
            "wav" | "pcm" => AudioFormat::Wav,
            _ => AudioFormat::Mp3,
        }
    }

    /// Convert AudioFormat to OpenAI TTS response format string
    const fn audio_format_to_response_format(format: AudioFormat) -> &'static str {
        match format {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Opus | AudioFormat::Ogg | AudioFormat::Webm => "opus",
            AudioFormat::M4a => "aac",
            AudioFormat::Flac => "flac",
            AudioFormat::Wav => "wav",
        }
    }

    fn check_upload(&self, audio: &AudioData) -> Result<(), SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }
        if audio.size_bytes() > self.config.max_audio_bytes {
            return Err(SpeechError::AudioTooLarge {
                size_bytes: audio.size_bytes(),
                max_bytes: self.config.max_audio_bytes,
            });
        }
        if !Self::is_transcription_supported(audio.format()) {
            return Err(SpeechError::InvalidAudio(format!(
                "Audio format {} is not supported for transcription",
                audio.format()
            )));
        }
        Ok(())
    }

    /// Build the multipart body, going through a staged file when configured
    ///
    /// The staged file is dropped (and deleted) before this returns.
    async fn upload_form(
        &self,
        audio: AudioData,
        options: &TranscriptionOptions,
    ) -> Result<Form, SpeechError> {
        let audio = if self.config.stage_uploads {
            let staged = StagedAudio::stage(&audio, self.config.staging_dir.as_deref()).await?;
            staged.read().await?
        } else {
            audio
        };

        let filename = audio.filename("audio");
        let mime_type = audio.mime_type();
        let file_part = Part::bytes(audio.into_data())
            .file_name(filename)
            .mime_str(mime_type)
            .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;

        let mut form = Form::new()
            .part("file", file_part)
            .text("model", self.config.stt_model.clone())
            .text("response_format", "json");
        if let Some(language) = &options.language {
            form = form.text("language", language.clone());
        }
        if let Some(prompt) = &options.prompt {
            form = form.text("prompt", prompt.clone());
        }
        Ok(form)
    }
}

/// OpenAI transcription response
#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

/// OpenAI TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
    speed: f32,
}

/// OpenAI API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    code: Option<String>,
}

/// Map a non-success response onto a `SpeechError`
///
/// `fallback` wraps messages that carry no more specific meaning.
fn classify_failure(
    status: StatusCode,
    body: &str,
    model: &str,
    fallback: fn(String) -> SpeechError,
) -> SpeechError {
    let parsed = serde_json::from_str::<ApiError>(body).ok();

    if let Some(api_error) = &parsed {
        match api_error.error.code.as_deref() {
            Some("rate_limit_exceeded") => return SpeechError::RateLimited,
            Some("model_not_found") => return SpeechError::ModelNotAvailable(model.to_string()),
            Some("invalid_api_key") => {
                return SpeechError::Unauthorized(api_error.error.message.clone());
            },
            _ => {},
        }
    }

    let message = parsed.map_or_else(|| format!("HTTP {status}: {body}"), |e| e.error.message);

    match status {
        StatusCode::TOO_MANY_REQUESTS => SpeechError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SpeechError::Unauthorized(message),
        s if s.is_server_error() => SpeechError::ServiceUnavailable(message),
        _ => fallback(message),
    }
}

#[async_trait]
impl SpeechToText for OpenAISpeechProvider {
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
        debug!("Transcribing audio with OpenAI");

        self.check_upload(&audio)?;
        let form = self.upload_form(audio, options).await?;

        let response = self
            .client
            .post(self.stt_url())
            .bearer_auth(self.api_key())
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(%status, "OpenAI transcription request failed");
            return Err(classify_failure(
                status,
                &error_body,
                &self.config.stt_model,
                SpeechError::TranscriptionFailed,
            ));
        }

        let body: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        debug!(
            text_len = body.text.len(),
            language = ?body.language,
            "Transcription complete"
        );

        let mut transcription = Transcription::new(body.text);

        if let Some(lang) = body.language.or_else(|| options.language.clone()) {
            transcription = transcription.with_language(lang);
        }

        if let Some(duration) = body.duration {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let duration_ms = (duration * 1000.0) as u64;
            transcription = transcription.with_duration(duration_ms);
        }

        Ok(transcription)
    }

    fn model_name(&self) -> &str {
        &self.config.stt_model
    }
}

#[async_trait]
impl TextToSpeech for OpenAISpeechProvider {
    #[instrument(skip(self, text, options), fields(text_len = text.len(), voice = ?options.voice))]
    async fn synthesize(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<AudioData, SpeechError> {
        debug!("Synthesizing speech with OpenAI TTS");

        if text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        let char_count = text.chars().count();
        if char_count > MAX_TTS_INPUT_CHARS {
            return Err(SpeechError::SynthesisFailed(format!(
                "Text too long: {char_count} characters exceeds {MAX_TTS_INPUT_CHARS} limit"
            )));
        }

        let speed = options.speed.unwrap_or(self.config.speed);
        validate_speed(speed).map_err(SpeechError::SynthesisFailed)?;

        let voice = options.voice.as_deref().unwrap_or(&self.config.default_voice);
        let format = options.format.unwrap_or(self.config.output_format);
        let response_format = Self::audio_format_to_response_format(format);

        let request = TtsRequest {
            model: &self.config.tts_model,
            input: text,
            voice,
            response_format,
            speed,
        };

        let response = self
            .client
            .post(self.tts_url())
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(%status, "OpenAI speech request failed");
            if error_body.contains("invalid_voice") {
                return Err(SpeechError::VoiceNotFound(voice.to_string()));
            }
            return Err(classify_failure(
                status,
                &error_body,
                &self.config.tts_model,
                SpeechError::SynthesisFailed,
            ));
        }

        let audio_bytes: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        if audio_bytes.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Speech endpoint returned no audio".to_string(),
            ));
        }

        debug!(audio_size = audio_bytes.len(), "Speech synthesis complete");

        let output_format = Self::response_format_to_audio_format(response_format);
        Ok(AudioData::new(audio_bytes.to_vec(), output_format))
    }

    fn model_name(&self) -> &str {
        &self.config.tts_model
    }

    fn default_voice(&self) -> &str {
        &self.config.default_voice
    }
}
