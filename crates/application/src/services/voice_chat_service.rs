//! Voice chat service - Spoken conversation with the Arabic tutor
//!
//! This service orchestrates the complete voice chat flow:
//! 1. Decode audio from the learner
//! 2. Transcribe audio to text (STT)
//! 3. Ask the tutor model for a reply
//! 4. Synthesize the reply (TTS)
//!
//! Any failure aborts the whole turn; no partial replies are produced.

use std::{fmt, sync::Arc, time::Instant};

use domain::AudioFormat;
use tracing::{debug, info, instrument, warn};

use crate::{
    audio_payload::{decode_audio_payload, encode_audio},
    error::ApplicationError,
    ports::{
        ChatCompletionPort, ChatCompletionRequest, SynthesizerPort, TranscriberPort,
        TranscriptionRequest, VoiceConfig,
    },
    prompts::{TRANSCRIPTION_PRIMING_PROMPT, TUTOR_SYSTEM_PROMPT},
};

/// Configuration for voice chat turns
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceChatConfig {
    /// Language hint for transcription
    pub language: String,
    /// Vocabulary hint for transcription
    pub transcription_prompt: Option<String>,
    /// Instructions for the tutor model
    pub system_prompt: String,
    pub temperature: f32,
    /// Voice used for the spoken reply
    pub voice: VoiceConfig,
}

impl Default for VoiceChatConfig {
    fn default() -> Self {
        Self {
            language: "ar".to_string(),
            transcription_prompt: Some(TRANSCRIPTION_PRIMING_PROMPT.to_string()),
            system_prompt: TUTOR_SYSTEM_PROMPT.to_string(),
            temperature: 0.4,
            voice: VoiceConfig::default(),
        }
    }
}

/// One completed conversation turn
#[derive(Clone, PartialEq, Eq)]
pub struct VoiceChatReply {
    /// What the learner said
    pub transcript: String,
    /// What the tutor answered
    pub response_text: String,
    /// The answer, spoken
    pub response_audio: Vec<u8>,
    pub audio_format: AudioFormat,
}

impl VoiceChatReply {
    /// Reply audio as standard base64
    #[must_use]
    pub fn response_audio_base64(&self) -> String {
        encode_audio(&self.response_audio)
    }
}

impl fmt::Debug for VoiceChatReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceChatReply")
            .field("transcript", &self.transcript)
            .field("response_text", &self.response_text)
            .field("audio_bytes", &self.response_audio.len())
            .field("audio_format", &self.audio_format)
            .finish()
    }
}

/// Service for voice conversations with the tutor
pub struct VoiceChatService {
    transcriber: Arc<dyn TranscriberPort>,
    chat: Arc<dyn ChatCompletionPort>,
    synthesizer: Arc<dyn SynthesizerPort>,
    config: VoiceChatConfig,
}

impl fmt::Debug for VoiceChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceChatService")
            .field("language", &self.config.language)
            .field("voice", &self.config.voice)
            .finish_non_exhaustive()
    }
}

impl VoiceChatService {
    pub fn new(
        transcriber: Arc<dyn TranscriberPort>,
        chat: Arc<dyn ChatCompletionPort>,
        synthesizer: Arc<dyn SynthesizerPort>,
    ) -> Self {
        Self::with_config(transcriber, chat, synthesizer, VoiceChatConfig::default())
    }

    pub fn with_config(
        transcriber: Arc<dyn TranscriberPort>,
        chat: Arc<dyn ChatCompletionPort>,
        synthesizer: Arc<dyn SynthesizerPort>,
        config: VoiceChatConfig,
    ) -> Self {
        Self {
            transcriber,
            chat,
            synthesizer,
            config,
        }
    }

    /// Run one conversation turn end-to-end
    ///
    /// # Errors
    ///
    /// Returns the first failure of decoding, transcription, chat completion
    /// or synthesis.
    #[instrument(skip(self, audio_payload), fields(payload_len = audio_payload.len()))]
    pub async fn respond(&self, audio_payload: &str) -> Result<VoiceChatReply, ApplicationError> {
        let start = Instant::now();
        let clip = decode_audio_payload(audio_payload)?;

        info!("Transcribing learner audio");
        let mut request = TranscriptionRequest::new(&self.config.language);
        if let Some(prompt) = &self.config.transcription_prompt {
            request = request.with_prompt(prompt);
        }
        let transcript = self
            .transcriber
            .transcribe(clip, request)
            .await
            .inspect_err(|e| warn!(error = %e, "Transcription failed"))?
            .text;
        debug!(transcript = %transcript, "Transcription complete");

        info!("Requesting tutor reply");
        let completion = self
            .chat
            .complete(ChatCompletionRequest {
                system_prompt: self.config.system_prompt.clone(),
                user_message: transcript.clone(),
                temperature: self.config.temperature,
            })
            .await
            .inspect_err(|e| warn!(error = %e, "Chat completion failed"))?;
        debug!(model = %completion.model, response_len = completion.content.len(), "Tutor replied");

        info!("Synthesizing tutor reply");
        let speech = self
            .synthesizer
            .synthesize(completion.content.clone(), self.config.voice.clone())
            .await
            .inspect_err(|e| warn!(error = %e, "Synthesis failed"))?;

        #[allow(clippy::cast_possible_truncation)]
        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            processing_time_ms,
            audio_bytes = speech.audio_data.len(),
            "Voice chat turn complete"
        );

        Ok(VoiceChatReply {
            transcript,
            response_text: completion.content,
            response_audio: speech.audio_data,
            audio_format: speech.format,
        })
    }
}
