//! Attempt service - Scores a recorded pronunciation attempt
//!
//! 1. Decode the client audio payload
//! 2. Transcribe it (STT)
//! 3. Compare the transcript with the reference phrase

use std::{fmt, sync::Arc};

use domain::{ScoreResult, score_attempt};
use tracing::{debug, info, instrument, warn};

use crate::{
    audio_payload::decode_audio_payload,
    error::ApplicationError,
    ports::{TranscriberPort, TranscriptionRequest},
};

/// Configuration for attempt scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptConfig {
    /// Language hint for transcription
    pub language: String,
}

impl Default for AttemptConfig {
    fn default() -> Self {
        Self {
            language: "ar".to_string(),
        }
    }
}

/// Service for scoring pronunciation attempts
pub struct AttemptService {
    transcriber: Arc<dyn TranscriberPort>,
    config: AttemptConfig,
}

impl fmt::Debug for AttemptService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttemptService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AttemptService {
    pub fn new(transcriber: Arc<dyn TranscriberPort>) -> Self {
        Self::with_config(transcriber, AttemptConfig::default())
    }

    pub fn with_config(transcriber: Arc<dyn TranscriberPort>, config: AttemptConfig) -> Self {
        Self {
            transcriber,
            config,
        }
    }

    /// Transcribe `audio_payload` and score it against `reference_text`
    ///
    /// # Errors
    ///
    /// Returns the first failure of decoding or transcription; nothing is
    /// scored in that case.
    #[instrument(skip(self, reference_text, audio_payload), fields(
        reference_chars = reference_text.chars().count(),
        payload_len = audio_payload.len()
    ))]
    pub async fn evaluate(
        &self,
        reference_text: &str,
        audio_payload: &str,
    ) -> Result<ScoreResult, ApplicationError> {
        let clip = decode_audio_payload(audio_payload)?;

        let transcription = self
            .transcriber
            .transcribe(clip, TranscriptionRequest::new(&self.config.language))
            .await
            .inspect_err(|e| warn!(error = %e, "Transcription failed"))?;

        debug!(transcript = %transcription.text, "Transcription complete");

        let result = score_attempt(reference_text, &transcription.text);

        info!(
            score = result.score.value(),
            is_match = result.is_match,
            feedback = %result.feedback,
            "Attempt scored"
        );

        Ok(result)
    }
}
