//! Pronunciation attempt handler

use std::fmt;

use axum::{Json, extract::State};
use domain::ScoreResult;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{error::ApiError, extract::ApiJson, state::AppState};

/// Attempt request body
#[derive(Deserialize)]
pub struct AttemptRequest {
    /// Reference phrase the learner tried to say
    pub text: String,
    /// Base64 recording, raw or as a data URL
    pub audio: String,
}

impl fmt::Debug for AttemptRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttemptRequest")
            .field("text", &self.text)
            .field("audio_len", &self.audio.len())
            .finish()
    }
}

/// Transcribe the recording and score it against the reference text
#[instrument(skip(state, request), fields(audio_len = request.audio.len()))]
pub async fn submit_attempt(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AttemptRequest>,
) -> Result<Json<ScoreResult>, ApiError> {
    let service = state.attempt.get()?;
    let result = service.evaluate(&request.text, &request.audio).await?;

    info!(
        score = result.score.value(),
        is_match = result.is_match,
        "Attempt scored"
    );

    Ok(Json(result))
}
