//! Voice chat handler

use std::fmt;

use application::VoiceChatReply;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, extract::ApiJson, state::AppState};

/// Voice chat request body
#[derive(Deserialize)]
pub struct VoiceChatRequest {
    /// Base64 recording, raw or as a data URL
    pub audio: String,
}

impl fmt::Debug for VoiceChatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceChatRequest")
            .field("audio_len", &self.audio.len())
            .finish()
    }
}

/// Voice chat response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceChatResponse {
    /// What the learner said
    pub transcript: String,
    /// Tutor reply
    pub response_text: String,
    /// Spoken tutor reply, base64
    pub response_audio: String,
}

impl From<VoiceChatReply> for VoiceChatResponse {
    fn from(reply: VoiceChatReply) -> Self {
        let response_audio = reply.response_audio_base64();
        Self {
            transcript: reply.transcript,
            response_text: reply.response_text,
            response_audio,
        }
    }
}

/// Run one tutor conversation turn
#[instrument(skip(state, request), fields(audio_len = request.audio.len()))]
pub async fn voice_chat(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<VoiceChatRequest>,
) -> Result<Json<VoiceChatResponse>, ApiError> {
    let service = state.voice_chat.get()?;
    let reply = service.respond(&request.audio).await?;

    info!(
        transcript_len = reply.transcript.len(),
        response_len = reply.response_text.len(),
        audio_bytes = reply.response_audio.len(),
        "Voice chat turn complete"
    );

    Ok(Json(reply.into()))
}
