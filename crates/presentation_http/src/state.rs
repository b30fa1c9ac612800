//! Application state shared across handlers

use std::sync::Arc;

use application::{AttemptService, ExerciseService, VoiceChatService};
use infrastructure::{Provisioned, ServiceRegistry};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pronunciation scoring, if ElevenLabs is configured
    pub attempt: Provisioned<AttemptService>,
    /// Tutor conversation, if OpenAI is configured
    pub voice_chat: Provisioned<VoiceChatService>,
    pub exercises: Arc<ExerciseService>,
}

impl From<ServiceRegistry> for AppState {
    fn from(registry: ServiceRegistry) -> Self {
        Self {
            attempt: registry.attempt,
            voice_chat: registry.voice_chat,
            exercises: registry.exercises,
        }
    }
}
