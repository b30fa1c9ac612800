//! Application services - Use case implementations

mod attempt_service;
mod exercise_service;
mod voice_chat_service;

pub use attempt_service::{AttemptConfig, AttemptService};
pub use exercise_service::{ExerciseSelection, ExerciseService};
pub use voice_chat_service::{VoiceChatConfig, VoiceChatReply, VoiceChatService};
