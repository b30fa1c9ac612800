//! Translation of provider errors into application errors

use ai_core::InferenceError;
use ai_speech::SpeechError;
use application::ApplicationError;

/// Map a speech provider error onto the application taxonomy
pub fn map_speech_error(err: SpeechError) -> ApplicationError {
    match err {
        SpeechError::Configuration(msg) => ApplicationError::Configuration(msg),
        SpeechError::RateLimited => ApplicationError::RateLimited,
        SpeechError::InvalidAudio(_) | SpeechError::AudioTooLarge { .. } => {
            ApplicationError::Decode(err.to_string())
        },
        SpeechError::Staging(_) => ApplicationError::Unexpected(err.to_string()),
        err if err.is_transient() => ApplicationError::ProviderUnavailable(err.to_string()),
        err => ApplicationError::Provider(err.to_string()),
    }
}

/// Map a chat engine error onto the application taxonomy
pub fn map_inference_error(err: InferenceError) -> ApplicationError {
    match err {
        InferenceError::Configuration(msg) => ApplicationError::Configuration(msg),
        InferenceError::RateLimited => ApplicationError::RateLimited,
        err if err.is_transient() => ApplicationError::ProviderUnavailable(err.to_string()),
        err => ApplicationError::Provider(err.to_string()),
    }
}
