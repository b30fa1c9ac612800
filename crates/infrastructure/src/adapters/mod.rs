//! Adapters implementing application ports on top of the provider crates

mod chat_adapter;
mod error_mapping;
mod synthesizer_adapter;
mod transcriber_adapter;

pub use chat_adapter::ChatCompletionAdapter;
pub use error_mapping::{map_inference_error, map_speech_error};
pub use synthesizer_adapter::SpeechSynthesizerAdapter;
pub use transcriber_adapter::SpeechTranscriberAdapter;
