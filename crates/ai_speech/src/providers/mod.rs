//! Speech processing provider implementations
//!
//! Contains concrete implementations of the `SpeechToText` and `TextToSpeech` traits.

pub mod elevenlabs;
pub mod openai;

pub use elevenlabs::ElevenLabsScribeProvider;
pub use openai::OpenAISpeechProvider;
