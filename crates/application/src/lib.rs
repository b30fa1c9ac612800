//! Application layer - Use cases and orchestration
//!
//! Contains the attempt, voice-chat and exercise use cases together with the
//! port definitions they depend on. Orchestrates domain objects and
//! infrastructure adapters.

pub mod audio_payload;
pub mod error;
pub mod ports;
pub mod prompts;
pub mod services;

pub use audio_payload::{decode_audio_payload, encode_audio};
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
