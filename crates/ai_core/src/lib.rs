//! AI Core - Chat completion engine
//!
//! Provides the inference abstraction used for tutoring replies and an
//! implementation backed by the OpenAI chat-completions API.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::OpenAIChatEngine;
pub use ports::{
    InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, MessageRole, TokenUsage,
};
