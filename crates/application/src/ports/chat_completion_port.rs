//! Chat completion port - Interface for LLM replies

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A single-turn chat request: system instructions plus the learner's words
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub system_prompt: String,
    pub user_message: String,
    /// Sampling temperature
    pub temperature: f32,
}

/// Reply from the language model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletion {
    /// Generated response content
    pub content: String,
    /// Model used for generation
    pub model: String,
}

/// Port for chat completion
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatCompletionPort: Send + Sync {
    async fn complete(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ApplicationError>;
}
