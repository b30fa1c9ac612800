//! Chat adapter - Implements ChatCompletionPort using ai_core

use std::{fmt, sync::Arc};

use ai_core::{InferenceConfig, InferenceEngine, InferenceRequest, OpenAIChatEngine};
use application::{ApplicationError, ChatCompletion, ChatCompletionPort, ChatCompletionRequest};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::error_mapping::map_inference_error;
use crate::retry::{RetryConfig, retry};

/// Adapter exposing an inference engine as a `ChatCompletionPort`
pub struct ChatCompletionAdapter {
    engine: Arc<dyn InferenceEngine>,
    retry: RetryConfig,
}

impl fmt::Debug for ChatCompletionAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionAdapter")
            .field("model", &self.engine.default_model())
            .finish_non_exhaustive()
    }
}

impl ChatCompletionAdapter {
    pub fn new(engine: Arc<dyn InferenceEngine>, retry: RetryConfig) -> Self {
        Self { engine, retry }
    }

    /// OpenAI chat completions
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the API key is missing.
    pub fn openai(config: InferenceConfig, retry: RetryConfig) -> Result<Self, ApplicationError> {
        let engine = OpenAIChatEngine::new(config).map_err(map_inference_error)?;
        Ok(Self::new(Arc::new(engine), retry))
    }
}

#[async_trait]
impl ChatCompletionPort for ChatCompletionAdapter {
    #[instrument(skip(self, request), fields(model = self.engine.default_model()))]
    async fn complete(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletion, ApplicationError> {
        let inference_request =
            InferenceRequest::with_system(request.system_prompt, request.user_message)
                .with_temperature(request.temperature);

        let inference_request = &inference_request;
        let response = retry(&self.retry, || async move {
            self.engine
                .generate(inference_request.clone())
                .await
                .map_err(map_inference_error)
        })
        .await?;

        debug!(
            content_len = response.content.len(),
            tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "Chat completion received"
        );

        Ok(ChatCompletion {
            content: response.content,
            model: response.model,
        })
    }
}
