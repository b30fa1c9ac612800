//! OpenAI chat-completions client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{
    InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage,
};

/// Chat engine backed by an OpenAI-compatible `/chat/completions` endpoint
#[derive(Debug, Clone)]
pub struct OpenAIChatEngine {
    client: Client,
    config: InferenceConfig,
}

impl OpenAIChatEngine {
    /// Create a new chat engine
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::Configuration` if the configuration is invalid
    /// or the HTTP client cannot be built.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        config.validate().map_err(InferenceError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                InferenceError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized OpenAI chat engine"
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }
}

/// Chat completion request body
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [InferenceMessage],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Chat completion response body
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// OpenAI API error envelope
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Map a non-success response onto an `InferenceError`
fn classify_failure(status: StatusCode, body: &str, model: &str) -> InferenceError {
    let parsed = serde_json::from_str::<ApiError>(body).ok();

    if let Some(api_error) = &parsed {
        match api_error.error.code.as_deref() {
            Some("rate_limit_exceeded") => return InferenceError::RateLimited,
            Some("model_not_found") => return InferenceError::ModelNotAvailable(model.to_string()),
            Some("invalid_api_key") => {
                return InferenceError::Unauthorized(api_error.error.message.clone());
            },
            _ => {},
        }
    }

    let message = parsed.map_or_else(|| format!("Status {status}: {body}"), |e| e.error.message);

    match status {
        StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => InferenceError::Unauthorized(message),
        StatusCode::NOT_FOUND => InferenceError::ModelNotAvailable(model.to_string()),
        s if s.is_server_error() => InferenceError::ServerError(message),
        _ => InferenceError::RequestFailed(message),
    }
}

#[async_trait]
impl InferenceEngine for OpenAIChatEngine {
    #[instrument(skip(self, request), fields(model = %self.config.default_model, messages = request.messages.len()))]
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        let model = self.config.default_model.as_str();

        let body = ChatCompletionRequest {
            model,
            messages: &request.messages,
            temperature: request.temperature.unwrap_or(self.config.temperature),
            max_tokens: self.config.max_tokens,
        };

        debug!("Sending chat completion request");

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(self.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::from_request(&e, self.config.timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(%status, "Chat completion request failed");
            return Err(classify_failure(status, &error_body, model));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::InvalidResponse("Response has no choices".into()))?;

        let usage = completion.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        debug!(tokens = ?usage, "Chat completion finished");

        Ok(InferenceResponse {
            content: choice.message.content.unwrap_or_default(),
            model: completion.model.unwrap_or_else(|| model.to_string()),
            usage,
            finish_reason: choice.finish_reason,
        })
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
