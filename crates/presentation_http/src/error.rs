//! API error handling
//!
//! Every failure leaves the server as `{"error": ..., "code": ...}`.

use application::ApplicationError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Rate limited")]
    RateLimited,

    /// A provider credential or setting is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A provider answered with an error
    #[error("Provider error: {0}")]
    BadGateway(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Configuration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::RateLimited => "rate_limited",
            Self::Configuration(_) => "configuration_error",
            Self::BadGateway(_) => "provider_error",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }

    fn message(self) -> String {
        match self {
            Self::RateLimited => "Rate limit exceeded".to_string(),
            Self::BadRequest(msg)
            | Self::PayloadTooLarge(msg)
            | Self::Configuration(msg)
            | Self::BadGateway(msg)
            | Self::ServiceUnavailable(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            error!(%status, code, error = %self, "Request failed");
        } else {
            warn!(%status, code, error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.message(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(_) | ApplicationError::Decode(_) => {
                Self::BadRequest(err.to_string())
            },
            ApplicationError::Configuration(msg) => Self::Configuration(msg),
            ApplicationError::Provider(msg) => Self::BadGateway(msg),
            ApplicationError::ProviderUnavailable(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::RateLimited => Self::RateLimited,
            ApplicationError::Unexpected(msg) => Self::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}
