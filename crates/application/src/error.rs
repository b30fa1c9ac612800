//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A required credential or setting is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The audio payload could not be decoded
    #[error("Invalid audio payload: {0}")]
    Decode(String),

    /// An external provider rejected the request or returned garbage
    #[error("Provider error: {0}")]
    Provider(String),

    /// An external provider could not be reached or is overloaded
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Anything else
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ProviderUnavailable(_))
    }
}
