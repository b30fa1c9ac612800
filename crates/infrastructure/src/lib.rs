//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the speech and
//! chat provider crates, loads configuration and wires the use cases.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod retry;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::{Provisioned, ServiceRegistry, build_services};
pub use config::{AppConfig, ExerciseAppConfig, LegacyCredentials, ServerConfig};
pub use retry::{RetryConfig, RetryResult, Retryable, retry, with_retry};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
