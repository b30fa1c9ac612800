//! Telemetry infrastructure
//!
//! Structured console logging via `tracing-subscriber`, as text or JSON.

mod logging;

pub use logging::{LogFormat, TelemetryError, init_tracing};
