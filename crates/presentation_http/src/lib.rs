//! Natiq HTTP presentation layer
//!
//! This crate provides the HTTP API for pronunciation practice and voice chat.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use extract::ApiJson;
pub use middleware::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use routes::{create_app, create_router};
pub use server::{ShutdownOutcome, serve};
pub use state::AppState;
