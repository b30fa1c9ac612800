//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use infrastructure::Provisioned;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub attempt: FlowStatus,
    pub voice_chat: FlowStatus,
    pub exercises: usize,
}

/// Whether a flow has the credentials it needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowStatus {
    pub configured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl<T> From<&Provisioned<T>> for FlowStatus {
    fn from(service: &Provisioned<T>) -> Self {
        match service {
            Provisioned::Ready(_) => Self {
                configured: true,
                reason: None,
            },
            Provisioned::Unconfigured(reason) => Self {
                configured: false,
                reason: Some(reason.clone()),
            },
        }
    }
}

/// Readiness check - are all flows configured?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let attempt = FlowStatus::from(&state.attempt);
    let voice_chat = FlowStatus::from(&state.voice_chat);

    let ready = attempt.configured && voice_chat.configured;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            attempt,
            voice_chat,
            exercises: state.exercises.catalog().len(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn flow_status_from_provisioned() {
        let ready = FlowStatus::from(&Provisioned::Ready(Arc::new(())));
        assert!(ready.configured);
        assert!(ready.reason.is_none());

        let missing =
            FlowStatus::from(&Provisioned::<()>::Unconfigured("OpenAI API Key not configured".into()));
        assert!(!missing.configured);
        assert_eq!(missing.reason.as_deref(), Some("OpenAI API Key not configured"));
    }

    #[test]
    fn configured_flow_omits_reason() {
        let json = serde_json::to_value(FlowStatus {
            configured: true,
            reason: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"configured": true}));
    }

    #[tokio::test]
    async fn health_reports_crate_version() {
        let Json(response) = health_check().await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }
}
