//! Integration tests for the OpenAI chat engine using WireMock
//!
//! These tests mock the chat-completions API to verify client behavior
//! without reaching the real service.

use std::sync::Arc;
use std::time::Duration;

use ai_core::{
    InferenceConfig, InferenceEngine, InferenceError, InferenceMessage, InferenceRequest,
    OpenAIChatEngine,
};

const TUTOR: &str = "You are a patient Arabic tutor";
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn config_for_mock(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        api_key: Some("sk-test".to_string()),
        base_url: base_url.to_string(),
        default_model: "gpt-4o".to_string(),
        timeout_ms: 2000,
        max_tokens: None,
        temperature: 0.4,
    }
}

fn chat_success_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

fn error_response(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {"message": message, "type": "invalid_request_error", "code": code}
    })
}

async fn engine_with(server: &MockServer) -> Arc<dyn InferenceEngine> {
    Arc::new(OpenAIChatEngine::new(config_for_mock(&server.uri())).unwrap())
}

// =============================================================================
// Generate Tests
// =============================================================================

#[tokio::test]
async fn generate_returns_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response(
            "Marhaban! **مرحبا** means hello.",
        )))
        .mount(&server)
        .await;

    let engine = engine_with(&server).await;
    let response = engine
        .generate(InferenceRequest::with_system(TUTOR, "How do I say hello?"))
        .await
        .unwrap();

    assert_eq!(response.content, "Marhaban! **مرحبا** means hello.");
    assert!(response.usage.is_none());
}

#[tokio::test]
async fn generate_sends_system_prompt_first() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "messages": [
                {"role": "system", "content": TUTOR},
                {"role": "user", "content": "كيف حالك"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let engine = engine_with(&server).await;
    let request = InferenceRequest {
        messages: vec![
            InferenceMessage::system(TUTOR),
            InferenceMessage::user("كيف حالك"),
        ],
        temperature: None,
    };

    assert_eq!(engine.generate(request).await.unwrap().content, "ok");
}

#[tokio::test]
async fn generate_uses_configured_model_and_request_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o-mini",
            "temperature": 1.0,
            "max_tokens": 64
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let config = InferenceConfig {
        default_model: "gpt-4o-mini".to_string(),
        max_tokens: Some(64),
        ..config_for_mock(&server.uri())
    };
    let engine = OpenAIChatEngine::new(config).unwrap();
    let request = InferenceRequest::with_system(TUTOR, "hi").with_temperature(1.0);

    engine.generate(request).await.unwrap();
}

// =============================================================================
// Error Mapping Tests
// =============================================================================

#[tokio::test]
async fn rate_limit_is_transient() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(error_response("rate_limit_exceeded", "Rate limit reached")),
        )
        .mount(&server)
        .await;

    let err = engine_with(&server)
        .await
        .generate(InferenceRequest::with_system(TUTOR, "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::RateLimited));
    assert!(err.is_transient());
}

#[tokio::test]
async fn invalid_key_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(error_response("invalid_api_key", "Incorrect API key provided")),
        )
        .mount(&server)
        .await;

    let err = engine_with(&server)
        .await
        .generate(InferenceRequest::with_system(TUTOR, "hi"))
        .await
        .unwrap_err();

    assert!(
        matches!(&err, InferenceError::Unauthorized(msg) if msg == "Incorrect API key provided")
    );
    assert!(!err.is_transient());
}

#[tokio::test]
async fn server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = engine_with(&server)
        .await
        .generate(InferenceRequest::with_system(TUTOR, "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::ServerError(msg) if msg.contains("overloaded")));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = engine_with(&server)
        .await
        .generate(InferenceRequest::with_system(TUTOR, "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::InvalidResponse(_)));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_success_response("late"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let err = engine_with(&server)
        .await
        .generate(InferenceRequest::with_system(TUTOR, "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::Timeout(2000)));
}
