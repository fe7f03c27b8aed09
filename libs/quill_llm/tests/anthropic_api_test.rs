//! Wire-level tests for the Anthropic client against a local mock server.

use quill_llm::anthropic::AnthropicModel;
use quill_llm::{ChatMessage, CompletionRequest, LanguageModel, LlmError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> CompletionRequest {
    CompletionRequest {
        model: "claude-sonnet-4-20250514".to_string(),
        system: "You are a copywriter.".to_string(),
        messages: vec![ChatMessage::user("Write something short.")],
        temperature: 0.8,
        max_tokens: 1500,
    }
}

fn model_for(server: &MockServer) -> AnthropicModel {
    AnthropicModel::new("test-key".to_string()).with_base_url(server.uri())
}

#[tokio::test]
async fn sends_versioned_request_and_reads_text_blocks() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-sonnet-4-20250514",
            "system": "You are a copywriter.",
            "messages": [{"role": "user", "content": "Write something short."}],
            "temperature": 0.8,
            "max_tokens": 1500
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_01",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "First half"},
                {"type": "text", "text": "second half"}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 42, "output_tokens": 17}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let completion = model_for(&server).complete(request()).await.unwrap();

    assert_eq!(completion.text(), "First half\nsecond half");
    assert_eq!(completion.usage.unwrap().output_tokens, 17);
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "type": "error",
            "error": {"type": "authentication_error", "message": "invalid x-api-key"}
        })))
        .mount(&server)
        .await;

    let error = model_for(&server).complete(request()).await.unwrap_err();

    match error {
        LlmError::Authentication(message) => assert_eq!(message, "invalid x-api-key"),
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn throttling_maps_to_rate_limit_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "type": "error",
            "error": {"type": "rate_limit_error", "message": "Number of requests exceeded"}
        })))
        .mount(&server)
        .await;

    let error = model_for(&server).complete(request()).await.unwrap_err();
    assert!(matches!(error, LlmError::RateLimit));
}

#[tokio::test]
async fn bad_request_maps_to_invalid_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "type": "error",
            "error": {"type": "invalid_request_error", "message": "max_tokens is required"}
        })))
        .mount(&server)
        .await;

    let error = model_for(&server).complete(request()).await.unwrap_err();

    match error {
        LlmError::InvalidRequest(message) => assert_eq!(message, "max_tokens is required"),
        other => panic!("expected InvalidRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn server_failure_maps_to_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let error = model_for(&server).complete(request()).await.unwrap_err();

    match error {
        LlmError::Provider(message) => assert!(message.starts_with("HTTP 500")),
        other => panic!("expected Provider, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_payload_maps_to_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let error = model_for(&server).complete(request()).await.unwrap_err();
    assert!(matches!(error, LlmError::Provider(_)));
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_network_error() {
    let model =
        AnthropicModel::new("test-key".to_string()).with_base_url("http://127.0.0.1:9");

    let error = model.complete(request()).await.unwrap_err();
    assert!(matches!(error, LlmError::Network(_)));
}
