use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ocichat_api::{DispatchError, ProxyClient};

fn client_for(server: &MockServer) -> ProxyClient {
    ProxyClient::new(format!("{}/v1", server.uri()), "sk-any-string", None, false).unwrap()
}

#[tokio::test]
async fn test_chat_completion_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-any-string"))
        .and(body_partial_json(json!({
            "model": "oci/xai.grok-3",
            "messages": [{"role": "user", "content": "say hello from OCI"}],
            "temperature": 0.7,
            "max_tokens": 150
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl_test123",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "oci/xai.grok-3",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello from OCI!"},
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 12,
                "completion_tokens": 5,
                "total_tokens": 17
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .chat_completion("oci/xai.grok-3", "say hello from OCI")
        .await
        .unwrap();

    assert_eq!(response.model.as_deref(), Some("oci/xai.grok-3"));
    assert_eq!(response.primary_content(), Some("Hello from OCI!"));
    let usage = response.usage.unwrap();
    assert_eq!(usage.prompt_tokens, 12);
    assert_eq!(usage.completion_tokens, 5);
    assert_eq!(usage.total_tokens, 17);
}

#[tokio::test]
async fn test_endpoint_error_surfaces_without_panicking() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "OCI provider unavailable"}
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .chat_completion("oci/xai.grok-3", "hello")
        .await;

    match result {
        Err(DispatchError::Endpoint { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("OCI provider unavailable"));
        }
        other => panic!("expected Endpoint error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_proxy_is_a_transport_error() {
    // Nothing listens on this port.
    let client = ProxyClient::new("http://127.0.0.1:1/v1", "sk-any-string", None, false).unwrap();
    let result = client.chat_completion("oci/xai.grok-3", "hello").await;
    match result {
        Err(DispatchError::Transport(_)) => {}
        other => panic!("expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .chat_completion("oci/xai.grok-3", "hello")
        .await;
    match result {
        Err(DispatchError::Malformed(_)) => {}
        other => panic!("expected Malformed error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_exactly_one_attempt_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let _ = client_for(&server)
        .chat_completion("oci/xai.grok-3", "hello")
        .await;
    // MockServer verifies the expect(1) count on drop.
}
