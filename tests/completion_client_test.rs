//! Integration tests for the chat completion client
//!
//! Tests HTTP client behavior using wiremock for request/response mocking.

use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use account_plan_assistant::completion::{
    complete, ChatRequest, CompletionBackend, ConversationTurn, GroqClient,
};
use account_plan_assistant::config::{GenerationConfig, GroqConfig, RequestConfig};
use account_plan_assistant::error::CompletionError;
use account_plan_assistant::prompts::FALLBACK_REPLY;

/// Create a test client pointing to mock server
fn create_test_client(base_url: &str) -> GroqClient {
    let config = GroqConfig {
        api_key: "test-api-key".to_string(),
        base_url: base_url.to_string(),
    };

    GroqClient::new(&config, RequestConfig { timeout_ms: Some(5000) })
        .expect("Failed to create client")
}

fn create_test_request(content: &str) -> ChatRequest {
    ChatRequest::new(
        "llama-3.3-70b-versatile",
        vec![ConversationTurn::user(content)],
    )
}

fn completion_body(text: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25}
    })
}

#[cfg(test)]
mod chat_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_chat() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-api-key"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Tesla is...")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.chat(&create_test_request("Research Tesla")).await;

        assert_eq!(result.unwrap(), "Tesla is...");
    }

    #[tokio::test]
    async fn test_request_body_carries_fixed_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(json!({
                "model": "llama-3.3-70b-versatile",
                "temperature": 0.7,
                "max_tokens": 8192,
                "top_p": 0.95,
                "stream": false,
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "Research Tesla"},
                    {"role": "assistant", "content": "Which aspects?"},
                    {"role": "user", "content": "Energy business"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let history = vec![
            ConversationTurn::user("Research Tesla"),
            ConversationTurn::assistant("Which aspects?"),
        ];
        let completion = complete(
            &client,
            &GenerationConfig::default(),
            "sys",
            &history,
            "Energy business",
        )
        .await;

        assert!(!completion.is_fallback());
        assert_eq!(completion.text, "ok");
    }

    #[tokio::test]
    async fn test_authentication_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "message": "Invalid API Key",
                    "type": "invalid_request_error"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.chat(&create_test_request("Test")).await;

        match result {
            Err(CompletionError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert!(message.contains("Invalid API Key"));
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_json(json!({"error": {"message": "Rate limit reached"}}))
                    .insert_header("Retry-After", "60"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.chat(&create_test_request("Test")).await;

        assert!(matches!(result, Err(CompletionError::Api { status: 429, .. })));
    }

    #[tokio::test]
    async fn test_server_error_yields_fallback() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let completion = complete(&client, &GenerationConfig::default(), "sys", &[], "hi").await;

        assert!(completion.is_fallback());
        assert_eq!(completion.text, FALLBACK_REPLY);
    }
}

#[cfg(test)]
mod response_parsing_tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.chat(&create_test_request("Test")).await;

        assert!(matches!(result, Err(CompletionError::InvalidResponse { .. })));
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.chat(&create_test_request("Test")).await;

        assert!(matches!(result, Err(CompletionError::EmptyCompletion)));
    }

    #[tokio::test]
    async fn test_usage_is_exposed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("x")))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let response = client
            .create_chat_completion(&create_test_request("Test"))
            .await
            .unwrap();

        assert_eq!(response.model.as_deref(), Some("llama-3.3-70b-versatile"));
        assert_eq!(response.usage.unwrap().total_tokens, Some(25));
    }
}

#[cfg(test)]
mod model_list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_models() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .and(header("Authorization", "Bearer test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "data": [
                    {"id": "llama-3.3-70b-versatile", "owned_by": "Meta", "active": true},
                    {"id": "gemma2-9b-it", "owned_by": "Google"}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let models = client.list_models().await.unwrap();

        let ids: Vec<&str> = models.data.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["llama-3.3-70b-versatile", "gemma2-9b-it"]);
    }

    #[tokio::test]
    async fn test_list_models_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client.list_models().await;

        assert!(matches!(result, Err(CompletionError::Api { status: 403, .. })));
    }
}
