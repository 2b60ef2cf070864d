//! Unit tests for chat completion wire types.

use super::*;
use serde_json::json;

#[test]
fn test_turn_constructors() {
    let turn = ConversationTurn::system("be helpful");
    assert_eq!(turn.role, Role::System);
    assert_eq!(turn.content, "be helpful");

    assert_eq!(ConversationTurn::user("hi").role, Role::User);
    assert_eq!(ConversationTurn::assistant("hello").role, Role::Assistant);
}

#[test]
fn test_role_serializes_lowercase() {
    let value = serde_json::to_value(ConversationTurn::assistant("ok")).unwrap();
    assert_eq!(value, json!({"role": "assistant", "content": "ok"}));
}

#[test]
fn test_chat_request_defaults() {
    let req = ChatRequest::new("model-a", vec![ConversationTurn::user("x")]);
    assert_eq!(req.model, "model-a");
    assert!(!req.stream);
    assert!(req.top_p.is_none());
}

#[test]
fn test_chat_request_omits_unset_top_p() {
    let req = ChatRequest::new("m", vec![])
        .with_temperature(0.7)
        .with_max_tokens(4096);
    let value = serde_json::to_value(&req).unwrap();
    assert!(value.get("top_p").is_none());
    assert_eq!(value["max_tokens"], 4096);
    assert_eq!(value["stream"], false);
}

#[test]
fn test_chat_request_with_top_p() {
    let req = ChatRequest::new("m", vec![]).with_top_p(0.95);
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["top_p"], 0.95);
}

#[test]
fn test_chat_response_first_text() {
    let resp: ChatResponse = serde_json::from_value(json!({
        "id": "chatcmpl-1",
        "model": "llama-3.3-70b-versatile",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "Hello"}, "finish_reason": "stop"}
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
    }))
    .unwrap();

    assert_eq!(resp.first_text(), Some("Hello"));
    assert_eq!(resp.usage.unwrap().total_tokens, Some(12));
}

#[test]
fn test_chat_response_null_content() {
    let resp: ChatResponse = serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": null}}]
    }))
    .unwrap();
    assert_eq!(resp.first_text(), None);
}

#[test]
fn test_chat_response_without_choices() {
    let resp: ChatResponse = serde_json::from_value(json!({})).unwrap();
    assert!(resp.choices.is_empty());
    assert_eq!(resp.first_text(), None);
}

#[test]
fn test_model_list_parses_optional_fields() {
    let list: ModelList = serde_json::from_value(json!({
        "object": "list",
        "data": [
            {"id": "llama-3.3-70b-versatile", "owned_by": "Meta", "active": true, "context_window": 131072},
            {"id": "whisper-large-v3"}
        ]
    }))
    .unwrap();

    assert_eq!(list.data.len(), 2);
    assert_eq!(list.data[0].context_window, Some(131072));
    assert!(list.data[1].owned_by.is_none());
}
