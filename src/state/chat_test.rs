use super::*;

#[test]
fn push_incoming_prepends_newest_message() {
    let mut state = ChatState::default();
    state.push_incoming(&serde_json::json!({"id":"m1","message":"first","from":"u1","ts":1}));
    state.push_incoming(&serde_json::json!({"id":"m2","message":"second","from":"u2","ts":2}));
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].id, "m2");
    assert_eq!(state.messages[1].id, "m1");
}

#[test]
fn push_incoming_ignores_non_object_payloads() {
    let mut state = ChatState::default();
    state.push_incoming(&serde_json::json!("not an object"));
    state.push_incoming(&serde_json::json!(42));
    assert!(state.messages.is_empty());
}

#[test]
fn parse_chat_message_uses_fallback_fields() {
    let msg = parse_chat_message(&serde_json::json!({
        "body": "hello",
        "sender": "u9",
        "ts": 777
    }))
    .expect("chat message");
    assert_eq!(msg.body, "hello");
    assert_eq!(msg.from, "u9");
    assert_eq!(msg.ts, 777.0);
}

#[test]
fn parse_chat_message_requires_a_body() {
    assert!(parse_chat_message(&serde_json::json!({"from":"u1"})).is_none());
}

#[test]
fn parse_chat_message_defaults_sender_and_timestamp() {
    let msg = parse_chat_message(&serde_json::json!({"message":"hi"})).expect("chat message");
    assert_eq!(msg.from, "unknown");
    assert_eq!(msg.ts, 0.0);
    assert!(!msg.id.is_empty());
}
