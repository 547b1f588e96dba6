//! State for the live-chat inbox panel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde_json::Value;

/// Connection status of the chat socket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// State for the live-chat inbox.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Messages, newest first.
    pub messages: Vec<ChatMessage>,
    pub connection_status: ConnectionStatus,
}

/// A single inbox message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub from: String,
    pub body: String,
    pub ts: f64,
}

impl ChatState {
    /// Prepend an incoming socket message, tolerating loose payload shapes.
    /// Non-object payloads are ignored.
    pub fn push_incoming(&mut self, value: &Value) {
        if let Some(message) = parse_chat_message(value) {
            self.messages.insert(0, message);
        }
    }
}

/// Parse a chat message from a loose JSON payload, using fallback field
/// names for the sender and body.
#[must_use]
pub fn parse_chat_message(value: &Value) -> Option<ChatMessage> {
    let obj = value.as_object()?;

    let body = obj
        .get("message")
        .or_else(|| obj.get("body"))
        .and_then(Value::as_str)?
        .to_owned();
    let from = obj
        .get("from")
        .or_else(|| obj.get("sender"))
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_owned();
    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), str::to_owned);
    let ts = obj.get("ts").and_then(Value::as_f64).unwrap_or(0.0);

    Some(ChatMessage { id, from, body, ts })
}
