//! Message types
//!
//! Defines the chat transcript stored under the `kiko_chat` key.

use serde::{Deserialize, Serialize};

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed by the user
    User,
    /// Reply produced by the assistant
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Stable identifier, `msg-<millis>` for users and `msg-<millis>-assistant` for replies
    pub id: String,
    /// The content of the message
    pub text: String,
    /// Who sent the message
    pub sender: Sender,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    /// Create a user message stamped with the current time
    pub fn user(text: impl Into<String>) -> Self {
        let timestamp = now_millis();
        Self {
            id: format!("msg-{}", timestamp),
            text: text.into(),
            sender: Sender::User,
            timestamp,
        }
    }

    /// Create an assistant message stamped with the current time
    pub fn assistant(text: impl Into<String>) -> Self {
        let timestamp = now_millis();
        Self {
            id: format!("msg-{}-assistant", timestamp),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp,
        }
    }
}

/// The persisted transcript: the idea that started the board plus every message since
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatData {
    pub idea: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatData {
    /// Start a transcript whose first message is the idea itself
    pub fn from_idea(idea: impl Into<String>) -> Self {
        let idea = idea.into();
        Self {
            messages: vec![ChatMessage::user(idea.clone())],
            idea,
        }
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
