//! Chat messages and the wire types exchanged with the chat endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who a rendered message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Styling class attached to the rendered element.
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// A single transcript entry. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub content: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender: Sender::Bot,
        }
    }
}

/// Identifier of the user on whose behalf messages are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `POST /api/chat` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: UserId,
    pub message: String,
}

/// `POST /api/chat` success body.
///
/// `response` may be absent or `null`; callers treat that as a soft anomaly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
}

/// Error body returned alongside non-2xx statuses, e.g.
/// `{"error": "User ID and message are required"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
