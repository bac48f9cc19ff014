//! Backend seam: how a [`ChatRequest`] reaches the chat endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ChatRequest, ChatResponse};

/// Errors that can occur while talking to the chat endpoint.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The endpoint answered with a non-2xx status.
    #[error("Chat endpoint returned {status} {reason}")]
    Status {
        status: u16,
        reason: String,
        /// `error` field of the reply body, when it had one.
        detail: Option<String>,
    },

    /// The request never completed (DNS, refused connection, aborted fetch).
    #[error("Chat request failed: {0}")]
    Transport(String),

    /// A 2xx reply whose body was not a chat response.
    #[error("Chat response parse error: {0}")]
    Decode(String),
}

/// Sends one chat request and waits for the reply.
///
/// Futures are not `Send`: the widget runs on a single-threaded event loop
/// (the browser's, or a current-thread runtime).
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError>;
}
