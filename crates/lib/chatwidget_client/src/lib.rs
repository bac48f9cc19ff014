//! HTTP chat backend.
//!
//! Posts `{"user_id", "message"}` to the chat endpoint and classifies the
//! outcome into [`BackendError`] variants. No retries and no timeout: a
//! submission waits as long as the platform's network stack does.

use async_trait::async_trait;
use chatwidget_core::{BackendError, ChatBackend, ChatRequest, ChatResponse, ErrorBody};
use reqwest::Client;
use url::Url;

/// [`ChatBackend`] over `reqwest` (fetch on `wasm32`).
#[derive(Clone, Debug)]
pub struct HttpChatBackend {
    client: Client,
    endpoint: Url,
}

impl HttpChatBackend {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        log::debug!("POST {}", self.endpoint);

        // `.json()` sets `Content-Type: application/json`.
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                detail: error_detail(&body),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

/// Pull the `error` field out of an error reply, falling back to the raw
/// body when it isn't JSON.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(msg) }) => Some(msg),
        _ => Some(body.to_string()),
    }
}
