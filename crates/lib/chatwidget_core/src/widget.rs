//! Chat widget controller.
//!
//! Holds the handles to its UI anchors and collaborators; nothing is
//! resolved from global state, so several widgets can share a page.

use crate::backend::{BackendError, ChatBackend};
use crate::decision::{Notice, Reply, SubmitDecision, handle_response, handle_submit};
use crate::identity::UserIdentity;
use crate::models::ChatResponse;
use crate::render::{InputField, MessageView, append_message};

/// How a single submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Blank input; input cleared, nothing rendered, nothing sent.
    Ignored,
    /// The backend's reply was rendered.
    Replied,
    /// A notice was rendered instead of a reply.
    Notified(Notice),
}

pub struct ChatWidget<V, I, B, U> {
    view: V,
    input: I,
    backend: B,
    identity: U,
}

impl<V, I, B, U> ChatWidget<V, I, B, U>
where
    V: MessageView,
    I: InputField,
    B: ChatBackend,
    U: UserIdentity,
{
    pub fn new(view: V, input: I, backend: B, identity: U) -> Self {
        Self {
            view,
            input,
            backend,
            identity,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Run one form submission to completion.
    ///
    /// The input is always cleared. The user message is rendered before the
    /// backend is called. Submissions are independent: calling this again while an
    /// earlier call is awaiting is allowed, and replies render in completion
    /// order.
    pub async fn submit(&self) -> SubmissionOutcome {
        let raw = self.input.value();
        let request = match handle_submit(&raw, self.identity.user_id()) {
            SubmitDecision::Ignore => {
                self.input.clear();
                return SubmissionOutcome::Ignored;
            }
            SubmitDecision::Send { echo, request } => {
                append_message(&self.view, &echo);
                self.input.clear();
                request
            }
        };

        log::debug!(
            "Sending chat message for user {} ({} chars)",
            request.user_id,
            request.message.len()
        );
        let result = self.backend.send(&request).await;
        log_result(&result);

        let reply = handle_response(&result);
        append_message(&self.view, &reply.message());

        match reply {
            Reply::Bot(_) => SubmissionOutcome::Replied,
            Reply::Notice(notice) => SubmissionOutcome::Notified(notice),
        }
    }
}

fn log_result(result: &Result<ChatResponse, BackendError>) {
    match result {
        Ok(ChatResponse { response: Some(text) }) if !text.trim().is_empty() => {}
        Ok(_) => log::warn!("Chat endpoint did not provide a response"),
        Err(BackendError::Status {
            status,
            reason,
            detail,
        }) => log::warn!(
            "Chat endpoint returned {status} {reason}: {}",
            detail.as_deref().unwrap_or("<no detail>")
        ),
        Err(e) => log::error!("Chat error: {e}"),
    }
}
