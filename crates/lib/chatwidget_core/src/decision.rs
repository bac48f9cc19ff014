//! Pure decision functions for the two events the widget reacts to.
//!
//! - [`handle_submit`]: the user submitted the form
//! - [`handle_response`]: the backend call for a submission completed
//!
//! Neither touches the view or the network, so both are tested directly.

use crate::backend::BackendError;
use crate::models::{ChatMessage, ChatRequest, ChatResponse, UserId};

/// What to do with a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Nothing to send; the input was empty after trimming. The input is
    /// cleared, no notice is rendered and no request is issued.
    Ignore,
    /// Render `echo`, clear the input, then send `request`.
    Send {
        echo: ChatMessage,
        request: ChatRequest,
    },
}

/// Decide what a submission of `raw_input` does.
pub fn handle_submit(raw_input: &str, user_id: UserId) -> SubmitDecision {
    let message = raw_input.trim();
    if message.is_empty() {
        return SubmitDecision::Ignore;
    }

    SubmitDecision::Send {
        echo: ChatMessage::user(message),
        request: ChatRequest {
            user_id,
            message: message.to_string(),
        },
    }
}

/// Fixed bot-sender messages used to report failures in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// 2xx reply without a usable `response` field.
    NoResponse,
    /// Non-2xx status, whatever the code.
    Unreachable,
    /// Transport or parse failure.
    Failure,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::NoResponse => "Error: The chatbot did not provide a response.",
            Notice::Unreachable => "Error: Unable to connect to the chatbot.",
            Notice::Failure => "Error: Something went wrong.",
        }
    }

    pub fn message(self) -> ChatMessage {
        ChatMessage::bot(self.text())
    }
}

/// What to render once the backend call completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Bot(String),
    Notice(Notice),
}

impl Reply {
    pub fn message(&self) -> ChatMessage {
        match self {
            Reply::Bot(text) => ChatMessage::bot(text.clone()),
            Reply::Notice(notice) => notice.message(),
        }
    }
}

/// Decide what a completed backend call renders.
///
/// A `response` that is blank after trimming counts as missing, so the
/// transcript never shows an empty bot bubble.
pub fn handle_response(result: &Result<ChatResponse, BackendError>) -> Reply {
    match result {
        Ok(ChatResponse {
            response: Some(text),
        }) if !text.trim().is_empty() => Reply::Bot(text.clone()),
        Ok(_) => Reply::Notice(Notice::NoResponse),
        Err(BackendError::Status { .. }) => Reply::Notice(Notice::Unreachable),
        Err(BackendError::Transport(_) | BackendError::Decode(_)) => Reply::Notice(Notice::Failure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(response: Option<&str>) -> Result<ChatResponse, BackendError> {
        Ok(ChatResponse {
            response: response.map(str::to_string),
        })
    }

    #[test]
    fn submit_trims_and_builds_request() {
        let decision = handle_submit("  hello there \n", UserId(1));
        assert_eq!(
            decision,
            SubmitDecision::Send {
                echo: ChatMessage::user("hello there"),
                request: ChatRequest {
                    user_id: UserId(1),
                    message: "hello there".into(),
                },
            }
        );
    }

    #[test]
    fn submit_ignores_empty_and_whitespace() {
        for input in ["", " ", "\t\n  "] {
            assert_eq!(handle_submit(input, UserId(1)), SubmitDecision::Ignore);
        }
    }

    #[test]
    fn submit_uses_supplied_user_id() {
        match handle_submit("hi", UserId(7)) {
            SubmitDecision::Send { request, .. } => assert_eq!(request.user_id, UserId(7)),
            other => panic!("expected Send, got {other:?}"),
        }
    }

    #[test]
    fn response_text_becomes_bot_reply() {
        assert_eq!(
            handle_response(&ok(Some("Hello!"))),
            Reply::Bot("Hello!".into())
        );
    }

    #[test]
    fn missing_or_empty_response_is_soft_notice() {
        for result in [ok(None), ok(Some("")), ok(Some("   "))] {
            assert_eq!(handle_response(&result), Reply::Notice(Notice::NoResponse));
        }
    }

    #[test]
    fn any_status_error_is_unreachable() {
        for status in [400, 404, 500, 503] {
            let result = Err(BackendError::Status {
                status,
                reason: String::new(),
                detail: None,
            });
            assert_eq!(handle_response(&result), Reply::Notice(Notice::Unreachable));
        }
    }

    #[test]
    fn transport_and_decode_errors_are_failures() {
        let transport = Err(BackendError::Transport("connection refused".into()));
        let decode = Err(BackendError::Decode("expected value".into()));
        assert_eq!(handle_response(&transport), Reply::Notice(Notice::Failure));
        assert_eq!(handle_response(&decode), Reply::Notice(Notice::Failure));
    }

    #[test]
    fn notices_render_as_bot_messages() {
        let msg = Reply::Notice(Notice::Unreachable).message();
        assert_eq!(msg, ChatMessage::bot("Error: Unable to connect to the chatbot."));
    }
}
