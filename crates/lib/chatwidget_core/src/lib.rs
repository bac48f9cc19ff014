//! # chatwidget_core
//!
//! Core domain logic for the chat widget.
//!
//! The widget reacts to two discrete events: a form submission and the
//! completion of the backend call it triggers. Both reactions are plain
//! functions in [`decision`]; [`widget::ChatWidget`] wires them to the
//! collaborators an adapter supplies (a [`render::MessageView`], an
//! [`render::InputField`], a [`backend::ChatBackend`] and a
//! [`identity::UserIdentity`]).

pub mod backend;
pub mod config;
pub mod decision;
pub mod identity;
pub mod models;
pub mod render;
pub mod widget;

pub use backend::{BackendError, ChatBackend};
pub use config::{ConfigError, WidgetConfig};
pub use decision::{Notice, Reply, SubmitDecision, handle_response, handle_submit};
pub use identity::{FixedUserId, UserIdentity};
pub use models::{ChatMessage, ChatRequest, ChatResponse, ErrorBody, Sender, UserId};
pub use render::{InputField, MessageView};
pub use widget::{ChatWidget, SubmissionOutcome};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
