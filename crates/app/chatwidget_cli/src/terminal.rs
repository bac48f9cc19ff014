//! Terminal view and input for the chat widget.

use std::cell::RefCell;
use std::io::Write;

use chatwidget_core::{ChatMessage, InputField, MessageView, Sender};

/// Writes each message as a prefixed line, e.g. `bot> Hello!`.
pub struct TerminalTranscript<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> TerminalTranscript<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

fn prefix(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "you>",
        Sender::Bot => "bot>",
    }
}

impl<W: Write> MessageView for TerminalTranscript<W> {
    fn append_message(&self, message: &ChatMessage) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{} {}", prefix(message.sender), message.content) {
            log::warn!("Failed to write message: {e}");
        }
    }

    /// The newest line is already last; flushing makes it visible.
    fn scroll_to_latest(&self) {
        if let Err(e) = self.out.borrow_mut().flush() {
            log::warn!("Failed to flush transcript: {e}");
        }
    }
}

/// Holds the line most recently read from stdin.
#[derive(Default)]
pub struct LineInput {
    line: RefCell<String>,
}

impl LineInput {
    pub fn set(&self, line: String) {
        *self.line.borrow_mut() = line;
    }
}

impl InputField for LineInput {
    fn value(&self) -> String {
        self.line.borrow().clone()
    }

    fn clear(&self) {
        self.line.borrow_mut().clear();
    }
}
