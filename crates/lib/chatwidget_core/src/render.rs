//! Message renderer: the view and input seams adapters implement.
//!
//! Views take `&self` so a single widget can serve several in-flight
//! submissions on one thread; implementations use interior mutability or a
//! host object (the DOM) that is already shared.

use std::rc::Rc;
#[cfg(any(test, feature = "test-util"))]
use std::cell::{Cell, RefCell};

use crate::models::ChatMessage;
#[cfg(any(test, feature = "test-util"))]
use crate::models::Sender;

/// The scrolling message list.
pub trait MessageView {
    /// Append one element tagged with `message.sender`.
    fn append_message(&self, message: &ChatMessage);

    /// Scroll the container to its maximum offset.
    fn scroll_to_latest(&self);
}

/// The text field the user types into.
pub trait InputField {
    fn value(&self) -> String;

    fn clear(&self);
}

impl<V: MessageView + ?Sized> MessageView for Rc<V> {
    fn append_message(&self, message: &ChatMessage) {
        (**self).append_message(message);
    }

    fn scroll_to_latest(&self) {
        (**self).scroll_to_latest();
    }
}

/// Render a message and bring it into view.
pub fn append_message<V: MessageView + ?Sized>(view: &V, message: &ChatMessage) {
    view.append_message(message);
    view.scroll_to_latest();
}

/// In-memory view that records what would have been rendered.
///
/// The scroll offset is measured in messages: `scroll_height` is the number
/// of rendered messages and `scroll_top` is where the view was last scrolled.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default)]
pub struct MemoryTranscript {
    messages: RefCell<Vec<ChatMessage>>,
    scroll_top: Cell<usize>,
}

#[cfg(any(test, feature = "test-util"))]
impl MemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    pub fn last(&self) -> Option<ChatMessage> {
        self.messages.borrow().last().cloned()
    }

    /// Messages attributed to `sender`, in render order.
    pub fn from_sender(&self, sender: Sender) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|m| m.sender == sender)
            .map(|m| m.content.clone())
            .collect()
    }

    pub fn scroll_height(&self) -> usize {
        self.len()
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top.get()
    }

    pub fn is_scrolled_to_latest(&self) -> bool {
        self.scroll_top() == self.scroll_height()
    }
}

#[cfg(any(test, feature = "test-util"))]
impl MessageView for MemoryTranscript {
    fn append_message(&self, message: &ChatMessage) {
        self.messages.borrow_mut().push(message.clone());
    }

    fn scroll_to_latest(&self) {
        self.scroll_top.set(self.scroll_height());
    }
}

/// In-memory text field.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default)]
pub struct MemoryInput {
    value: RefCell<String>,
}

#[cfg(any(test, feature = "test-util"))]
impl MemoryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing `text` (replacing any previous value).
    pub fn type_text(&self, text: impl Into<String>) {
        *self.value.borrow_mut() = text.into();
    }
}

#[cfg(any(test, feature = "test-util"))]
impl InputField for MemoryInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn clear(&self) {
        self.value.borrow_mut().clear();
    }
}
