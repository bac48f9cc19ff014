//! DOM-backed view and input.

use chatwidget_core::{ChatMessage, InputField, MessageView};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::MountError;

/// Look up `#id` and check it is a `T`.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| MountError::WrongElementType {
            id: id.to_string(),
            expected: short_type_name::<T>(),
        })
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Renders messages as `<div class="message {sender}">` children of the
/// message list.
pub struct DomTranscript {
    document: Document,
    container: Element,
}

impl DomTranscript {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }

    fn build(&self, message: &ChatMessage) -> Result<Element, wasm_bindgen::JsValue> {
        let div = self.document.create_element("div")?;
        div.class_list().add_2("message", message.sender.css_class())?;
        // Text content, never markup.
        div.set_text_content(Some(&message.content));
        Ok(div)
    }
}

impl MessageView for DomTranscript {
    fn append_message(&self, message: &ChatMessage) {
        let appended = self
            .build(message)
            .and_then(|div| self.container.append_child(&div));
        if let Err(e) = appended {
            log::error!("Failed to render {} message: {e:?}", message.sender);
        }
    }

    fn scroll_to_latest(&self) {
        self.container.set_scroll_top(self.container.scroll_height());
    }
}

pub struct DomInput {
    input: HtmlInputElement,
}

impl DomInput {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }
}

impl InputField for DomInput {
    fn value(&self) -> String {
        self.input.value()
    }

    fn clear(&self) {
        self.input.set_value("");
    }
}
