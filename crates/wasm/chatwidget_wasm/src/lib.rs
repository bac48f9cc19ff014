//! WebAssembly bindings for the chat widget.
//!
//! ```js
//! import init, { mount } from "./pkg/chatwidget_wasm.js";
//! await init();
//! const widget = mount({ endpoint: "/api/chat" });
//! // later: widget.unmount();
//! ```

mod dom;
mod options;

use std::rc::Rc;

use chatwidget_client::HttpChatBackend;
use chatwidget_core::{ChatWidget, FixedUserId, UserId};
use thiserror::Error;
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement};

use dom::{DomInput, DomTranscript, element_by_id};
use options::MountOptions;

/// Errors raised while mounting onto a page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("No window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Element #{0} not found")]
    MissingElement(String),

    #[error("Element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("Invalid options: {0}")]
    Options(String),

    #[error("Invalid page location: {0}")]
    Location(String),

    #[error("Config: {0}")]
    Config(#[from] chatwidget_core::ConfigError),

    #[error("DOM error: {0}")]
    Dom(String),
}

/// Initialize the module: panic hook and console logging.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("chatwidget wasm module initialized");
}

/// Returns the version of the chatwidget_wasm package.
#[wasm_bindgen]
pub fn version() -> String {
    chatwidget_core::version().to_string()
}

/// A widget bound to a form; keep it alive for as long as the form should
/// respond to submissions.
#[wasm_bindgen]
pub struct MountedWidget {
    form: HtmlFormElement,
    on_submit: Closure<dyn FnMut(Event)>,
}

#[wasm_bindgen]
impl MountedWidget {
    /// Detach the submit listener.
    pub fn unmount(self) -> Result<(), JsError> {
        self.form
            .remove_event_listener_with_callback("submit", self.on_submit.as_ref().unchecked_ref())
            .map_err(|e| MountError::Dom(format!("{e:?}")))?;
        log::debug!("chat widget unmounted");
        Ok(())
    }
}

/// Bind a widget to the page.
///
/// `options` is an optional object `{ formId, messagesId, inputId, endpoint,
/// userId }`; missing keys take the defaults (`chat-form`, `chat-messages`,
/// `user-input`, `/api/chat`, `1`). Relative endpoints resolve against the
/// page location.
#[wasm_bindgen]
pub fn mount(options: JsValue) -> Result<MountedWidget, JsError> {
    let options = if options.is_undefined() || options.is_null() {
        MountOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| MountError::Options(e.to_string()))?
    };
    Ok(mount_with(&options)?)
}

fn mount_with(options: &MountOptions) -> Result<MountedWidget, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    let form: HtmlFormElement = element_by_id(&document, &options.form_id)?;
    let messages: Element = element_by_id(&document, &options.messages_id)?;
    let input: HtmlInputElement = element_by_id(&document, &options.input_id)?;

    let href = window
        .location()
        .href()
        .map_err(|e| MountError::Location(format!("{e:?}")))?;
    let base = Url::parse(&href).map_err(|e| MountError::Location(e.to_string()))?;
    let config = options.widget_config();
    let endpoint = config.endpoint_url(Some(&base))?;

    log::info!("Mounting chat widget on #{} -> {endpoint}", options.form_id);

    let widget = Rc::new(ChatWidget::new(
        DomTranscript::new(document, messages),
        DomInput::new(input),
        HttpChatBackend::new(endpoint),
        FixedUserId(UserId(config.user_id)),
    ));

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let widget = Rc::clone(&widget);
        wasm_bindgen_futures::spawn_local(async move {
            widget.submit().await;
        });
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|e| MountError::Dom(format!("{e:?}")))?;

    Ok(MountedWidget { form, on_submit })
}
