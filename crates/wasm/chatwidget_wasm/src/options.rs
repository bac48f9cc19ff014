//! Options accepted by `mount`.

use chatwidget_core::WidgetConfig;
use serde::Deserialize;

pub const DEFAULT_FORM_ID: &str = "chat-form";
pub const DEFAULT_MESSAGES_ID: &str = "chat-messages";
pub const DEFAULT_INPUT_ID: &str = "user-input";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MountOptions {
    pub form_id: String,
    pub messages_id: String,
    pub input_id: String,
    pub endpoint: Option<String>,
    pub user_id: Option<i64>,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            form_id: DEFAULT_FORM_ID.into(),
            messages_id: DEFAULT_MESSAGES_ID.into(),
            input_id: DEFAULT_INPUT_ID.into(),
            endpoint: None,
            user_id: None,
        }
    }
}

impl MountOptions {
    pub fn widget_config(&self) -> WidgetConfig {
        let defaults = WidgetConfig::default();
        WidgetConfig {
            endpoint: self.endpoint.clone().unwrap_or(defaults.endpoint),
            user_id: self.user_id.unwrap_or(defaults.user_id),
        }
    }
}
