//! Widget configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Path the page posts to.
pub const DEFAULT_ENDPOINT: &str = "/api/chat";

/// User id sent when no session layer supplies one.
pub const DEFAULT_USER_ID: i64 = 1;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Invalid user id '{0}'")]
    InvalidUserId(String),
}

/// Configuration for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Chat endpoint, absolute (`http://host/api/chat`) or relative to the page.
    pub endpoint: String,
    /// User id attached to every request.
    pub user_id: i64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            user_id: DEFAULT_USER_ID,
        }
    }
}

impl WidgetConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable        | Default     |
    /// |-----------------|-------------|
    /// | `CHAT_ENDPOINT` | `/api/chat` |
    /// | `CHAT_USER_ID`  | `1`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_or(None, None)
    }

    /// Like [`Self::from_env`], but an explicit value wins and its variable
    /// is never read.
    pub fn from_env_or(
        endpoint: Option<String>,
        user_id: Option<i64>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(endpoint, user_id, |key| std::env::var(key).ok())
    }

    fn from_lookup(
        endpoint: Option<String>,
        user_id: Option<i64>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let user_id = match user_id {
            Some(id) => id,
            None => match lookup("CHAT_USER_ID") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidUserId(raw.clone()))?,
                None => DEFAULT_USER_ID,
            },
        };

        let endpoint = endpoint
            .or_else(|| lookup("CHAT_ENDPOINT"))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.into());

        Ok(Self { endpoint, user_id })
    }

    /// Resolve [`Self::endpoint`] to an absolute URL.
    ///
    /// Relative endpoints need a `base` (the page location in a browser).
    pub fn endpoint_url(&self, base: Option<&Url>) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        match Url::parse(&self.endpoint) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match base {
                Some(base) => base.join(&self.endpoint).map_err(|e| invalid(e.to_string())),
                None => Err(invalid("relative endpoint needs a base URL".into())),
            },
            Err(e) => Err(invalid(e.to_string())),
        }
    }
}
