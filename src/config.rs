//! Build-time application configuration.
//!
//! The client has no runtime environment; the only knob resolved at build
//! time is the API base URL (`USERHUB_API_BASE`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Default upstream serving `/users` and `/users/{id}`.
pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "userHubTheme";

/// How long transient profile messages stay visible.
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Client configuration shared through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub theme_storage_key: String,
    pub message_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_owned(),
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            message_ttl: MESSAGE_TTL,
        }
    }
}

impl AppConfig {
    /// Defaults, with the API base overridden by `USERHUB_API_BASE` when it
    /// was set at compile time.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("USERHUB_API_BASE"))
    }

    fn with_api_base(api_base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base_url = base.to_owned();
        }
        config
    }
}
