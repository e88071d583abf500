//! Client configuration.
//!
//! The only setting is the notes service base URL. A missing or malformed
//! value is a soft problem: it is logged and requests fail at call time.

use serde::{Deserialize, Serialize};

/// Environment variable holding the notes service base URL
pub const API_BASE_URL_ENV: &str = "OCEAN_API_BASE_URL";

/// Runtime configuration for the notes client
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl ClientConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let config = Self {
            api_base_url: normalize_text_option(lookup(API_BASE_URL_ENV)),
        };
        config.warn_if_incomplete();
        config
    }

    /// Base URL with surrounding whitespace and trailing slashes removed.
    ///
    /// Empty when unset.
    pub fn base_url(&self) -> String {
        normalize_base_url(self.api_base_url.as_deref().unwrap_or_default())
    }

    /// Log a warning when the base URL is unset or lacks an http(s) scheme
    pub fn warn_if_incomplete(&self) {
        match self.api_base_url.as_deref() {
            None => tracing::warn!("{} is not set. API calls will fail.", API_BASE_URL_ENV),
            Some(url) if !is_http_url(url) => tracing::warn!(
                "{} should include http:// or https:// (got '{}')",
                API_BASE_URL_ENV,
                url
            ),
            Some(_) => {}
        }
    }
}

/// Trim whitespace and trailing slashes from a base URL.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
