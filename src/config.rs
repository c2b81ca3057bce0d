//! Client configuration: base URL and optional API key.
//!
//! Values come from the builder or from the process environment
//! (`DORAQUANTS_API_URL`, `DORAQUANTS_API_KEY`). A key equal to the sample
//! placeholder is treated as absent.

use crate::error::SdkError;
use crate::network::{DEFAULT_API_URL, ENV_API_KEY, ENV_API_URL, PLACEHOLDER_API_KEY};
use serde::Serialize;

/// Connection settings for the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    api_key: Option<String>,
    /// How the key was provided, for diagnostics.
    key_status: ApiKeyStatus,
}

/// Whether an API key is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiKeyStatus {
    /// A usable key is set and will be sent.
    Set,
    /// The placeholder value was provided; no key is sent.
    Placeholder,
    /// No key provided.
    Unset,
}

/// Diagnostic view of the active configuration. Never contains the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiConfigSummary {
    pub base_url: String,
    pub has_api_key: bool,
    pub api_key: ApiKeyStatus,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            key_status: ApiKeyStatus::Unset,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Read `DORAQUANTS_API_URL` / `DORAQUANTS_API_KEY`, falling back to
    /// the local development backend.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let base_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let config = Self::new(&base_url)?;
        Ok(config.with_api_key(lookup(ENV_API_KEY)))
    }

    /// Set the API key. Empty and placeholder values disable the header.
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        let key = key.map(|k| k.trim().to_string());
        (self.api_key, self.key_status) = match key {
            None => (None, ApiKeyStatus::Unset),
            Some(k) if k.is_empty() => (None, ApiKeyStatus::Unset),
            Some(k) if k == PLACEHOLDER_API_KEY => (None, ApiKeyStatus::Placeholder),
            Some(k) => (Some(k), ApiKeyStatus::Set),
        };
        self
    }

    /// The key to send, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn summary(&self) -> ApiConfigSummary {
        ApiConfigSummary {
            base_url: self.base_url.clone(),
            has_api_key: self.api_key.is_some(),
            api_key: self.key_status,
        }
    }
}

fn normalize_base_url(url: &str) -> Result<String, SdkError> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(SdkError::Config(format!(
            "base URL must start with http:// or https://, got {:?}",
            url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}
