//! Client configuration.
//!
//! `ClientConfig` is built once and handed to [`crate::RagFlowClient::new`].
//! [`ClientConfig::from_env`] is the only code path that reads the process
//! environment.

use crate::{Error, ErrorContext, Result};
use std::time::Duration;
use url::Url;

pub const ENV_API_KEY: &str = "RAGFLOW_API_KEY";
pub const ENV_API_URL: &str = "RAGFLOW_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "RAGFLOW_HTTP_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:9380";

/// Resolved connection settings for a RagFlow server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: Url,
    timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Resolve `RAGFLOW_API_KEY`, `RAGFLOW_API_URL` and
    /// `RAGFLOW_HTTP_TIMEOUT_SECS` from the environment.
    pub fn from_env() -> Result<Self> {
        let mut builder = ClientConfigBuilder::new();
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            builder = builder.api_key(key);
        }
        if let Ok(url) = std::env::var(ENV_API_URL) {
            builder = builder.base_url(url);
        }
        if let Some(secs) = std::env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL, always ending in `/` so relative joins keep any path prefix.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

pub struct ClientConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout. Without one the reqwest default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key is required",
                    ErrorContext::setting(ENV_API_KEY),
                )
            })?;

        let raw = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let normalized = format!("{}/", raw.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalized).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::setting(ENV_API_URL).with_value(raw.clone()),
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "Base URL cannot carry a path",
                ErrorContext::setting(ENV_API_URL).with_value(raw),
            ));
        }

        Ok(ClientConfig {
            api_key,
            base_url,
            timeout: self.timeout,
        })
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
