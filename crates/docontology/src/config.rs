//! Client configuration.
//!
//! Values are layered: explicit override > environment > built-in default.
//! A [`Config`] is plain data; [`Config::validate`] turns it into a
//! [`BaseUrl`] the client can use.

use std::time::Duration;

use crate::error::{ConfigError, Error};
use crate::types::BaseUrl;

/// Default registry endpoint.
pub const DEFAULT_API_URL: &str = "https://api.docdigitizer.com/registry";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the base URL.
pub const ENV_API_URL: &str = "SCHEMACTL_API_URL";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "SCHEMACTL_API_KEY";

/// Environment variable holding the timeout in seconds.
pub const ENV_TIMEOUT: &str = "SCHEMACTL_TIMEOUT";

/// Connection settings for an [`ApiClient`](crate::ApiClient).
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Registry base URL.
    pub base_url: String,
    /// Bearer token sent as `Authorization`, if any.
    pub api_key: Option<String>,
    /// Hard deadline for each request.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Create a configuration for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - `SCHEMACTL_API_URL`: base URL (default: `https://api.docdigitizer.com/registry`)
    /// - `SCHEMACTL_API_KEY`: API key (default: none)
    /// - `SCHEMACTL_TIMEOUT`: request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config.base_url = url;
        }

        config.api_key = get(ENV_API_KEY);

        if let Some(raw) = get(ENV_TIMEOUT) {
            let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::InvalidEnv {
                name: ENV_TIMEOUT.to_string(),
                reason: format!("'{raw}': {e}"),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Returns a copy with the base URL replaced. Empty values are ignored.
    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        if url.is_empty() {
            return self;
        }
        Self {
            base_url: url,
            ..self
        }
    }

    /// Returns a copy with the API key replaced. Empty values are ignored.
    pub fn with_api_key(self, key: impl Into<String>) -> Self {
        let key = key.into();
        if key.is_empty() {
            return self;
        }
        Self {
            api_key: Some(key),
            ..self
        }
    }

    /// Returns a copy with the timeout replaced.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Check that the configuration can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the base URL is empty or malformed.
    pub fn validate(&self) -> Result<BaseUrl, Error> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl.into());
        }
        BaseUrl::new(&self.base_url)
    }
}

// API key stays out of Debug output
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
