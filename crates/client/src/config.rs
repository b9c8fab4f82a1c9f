//! Client configuration

use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::DEFAULT_BASE_URL;

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "FAKESTORE_BASE_URL";

/// Environment variable setting a request timeout in seconds
pub const TIMEOUT_ENV: &str = "FAKESTORE_TIMEOUT_SECS";

/// Configuration for building an [`ApiClient`](crate::ApiClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,

    /// Request timeout (None = transport default)
    pub timeout: Option<Duration>,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("fakestore-client/{}", crate::VERSION),
        }
    }
}

impl ClientConfig {
    /// Config pointing at an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Read overrides from `FAKESTORE_BASE_URL` and `FAKESTORE_TIMEOUT_SECS`
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClientError::InvalidConfig(format!("{} must be a whole number of seconds, got '{}'", TIMEOUT_ENV, raw))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.validate()
    }

    /// Check the base URL scheme and trim trailing slashes
    pub fn validate(mut self) -> ClientResult<Self> {
        let trimmed = self.base_url.trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ClientError::InvalidConfig(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }
}
