//! Controller connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scalar;

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    /// Controller base URL (e.g., `https://api.zerotier.com`).
    #[serde(default)]
    pub api_url: String,

    /// API token, sent as a bearer authorization header.
    #[serde(default, deserialize_with = "scalar::text")]
    pub api_key: String,

    /// 16-hex-digit network id.
    #[serde(default, deserialize_with = "scalar::network_id")]
    pub network_id: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Abort before fetching anything if `/api/status` does not answer 2xx.
    #[serde(default)]
    pub require_liveness: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: String::new(),
            network_id: String::new(),
            timeout_secs: default_timeout_secs(),
            require_liveness: false,
        }
    }
}

impl ControllerConfig {
    /// Check that URL, key, and network id are all present.
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("api_url", &self.api_url),
            ("api_key", &self.api_key),
            ("network_id", &self.network_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Validate the section for use by the controller client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if a required field is empty,
    /// or [`ConfigError::InvalidValue`] if the URL is not HTTP(S) or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "controller".into(),
                missing: missing.join(", "),
            });
        }
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "controller.api_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.api_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "controller.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
