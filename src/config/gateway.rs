//! API gateway configuration.

use std::time::Duration;

use secrecy::Secret;
use serde::Deserialize;

use crate::config::ValidationError;

fn default_timeout_secs() -> u64 {
    30
}

/// Connection settings for the API gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Base URL, e.g. `https://api.waypoint.example`.
    pub base_url: String,

    /// Caller device identifier, sent as a query parameter on every call.
    pub device_id: String,

    /// Optional API key sent as `x-api-key`.
    #[serde(default)]
    pub api_key: Option<Secret<String>>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Minimal configuration for tests.
    pub fn for_tests(base_url: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            device_id: device_id.into(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::new(
                "gateway.base_url",
                "must start with http:// or https://",
            ));
        }
        if self.device_id.trim().is_empty() {
            return Err(ValidationError::new("gateway.device_id", "cannot be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::new("gateway.timeout_secs", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        assert!(GatewayConfig::for_tests("https://api.example.com", "dev-1")
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = GatewayConfig::for_tests("ftp://api.example.com", "dev-1")
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "gateway.base_url");
    }

    #[test]
    fn rejects_blank_device_id() {
        let err = GatewayConfig::for_tests("https://api.example.com", "  ")
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "gateway.device_id");
    }
}
