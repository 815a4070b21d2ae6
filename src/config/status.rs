//! Status service configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::config::ValidationError;

fn default_enabled() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

/// Connection settings for the remote status-tracking service.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    /// Base URL of the status service.
    pub base_url: String,

    /// Whether telemetry is sent at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Whether failure reports include the human-readable debug detail.
    #[serde(default)]
    pub verbose: bool,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl StatusConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.enabled
            && !self.base_url.starts_with("http://")
            && !self.base_url.starts_with("https://")
        {
            return Err(ValidationError::new(
                "status.base_url",
                "must start with http:// or https://",
            ));
        }
        Ok(())
    }
}
