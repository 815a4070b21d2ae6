//! Feature flag configuration.

use std::time::Duration;

use serde::Deserialize;

fn default_min_refresh_secs() -> u64 {
    300
}

fn default_status_gate_key() -> String {
    "status_reporting_enabled".to_string()
}

/// Remote-config consumption settings.
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturesConfig {
    /// Minimum interval between remote-config refreshes.
    #[serde(default = "default_min_refresh_secs")]
    pub min_refresh_interval_secs: u64,

    /// Remote-config key gating status telemetry.
    #[serde(default = "default_status_gate_key")]
    pub status_gate_key: String,
}

impl FeaturesConfig {
    pub fn min_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.min_refresh_interval_secs)
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            min_refresh_interval_secs: default_min_refresh_secs(),
            status_gate_key: default_status_gate_key(),
        }
    }
}
