//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `WAYPOINT` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use waypoint_workers::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod features;
mod gateway;
mod status;

pub use error::{ConfigError, ValidationError};
pub use features::FeaturesConfig;
pub use gateway::GatewayConfig;
pub use status::StatusConfig;

use serde::Deserialize;

/// Root configuration for the workers layer.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// API gateway connection settings.
    pub gateway: GatewayConfig,

    /// Status service connection settings.
    pub status: StatusConfig,

    /// Remote-config consumption settings.
    #[serde(default)]
    pub features: FeaturesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads `.env` if present (development), then reads variables with the
    /// `WAYPOINT` prefix, e.g. `WAYPOINT__GATEWAY__BASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("WAYPOINT").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.gateway.validate()?;
        self.status.validate()?;
        Ok(())
    }
}
