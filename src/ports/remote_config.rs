//! Remote Config Port - key-based typed lookups with a refresh policy.

use async_trait::async_trait;
use thiserror::Error;

/// Failures from the remote feature-flag/config service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteConfigError {
    #[error("missing key: {0}")]
    MissingKey(String),
    #[error("key '{key}' is not a {expected}")]
    WrongType { key: String, expected: &'static str },
    #[error("refresh failed: {0}")]
    Refresh(String),
}

/// Port for the remote feature-flag/config service.
#[async_trait]
pub trait RemoteConfig: Send + Sync {
    /// Looks up a string value.
    async fn string_value(&self, key: &str) -> Result<String, RemoteConfigError>;

    /// Looks up a boolean value.
    async fn bool_value(&self, key: &str) -> Result<bool, RemoteConfigError>;

    /// Refreshes from the remote service, honoring the minimum refresh
    /// interval. Returns `false` when the refresh was throttled.
    async fn refresh(&self) -> Result<bool, RemoteConfigError>;
}
