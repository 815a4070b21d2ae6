//! Static remote-config adapter with refresh throttling.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;

use crate::ports::{RemoteConfig, RemoteConfigError};

/// Fixed key/value [`RemoteConfig`].
///
/// Values never change, but `refresh` still honors the minimum refresh
/// interval so callers exercise the same throttling they see in production.
pub struct StaticRemoteConfig {
    values: HashMap<String, Value>,
    min_refresh_interval: Duration,
    last_refresh: Mutex<Option<Instant>>,
}

impl StaticRemoteConfig {
    pub fn new(min_refresh_interval: Duration) -> Self {
        Self {
            values: HashMap::new(),
            min_refresh_interval,
            last_refresh: Mutex::new(None),
        }
    }

    pub fn with_bool(mut self, key: impl Into<String>, value: bool) -> Self {
        self.values.insert(key.into(), Value::Bool(value));
        self
    }

    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), Value::String(value.into()));
        self
    }

    fn value(&self, key: &str) -> Result<&Value, RemoteConfigError> {
        self.values
            .get(key)
            .ok_or_else(|| RemoteConfigError::MissingKey(key.to_string()))
    }
}

#[async_trait]
impl RemoteConfig for StaticRemoteConfig {
    async fn string_value(&self, key: &str) -> Result<String, RemoteConfigError> {
        match self.value(key)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(RemoteConfigError::WrongType {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }

    async fn bool_value(&self, key: &str) -> Result<bool, RemoteConfigError> {
        match self.value(key)? {
            Value::Bool(b) => Ok(*b),
            _ => Err(RemoteConfigError::WrongType {
                key: key.to_string(),
                expected: "bool",
            }),
        }
    }

    async fn refresh(&self) -> Result<bool, RemoteConfigError> {
        let mut last = self.last_refresh.lock().expect("refresh clock poisoned");
        let now = Instant::now();
        match *last {
            Some(at) if now.duration_since(at) < self.min_refresh_interval => Ok(false),
            _ => {
                *last = Some(now);
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StaticRemoteConfig {
        StaticRemoteConfig::new(Duration::from_secs(300))
            .with_bool("status_reporting_enabled", true)
            .with_string("banner", "hello")
    }

    #[tokio::test]
    async fn typed_lookups_enforce_the_value_type() {
        let config = config();

        assert!(config.bool_value("status_reporting_enabled").await.unwrap());
        assert_eq!(config.string_value("banner").await.unwrap(), "hello");
        assert!(matches!(
            config.string_value("status_reporting_enabled").await,
            Err(RemoteConfigError::WrongType { .. })
        ));
        assert!(matches!(
            config.bool_value("missing").await,
            Err(RemoteConfigError::MissingKey(_))
        ));
    }

    #[tokio::test]
    async fn second_refresh_inside_the_interval_is_throttled() {
        let config = config();

        assert!(config.refresh().await.unwrap());
        assert!(!config.refresh().await.unwrap());
    }
}
