//! Secure Store Port - async read/write of opaque blobs under well-known keys.
//!
//! The auth worker persists its serialized `AccessData` here. The production
//! implementation is the platform keychain/keystore; this crate ships memory
//! and file adapters for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

/// Failures from the secure key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecureStoreError {
    #[error("io failure: {0}")]
    Io(String),
    #[error("backend failure: {0}")]
    Backend(String),
}

/// Port for the secure key-value store.
#[async_trait]
pub trait SecureStore: Send + Sync {
    /// Reads the blob stored under `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStoreError>;

    /// Writes (or replaces) the blob under `key`.
    async fn write(&self, key: &str, value: &[u8]) -> Result<(), SecureStoreError>;

    /// Removes the blob under `key`; removing a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), SecureStoreError>;
}
