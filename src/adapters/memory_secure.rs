//! In-memory secure store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{SecureStore, SecureStoreError};

/// In-memory [`SecureStore`] for tests.
#[derive(Debug, Default)]
pub struct MemorySecureStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySecureStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecureStore for MemorySecureStore {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStoreError> {
        Ok(self
            .entries
            .lock()
            .expect("entry map poisoned")
            .get(key)
            .cloned())
    }

    async fn write(&self, key: &str, value: &[u8]) -> Result<(), SecureStoreError> {
        self.entries
            .lock()
            .expect("entry map poisoned")
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), SecureStoreError> {
        self.entries.lock().expect("entry map poisoned").remove(key);
        Ok(())
    }
}
