//! File-backed secure store.
//!
//! Stores each key as one file under a base directory. Stands in for the
//! platform keychain in local development; bytes are written as-is, so the
//! directory must live inside the app's sandboxed storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::ports::{SecureStore, SecureStoreError};

#[derive(Debug, Clone)]
pub struct FileSecureStore {
    base_path: PathBuf,
}

impl FileSecureStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Keys map directly to file names; path separators would escape the
    /// base directory.
    fn file_path(&self, key: &str) -> Result<PathBuf, SecureStoreError> {
        if key.is_empty() || key.contains(['/', '\\']) {
            return Err(SecureStoreError::Backend(format!("invalid key: '{key}'")));
        }
        Ok(self.base_path.join(key))
    }
}

#[async_trait]
impl SecureStore for FileSecureStore {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStoreError> {
        let path = self.file_path(key)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SecureStoreError::Io(e.to_string())),
        }
    }

    async fn write(&self, key: &str, value: &[u8]) -> Result<(), SecureStoreError> {
        let path = self.file_path(key)?;
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SecureStoreError::Io(e.to_string()))?;
        fs::write(&path, value)
            .await
            .map_err(|e| SecureStoreError::Io(e.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), SecureStoreError> {
        let path = self.file_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SecureStoreError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSecureStore::new(dir.path());

        assert_eq!(store.read("session").await.unwrap(), None);
        store.write("session", b"blob").await.unwrap();
        assert_eq!(store.read("session").await.unwrap(), Some(b"blob".to_vec()));
        store.delete("session").await.unwrap();
        assert_eq!(store.read("session").await.unwrap(), None);
    }

    #[tokio::test]
    async fn keys_with_path_separators_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSecureStore::new(dir.path());

        let err = store.write("../escape", b"x").await.unwrap_err();
        assert!(matches!(err, SecureStoreError::Backend(_)));
    }

    #[tokio::test]
    async fn survives_a_new_store_over_the_same_directory() {
        let dir = tempfile::tempdir().unwrap();
        FileSecureStore::new(dir.path())
            .write("session", b"blob")
            .await
            .unwrap();

        let reopened = FileSecureStore::new(dir.path());
        assert_eq!(
            reopened.read("session").await.unwrap(),
            Some(b"blob".to_vec())
        );
    }
}
