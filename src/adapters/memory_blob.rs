//! In-memory blob store with progress reporting.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{BlobMetadata, BlobStore, ProgressCallback, StoreError, UploadProgress};

/// In-memory [`BlobStore`]. Download URLs use the `memory://` scheme.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, (Vec<u8>, BlobMetadata)>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored bytes for `path`, if uploaded.
    pub fn bytes(&self, path: &str) -> Option<Vec<u8>> {
        self.blobs
            .lock()
            .expect("blob map poisoned")
            .get(path)
            .map(|(bytes, _)| bytes.clone())
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        metadata: BlobMetadata,
        progress: Option<ProgressCallback>,
    ) -> Result<(), StoreError> {
        let total = bytes.len() as u64;
        if let Some(progress) = &progress {
            progress(UploadProgress {
                completed_units: 0,
                total_units: total,
                description: format!("uploading {path}"),
            });
        }

        self.blobs
            .lock()
            .expect("blob map poisoned")
            .insert(path.to_string(), (bytes, metadata));

        if let Some(progress) = &progress {
            progress(UploadProgress {
                completed_units: total,
                total_units: total,
                description: format!("uploaded {path}"),
            });
        }
        Ok(())
    }

    async fn download_url(&self, path: &str) -> Result<String, StoreError> {
        let blobs = self.blobs.lock().expect("blob map poisoned");
        if blobs.contains_key(path) {
            Ok(format!("memory://{path}"))
        } else {
            Err(StoreError::NotFound {
                path: path.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_then_resolve_url() {
        let store = MemoryBlobStore::new();
        store
            .upload("media/a.jpg", vec![1, 2], BlobMetadata::new("image/jpeg"), None)
            .await
            .unwrap();

        assert_eq!(store.bytes("media/a.jpg"), Some(vec![1, 2]));
        assert_eq!(
            store.download_url("media/a.jpg").await.unwrap(),
            "memory://media/a.jpg"
        );
    }

    #[tokio::test]
    async fn url_for_missing_blob_is_not_found() {
        let store = MemoryBlobStore::new();
        let err = store.download_url("media/missing.jpg").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
