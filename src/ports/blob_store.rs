//! Blob Store Port - upload with metadata plus download-URL resolution.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::ports::StoreError;

/// Progress of one upload, surfaced to the caller's progress callback.
#[derive(Debug, Clone)]
pub struct UploadProgress {
    pub completed_units: u64,
    pub total_units: u64,
    pub description: String,
}

impl UploadProgress {
    /// Fraction completed in `0.0..=1.0`; zero-total uploads report 0.
    pub fn fraction(&self) -> f64 {
        if self.total_units == 0 {
            0.0
        } else {
            self.completed_units as f64 / self.total_units as f64
        }
    }
}

/// Callback invoked as an upload advances.
pub type ProgressCallback = Arc<dyn Fn(UploadProgress) + Send + Sync>;

/// Metadata attached to an uploaded blob.
#[derive(Debug, Clone, Default)]
pub struct BlobMetadata {
    pub content_type: String,
    pub custom: HashMap<String, String>,
}

impl BlobMetadata {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            custom: HashMap::new(),
        }
    }
}

/// Port for the blob storage backend.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads bytes under `path`, reporting progress if a callback is given.
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        metadata: BlobMetadata,
        progress: Option<ProgressCallback>,
    ) -> Result<(), StoreError>;

    /// Resolves a public download URL for a previously uploaded blob.
    async fn download_url(&self, path: &str) -> Result<String, StoreError>;
}
