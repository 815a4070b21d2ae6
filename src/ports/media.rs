//! Media protocol.

use async_trait::async_trait;

use crate::domain::{Media, WorkerError};
use crate::ports::ProgressCallback;

/// Port for media upload and URL resolution.
#[async_trait]
pub trait MediaApi: Send + Sync {
    /// Uploads media bytes with metadata, reporting progress if a callback
    /// is given, and returns the record with its download URL populated.
    async fn upload_media(
        &self,
        media: &Media,
        bytes: Vec<u8>,
        progress: Option<ProgressCallback>,
    ) -> Result<Media, WorkerError>;

    /// Resolves the download URL for previously uploaded media.
    async fn media_url(&self, media: &Media) -> Result<String, WorkerError>;
}
