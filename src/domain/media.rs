//! Media record.

use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordMetadata};

/// An uploaded media item stored in blob storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    /// Blob-store path, e.g. `media/{id}/photo.jpg`.
    pub path: String,
    pub content_type: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    /// Populated after upload or on demand from the blob store.
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl Media {
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            content_type: content_type.into(),
            size_bytes: None,
            download_url: None,
            metadata: RecordMetadata::now(),
        }
    }
}

impl Record for Media {
    fn id(&self) -> &str {
        &self.id
    }
}
