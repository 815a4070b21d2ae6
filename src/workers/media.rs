//! Media worker - uploads through the blob store and resolves download URLs.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Media, WorkerError};
use crate::gateway::translate_store;
use crate::ports::{BlobMetadata, BlobStore, MediaApi, ProgressCallback};
use crate::status::{CallContext, StatusReporter};
use crate::workers::invalid;

pub struct MediaWorker {
    blob: Arc<dyn BlobStore>,
    reporter: StatusReporter,
}

impl MediaWorker {
    pub fn new(blob: Arc<dyn BlobStore>, reporter: StatusReporter) -> Self {
        Self { blob, reporter }
    }
}

#[async_trait]
impl MediaApi for MediaWorker {
    async fn upload_media(
        &self,
        media: &Media,
        bytes: Vec<u8>,
        progress: Option<ProgressCallback>,
    ) -> Result<Media, WorkerError> {
        const CTX: CallContext = CallContext::new("media", "upload");
        let mut missing = Vec::new();
        if media.path.trim().is_empty() {
            missing.push("path");
        }
        if media.content_type.trim().is_empty() {
            missing.push("content_type");
        }
        if bytes.is_empty() {
            missing.push("bytes");
        }
        if !missing.is_empty() {
            return Err(invalid(&self.reporter, &CTX, &missing));
        }

        let size = bytes.len() as u64;
        let metadata = BlobMetadata::new(&media.content_type);
        let result = async {
            self.blob
                .upload(&media.path, bytes, metadata, progress)
                .await
                .map_err(translate_store)?;
            let url = self
                .blob
                .download_url(&media.path)
                .await
                .map_err(translate_store)?;
            let mut uploaded = media.clone();
            uploaded.size_bytes = Some(size);
            uploaded.download_url = Some(url);
            Ok(uploaded)
        }
        .await;
        self.reporter.observe(&CTX, &result);
        result
    }

    async fn media_url(&self, media: &Media) -> Result<String, WorkerError> {
        const CTX: CallContext = CallContext::new("media", "url");
        if media.path.trim().is_empty() {
            return Err(invalid(&self.reporter, &CTX, &["path"]));
        }

        let result = self
            .blob
            .download_url(&media.path)
            .await
            .map_err(translate_store);
        self.reporter.observe(&CTX, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryBlobStore;
    use std::sync::Mutex;

    fn worker() -> MediaWorker {
        MediaWorker::new(Arc::new(MemoryBlobStore::new()), StatusReporter::disabled())
    }

    #[tokio::test]
    async fn upload_populates_size_and_download_url() {
        let media = Media::new("m1", "media/m1/photo.jpg", "image/jpeg");

        let uploaded = worker()
            .upload_media(&media, vec![1, 2, 3], None)
            .await
            .unwrap();

        assert_eq!(uploaded.size_bytes, Some(3));
        assert_eq!(
            uploaded.download_url.as_deref(),
            Some("memory://media/m1/photo.jpg")
        );
    }

    #[tokio::test]
    async fn upload_reports_progress_start_and_end() {
        let seen: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback: ProgressCallback =
            Arc::new(move |p| sink.lock().unwrap().push(p.completed_units));

        let media = Media::new("m1", "media/m1/photo.jpg", "image/jpeg");
        worker()
            .upload_media(&media, vec![0; 64], Some(callback))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&64));
    }

    #[tokio::test]
    async fn url_for_unknown_path_is_not_found() {
        let media = Media::new("m1", "media/unknown.jpg", "image/jpeg");
        let err = worker().media_url(&media).await.unwrap_err();
        assert!(matches!(err, WorkerError::NotFound { .. }));
    }

    #[tokio::test]
    async fn empty_bytes_are_rejected() {
        let media = Media::new("m1", "media/m1/photo.jpg", "image/jpeg");
        let err = worker().upload_media(&media, Vec::new(), None).await.unwrap_err();
        assert_eq!(err, WorkerError::invalid_parameters(["bytes"]));
    }

    #[tokio::test]
    async fn missing_content_type_is_the_only_blamed_field() {
        let media = Media::new("m1", "media/m1/photo.jpg", " ");
        let err = worker().upload_media(&media, vec![1], None).await.unwrap_err();
        assert_eq!(err, WorkerError::invalid_parameters(["content_type"]));
    }
}
