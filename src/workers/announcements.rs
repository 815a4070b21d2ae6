//! Announcements worker - document-store-backed implementation of
//! `AnnouncementsApi`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Announcement, WorkerError};
use crate::gateway::translate_store;
use crate::ports::{AnnouncementsApi, Direction, DocumentStore, Query};
use crate::status::{CallContext, StatusReporter};
use crate::workers::{decode_docs, invalid};

const COLLECTION: &str = "announcements";

pub struct AnnouncementsWorker {
    store: Arc<dyn DocumentStore>,
    reporter: StatusReporter,
}

impl AnnouncementsWorker {
    pub fn new(store: Arc<dyn DocumentStore>, reporter: StatusReporter) -> Self {
        Self { store, reporter }
    }
}

#[async_trait]
impl AnnouncementsApi for AnnouncementsWorker {
    async fn latest_announcements(&self, limit: u32) -> Result<Vec<Announcement>, WorkerError> {
        const CTX: CallContext = CallContext::new("announcements", "list");
        if limit == 0 {
            return Err(invalid(&self.reporter, &CTX, &["limit"]));
        }

        let query = Query::new()
            .order_by("published_at", Direction::Descending)
            .limit(limit);

        let result = match self.store.list(COLLECTION, query).await {
            Ok(docs) => decode_docs(docs),
            Err(e) => Err(translate_store(e)),
        };
        self.reporter.observe(&CTX, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryDocumentStore;
    use serde_json::json;

    fn seeded_store() -> Arc<MemoryDocumentStore> {
        let store = MemoryDocumentStore::new();
        store.insert(
            COLLECTION,
            json!({
                "id": "an-1",
                "title": "Older",
                "body": "first",
                "published_at": "2026-08-01T00:00:00Z",
            }),
        );
        store.insert(
            COLLECTION,
            json!({
                "id": "an-2",
                "title": "Newer",
                "body": "second",
                "published_at": "2026-08-20T00:00:00Z",
            }),
        );
        Arc::new(store)
    }

    #[tokio::test]
    async fn returns_newest_first_and_respects_limit() {
        let worker = AnnouncementsWorker::new(seeded_store(), StatusReporter::disabled());

        let announcements = worker.latest_announcements(1).await.unwrap();

        assert_eq!(announcements.len(), 1);
        assert_eq!(announcements[0].id, "an-2");
    }

    #[tokio::test]
    async fn zero_limit_is_invalid() {
        let worker = AnnouncementsWorker::new(seeded_store(), StatusReporter::disabled());
        let err = worker.latest_announcements(0).await.unwrap_err();
        assert_eq!(err, WorkerError::invalid_parameters(["limit"]));
    }
}
