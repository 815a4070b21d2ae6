//! CMS worker - document-store-backed implementation of `CmsApi`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Document, Faq, Record, WorkerError};
use crate::gateway::translate_store;
use crate::ports::{CmsApi, Direction, DocumentStore, Query};
use crate::status::{CallContext, StatusReporter};
use crate::workers::{decode_docs, invalid};

pub struct CmsWorker {
    store: Arc<dyn DocumentStore>,
    reporter: StatusReporter,
}

impl CmsWorker {
    pub fn new(store: Arc<dyn DocumentStore>, reporter: StatusReporter) -> Self {
        Self { store, reporter }
    }
}

#[async_trait]
impl CmsApi for CmsWorker {
    async fn document(&self, document_id: &str) -> Result<Document, WorkerError> {
        const CTX: CallContext = CallContext::new("cms", "document");
        let document_id = document_id.trim();
        if document_id.is_empty() {
            return Err(invalid(&self.reporter, &CTX, &["document_id"]));
        }

        let path = format!("cms/{document_id}");
        let result = match self.store.get(&path).await {
            Ok(doc) => Document::from_map(doc),
            Err(e) => Err(translate_store(e)),
        };
        self.reporter.observe(&CTX, &result);
        result
    }

    async fn faqs(&self) -> Result<Vec<Faq>, WorkerError> {
        const CTX: CallContext = CallContext::new("cms", "faqs");
        let query = Query::new().order_by("position", Direction::Ascending);
        let result = match self.store.list("faqs", query).await {
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

    #[tokio::test]
    async fn document_reads_by_path_and_missing_maps_to_not_found() {
        let store = MemoryDocumentStore::new();
        store.insert(
            "cms",
            json!({"id": "terms", "title": "Terms", "body": "..."}),
        );
        let worker = CmsWorker::new(Arc::new(store), StatusReporter::disabled());

        let doc = worker.document("terms").await.unwrap();
        assert_eq!(doc.title, "Terms");

        let err = worker.document("missing").await.unwrap_err();
        assert!(matches!(err, WorkerError::NotFound { .. }));
    }

    #[tokio::test]
    async fn faqs_come_back_in_display_order() {
        let store = MemoryDocumentStore::new();
        store.insert(
            "faqs",
            json!({"id": "f2", "question": "B?", "answer": "b", "position": 2}),
        );
        store.insert(
            "faqs",
            json!({"id": "f1", "question": "A?", "answer": "a", "position": 1}),
        );
        let worker = CmsWorker::new(Arc::new(store), StatusReporter::disabled());

        let faqs = worker.faqs().await.unwrap();

        assert_eq!(faqs[0].id, "f1");
        assert_eq!(faqs[1].id, "f2");
    }
}
