//! App events worker - recent aggregated events with detail-row enrichment.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{AppEvent, AppEventDetail, WorkerError};
use crate::gateway::translate_store;
use crate::ports::{AppEventsApi, Direction, DocumentStore, FanOut, Query};
use crate::status::{CallContext, StatusReporter};
use crate::workers::{decode_docs, invalid, join_bounded, FAN_OUT_TIMEOUT};

const COLLECTION: &str = "appEvents";

pub struct AppEventsWorker {
    store: Arc<dyn DocumentStore>,
    reporter: StatusReporter,
}

impl AppEventsWorker {
    pub fn new(store: Arc<dyn DocumentStore>, reporter: StatusReporter) -> Self {
        Self { store, reporter }
    }

    async fn enrich(
        store: Arc<dyn DocumentStore>,
        mut event: AppEvent,
    ) -> Result<AppEvent, WorkerError> {
        let path = format!("{COLLECTION}/{}/details", event.id);
        let docs = store
            .list(&path, Query::new())
            .await
            .map_err(translate_store)?;
        event.details = docs
            .into_iter()
            .map(|doc| {
                serde_json::from_value::<AppEventDetail>(serde_json::Value::Object(doc))
                    .map_err(|e| WorkerError::failure(format!("undecodable event detail: {e}")))
            })
            .collect::<Result<_, _>>()?;
        Ok(event)
    }
}

#[async_trait]
impl AppEventsApi for AppEventsWorker {
    async fn app_events(&self, limit: u32) -> Result<FanOut<AppEvent>, WorkerError> {
        const CTX: CallContext = CallContext::new("appEvents", "list");
        if limit == 0 {
            return Err(invalid(&self.reporter, &CTX, &["limit"]));
        }

        let query = Query::new()
            .order_by("occurred_at", Direction::Descending)
            .limit(limit);
        let events: Vec<AppEvent> = match self.store.list(COLLECTION, query).await {
            Ok(docs) => match decode_docs(docs) {
                Ok(events) => events,
                Err(e) => {
                    self.reporter.observe::<()>(&CTX, &Err(e.clone()));
                    return Err(e);
                }
            },
            Err(e) => {
                let err = translate_store(e);
                self.reporter.observe::<()>(&CTX, &Err(err.clone()));
                return Err(err);
            }
        };

        let tasks: Vec<_> = events
            .into_iter()
            .map(|event| Self::enrich(Arc::clone(&self.store), event))
            .collect();
        let mut aggregate = join_bounded(tasks, FAN_OUT_TIMEOUT).await;
        aggregate
            .items
            .sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

        self.reporter.report_success(&CTX);
        Ok(aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryDocumentStore;
    use serde_json::json;

    #[tokio::test]
    async fn events_come_back_newest_first_with_details_attached() {
        let store = MemoryDocumentStore::new();
        store.insert(
            COLLECTION,
            json!({"id": "ev1", "name": "app_open", "occurred_at": "2026-08-01T00:00:00Z", "count": 4}),
        );
        store.insert(
            COLLECTION,
            json!({"id": "ev2", "name": "purchase", "occurred_at": "2026-08-10T00:00:00Z", "count": 1}),
        );
        store.insert(
            "appEvents/ev2/details",
            json!({"id": "d1", "label": "sku", "value": "A-100"}),
        );
        let worker = AppEventsWorker::new(Arc::new(store), StatusReporter::disabled());

        let aggregate = worker.app_events(10).await.unwrap();

        assert!(aggregate.complete);
        assert_eq!(aggregate.items[0].id, "ev2");
        assert_eq!(aggregate.items[0].details.len(), 1);
        assert_eq!(aggregate.items[0].details[0].label, "sku");
        assert!(aggregate.items[1].details.is_empty());
    }

    #[tokio::test]
    async fn zero_limit_is_invalid() {
        let worker = AppEventsWorker::new(
            Arc::new(MemoryDocumentStore::new()),
            StatusReporter::disabled(),
        );
        let err = worker.app_events(0).await.unwrap_err();
        assert_eq!(err, WorkerError::invalid_parameters(["limit"]));
    }
}
