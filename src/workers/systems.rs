//! Systems health worker - monitored-system listing, bucketed endpoint
//! history with fan-out enrichment, and operator state overrides.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{FailureCode, HistoryEntry, System, SystemState, WorkerError};
use crate::gateway::translate_store;
use crate::ports::{Direction, DocumentStore, FanOut, Query, SystemsApi};
use crate::status::{CallContext, StatusReporter};
use crate::workers::{decode_docs, invalid};
use crate::workers::{join_bounded, FAN_OUT_TIMEOUT};

pub struct SystemsWorker {
    store: Arc<dyn DocumentStore>,
    reporter: StatusReporter,
}

impl SystemsWorker {
    pub fn new(store: Arc<dyn DocumentStore>, reporter: StatusReporter) -> Self {
        Self { store, reporter }
    }

    /// Attaches the failure-code breakdown stored under the entry's
    /// timestamp-keyed sub-collection.
    async fn enrich(
        store: Arc<dyn DocumentStore>,
        base: String,
        mut entry: HistoryEntry,
    ) -> Result<HistoryEntry, WorkerError> {
        let path = format!("{base}/{}/failureCodes", entry.timestamp.timestamp());
        let docs = store
            .list(&path, Query::new())
            .await
            .map_err(translate_store)?;
        entry.failure_codes = docs
            .into_iter()
            .map(|doc| {
                serde_json::from_value::<FailureCode>(serde_json::Value::Object(doc))
                    .map_err(|e| WorkerError::failure(format!("undecodable failure code: {e}")))
            })
            .collect::<Result<_, _>>()?;
        Ok(entry)
    }
}

#[async_trait]
impl SystemsApi for SystemsWorker {
    async fn systems(&self) -> Result<Vec<System>, WorkerError> {
        const CTX: CallContext = CallContext::new("systems", "list");
        let result = match self.store.list("systems", Query::new()).await {
            Ok(docs) => decode_docs(docs),
            Err(e) => Err(translate_store(e)),
        };
        self.reporter.observe(&CTX, &result);
        result
    }

    async fn endpoint_history(
        &self,
        system_id: &str,
        endpoint_id: &str,
        window: Duration,
        bucket: Duration,
    ) -> Result<FanOut<HistoryEntry>, WorkerError> {
        const CTX: CallContext = CallContext::new("systems", "history");
        let system_id = system_id.trim();
        let endpoint_id = endpoint_id.trim();
        let mut missing = Vec::new();
        if system_id.is_empty() {
            missing.push("system_id");
        }
        if endpoint_id.is_empty() {
            missing.push("endpoint_id");
        }
        if bucket.is_zero() {
            missing.push("bucket");
        }
        if !missing.is_empty() {
            return Err(invalid(&self.reporter, &CTX, &missing));
        }

        // One bucket per interval; a window shorter than a bucket still
        // fetches the most recent entry.
        let limit = (window.as_secs() / bucket.as_secs()).max(1) as u32;
        let base = format!("systems/{system_id}/endPoints/{endpoint_id}/history");
        let query = Query::new()
            .order_by("timestamp", Direction::Descending)
            .limit(limit);

        let entries: Vec<HistoryEntry> = match self.store.list(&base, query).await {
            Ok(docs) => match decode_docs(docs) {
                Ok(entries) => entries,
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

        let tasks: Vec<_> = entries
            .into_iter()
            .map(|entry| Self::enrich(Arc::clone(&self.store), base.clone(), entry))
            .collect();
        let mut aggregate = join_bounded(tasks, FAN_OUT_TIMEOUT).await;
        aggregate.items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        self.reporter.report_success(&CTX);
        Ok(aggregate)
    }

    async fn override_state(
        &self,
        system_id: &str,
        state: SystemState,
    ) -> Result<System, WorkerError> {
        self.reporter.override_state(system_id, state).await
    }
}
