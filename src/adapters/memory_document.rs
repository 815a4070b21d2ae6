//! In-memory document store keyed by collection path.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::ports::{Direction, DocumentData, DocumentStore, Query, StoreError};

/// In-memory [`DocumentStore`] with ordering and limit support.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: Mutex<HashMap<String, Vec<DocumentData>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a document into a collection. Panics when `doc` is not a
    /// JSON object; only used from test setup.
    pub fn insert(&self, collection: &str, doc: Value) {
        let Value::Object(map) = doc else {
            panic!("documents must be JSON objects");
        };
        self.collections
            .lock()
            .expect("collection map poisoned")
            .entry(collection.to_string())
            .or_default()
            .push(map);
    }
}

/// Field comparison mirroring the backing store: numbers numerically,
/// strings lexicographically, anything else (or a missing field) equal.
fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, path: &str) -> Result<DocumentData, StoreError> {
        let (collection, id) = path.rsplit_once('/').ok_or_else(|| StoreError::NotFound {
            path: path.to_string(),
        })?;

        let collections = self.collections.lock().expect("collection map poisoned");
        collections
            .get(collection)
            .and_then(|docs| {
                docs.iter()
                    .find(|doc| doc.get("id").and_then(Value::as_str) == Some(id))
            })
            .cloned()
            .ok_or(StoreError::NotFound {
                path: path.to_string(),
            })
    }

    async fn list(&self, path: &str, query: Query) -> Result<Vec<DocumentData>, StoreError> {
        let collections = self.collections.lock().expect("collection map poisoned");
        let mut docs = collections.get(path).cloned().unwrap_or_default();

        if let Some((field, direction)) = &query.order_by {
            docs.sort_by(|a, b| {
                let ord = compare_field(a.get(field), b.get(field));
                match direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            });
        }
        if let Some(limit) = query.limit {
            docs.truncate(limit as usize);
        }
        Ok(docs)
    }
}
