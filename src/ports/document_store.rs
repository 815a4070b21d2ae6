//! Document Store Port - collection/document addressing by path.
//!
//! Models the managed document database at the level the workers consume it:
//! path-addressed reads (`systems/{id}/history`) with ordered, limited
//! queries. Writes go through the gateway, not this port.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// A loosely-typed document payload as returned by the store.
pub type DocumentData = Map<String, Value>;

/// Ordering direction for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// An ordered, limited collection query.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub order_by: Option<(String, Direction)>,
    pub limit: Option<u32>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders results by `field` in the given direction.
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some((field.into(), direction));
        self
    }

    /// Caps the number of returned documents.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Failures from the document or blob store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not found: {path}")]
    NotFound { path: String },
    #[error("permission denied")]
    PermissionDenied,
    #[error("network failure: {0}")]
    Network(String),
    #[error("backend failure: {0}")]
    Backend(String),
}

/// Port for path-addressed document reads.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a single document, e.g. `cms/terms`.
    async fn get(&self, path: &str) -> Result<DocumentData, StoreError>;

    /// Lists a collection, e.g. `systems/{id}/history`, applying the query's
    /// ordering and limit.
    async fn list(&self, path: &str, query: Query) -> Result<Vec<DocumentData>, StoreError>;
}
