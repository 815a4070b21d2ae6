//! Places protocol.

use async_trait::async_trait;

use crate::domain::{Place, WorkerError};

/// Port for place lookups.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Loads a place by its short code.
    async fn place_by_code(&self, code: &str) -> Result<Place, WorkerError>;

    /// Lists all places.
    async fn places(&self) -> Result<Vec<Place>, WorkerError>;
}
