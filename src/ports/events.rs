//! Events protocol.

use async_trait::async_trait;

use crate::domain::{Event, WorkerError};

/// Port for event operations.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// Lists events scheduled at a place.
    async fn events_for_place(&self, place_code: &str) -> Result<Vec<Event>, WorkerError>;

    /// Creates an event and returns the stored record.
    async fn create_event(&self, event: &Event) -> Result<Event, WorkerError>;
}
