//! App events protocol.

use async_trait::async_trait;

use crate::domain::{AppEvent, WorkerError};
use crate::ports::FanOut;

/// Port for aggregated app-event reads.
#[async_trait]
pub trait AppEventsApi: Send + Sync {
    /// Loads the most recent app events, newest first, each enriched with
    /// its detail rows via a bounded concurrent fan-out.
    async fn app_events(&self, limit: u32) -> Result<FanOut<AppEvent>, WorkerError>;
}
