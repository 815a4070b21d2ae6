//! Systems health protocol.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{HistoryEntry, System, SystemState, WorkerError};
use crate::ports::FanOut;

/// Port for systems-health operations.
#[async_trait]
pub trait SystemsApi: Send + Sync {
    /// Lists all monitored systems.
    async fn systems(&self) -> Result<Vec<System>, WorkerError>;

    /// Loads an endpoint's bucketed history for the given window.
    ///
    /// The query limit is the window divided by the bucket interval; each
    /// returned entry is enriched with its failure-code breakdown via a
    /// bounded concurrent fan-out.
    async fn endpoint_history(
        &self,
        system_id: &str,
        endpoint_id: &str,
        window: Duration,
        bucket: Duration,
    ) -> Result<FanOut<HistoryEntry>, WorkerError>;

    /// Manually overrides a system's reported state (operator action).
    async fn override_state(
        &self,
        system_id: &str,
        state: SystemState,
    ) -> Result<System, WorkerError>;
}
