//! Workers - per-domain implementations of the caller-facing protocols.
//!
//! Every worker follows the same shape: validate inputs (failing fast with
//! `InvalidParameters` and an unhandled health report), build a backend
//! request, execute it through the gateway pipeline or a backend port,
//! decode into domain records, and return the result with backend failures
//! translated. Structurally uniform on purpose; the auth worker is the one
//! genuinely stateful exception.

mod accounts;
mod analytics;
mod announcements;
mod app_events;
mod auth;
mod chats;
mod cms;
mod events;
mod fanout;
mod media;
mod places;
mod push_identity;
mod systems;
mod users;

pub use accounts::AccountsWorker;
pub use analytics::AnalyticsWorker;
pub use announcements::AnnouncementsWorker;
pub use app_events::AppEventsWorker;
pub use auth::{AuthWorker, ACCESS_DATA_KEY};
pub use chats::ChatsWorker;
pub use cms::CmsWorker;
pub use events::EventsWorker;
pub use fanout::{join_bounded, FAN_OUT_TIMEOUT};
pub use media::MediaWorker;
pub use places::PlacesWorker;
pub use push_identity::PushIdentityWorker;
pub use systems::SystemsWorker;
pub use users::UsersWorker;

use crate::domain::{Record, WorkerError};
use crate::ports::DocumentData;
use crate::status::{CallContext, ReportOutcome, StatusReporter};

/// Fails an operation before any backend call: reports an unhandled outcome
/// and returns `InvalidParameters`. Counterpart of `GatewayClient::invalid`
/// for workers that do not go through the gateway.
pub(crate) fn invalid(
    reporter: &StatusReporter,
    ctx: &CallContext,
    fields: &[&str],
) -> WorkerError {
    let err = WorkerError::invalid_parameters(fields.iter().copied());
    reporter.report_failure(ctx, ReportOutcome::Unhandled, None, err.to_string());
    err
}

/// Decodes a list of loosely-typed documents into records, failing on the
/// first undecodable document.
pub(crate) fn decode_docs<T: Record>(docs: Vec<DocumentData>) -> Result<Vec<T>, WorkerError> {
    docs.into_iter().map(T::from_map).collect()
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::Arc;

    use crate::gateway::{ApiRequest, GatewayClient, MockTransport, Transport};
    use crate::status::StatusReporter;

    /// Gateway client whose health reports land on the same mock transport,
    /// so tests can count both business calls and telemetry.
    pub fn gateway_over(transport: &Arc<MockTransport>) -> GatewayClient {
        let reporter = StatusReporter::new(Arc::clone(transport) as Arc<dyn Transport>, true);
        GatewayClient::new(Arc::clone(transport) as Arc<dyn Transport>, reporter)
    }

    /// The telemetry requests captured by the mock transport.
    pub fn status_reports(transport: &MockTransport) -> Vec<ApiRequest> {
        transport
            .requests()
            .into_iter()
            .filter(|r| r.path.starts_with("/status/"))
            .collect()
    }
}
