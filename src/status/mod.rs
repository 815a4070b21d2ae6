//! System Health Reporter - per-(system, endpoint) outcome telemetry.
//!
//! Every worker operation reports exactly one outcome to the remote status
//! service. Reporting is fire-and-forget: it is spawned off the caller's
//! path, and a reporting failure is logged and swallowed, never surfaced to
//! the business operation. The one exception is [`StatusReporter::override_state`],
//! an operator action that posts a state change and surfaces errors normally.

use std::sync::{Arc, Mutex};

use serde_json::json;
use tokio::task::JoinHandle;

use crate::domain::{Record, System, SystemState, WorkerError};
use crate::gateway::{translate_status, translate_transport, ApiRequest, Transport};
use crate::ports::RemoteConfig;

/// Identifies one backend call for health reporting.
///
/// Created per-operation, consumed immediately by the reporter, never
/// persisted.
#[derive(Debug, Clone, Copy)]
pub struct CallContext {
    pub system: &'static str,
    pub endpoint: &'static str,
    /// When set, the human-readable detail string is included in failure
    /// reports.
    pub verbose: bool,
}

impl CallContext {
    pub const fn new(system: &'static str, endpoint: &'static str) -> Self {
        Self {
            system,
            endpoint,
            verbose: false,
        }
    }

    pub const fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

/// Outcome of one backend call, tagged before translation details are lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    Success,
    /// The transport succeeded but the payload failed domain handling.
    PendingError,
    /// The backend call itself failed.
    HardError,
    /// The operation never reached the backend (e.g. input validation).
    Unhandled,
}

impl ReportOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            ReportOutcome::Success => "success",
            ReportOutcome::PendingError => "pendingError",
            ReportOutcome::HardError => "hardError",
            ReportOutcome::Unhandled => "unhandled",
        }
    }
}

struct Inner {
    transport: Option<Arc<dyn Transport>>,
    verbose: bool,
    gate: Option<(Arc<dyn RemoteConfig>, String)>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

/// Fire-and-forget telemetry sink shared by every worker.
///
/// Cheap to clone; all clones share the same in-flight task list.
#[derive(Clone)]
pub struct StatusReporter {
    inner: Arc<Inner>,
}

impl StatusReporter {
    /// Creates a reporter posting to the status service via `transport`.
    pub fn new(transport: Arc<dyn Transport>, verbose: bool) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport: Some(transport),
                verbose,
                gate: None,
                in_flight: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Creates a reporter that drops every report. Useful in tests and when
    /// the status service is not configured.
    pub fn disabled() -> Self {
        Self {
            inner: Arc::new(Inner {
                transport: None,
                verbose: false,
                gate: None,
                in_flight: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Gates reporting behind a remote-config boolean key; when the key
    /// resolves to `false` reports are skipped.
    pub fn with_gate(mut self, config: Arc<dyn RemoteConfig>, key: impl Into<String>) -> Self {
        let inner = Arc::get_mut(&mut self.inner)
            .expect("with_gate must be called before the reporter is shared");
        inner.gate = Some((config, key.into()));
        self
    }

    /// Records a successful call.
    pub fn report_success(&self, ctx: &CallContext) {
        self.dispatch(ctx, ReportOutcome::Success, None, None);
    }

    /// Records a failed call with its outcome class, optional failure code
    /// and debug detail (sent only when verbose reporting is on).
    pub fn report_failure(
        &self,
        ctx: &CallContext,
        outcome: ReportOutcome,
        failure_code: Option<u16>,
        detail: impl Into<String>,
    ) {
        let detail = detail.into();
        let verbose = ctx.verbose || self.inner.verbose;
        self.dispatch(ctx, outcome, failure_code, verbose.then_some(detail));
    }

    /// Reports success or failure from an operation result. Used by workers
    /// that do not go through the gateway pipeline.
    pub fn observe<T>(&self, ctx: &CallContext, result: &Result<T, WorkerError>) {
        match result {
            Ok(_) => self.report_success(ctx),
            Err(err) => {
                let outcome = match err {
                    WorkerError::InvalidParameters { .. } => ReportOutcome::Unhandled,
                    WorkerError::Network { .. } => ReportOutcome::HardError,
                    _ => ReportOutcome::PendingError,
                };
                self.report_failure(ctx, outcome, None, err.to_string());
            }
        }
    }

    /// Manually overrides a system's reported state.
    ///
    /// Unlike passive telemetry this returns the updated record and surfaces
    /// errors normally.
    pub async fn override_state(
        &self,
        system_id: &str,
        state: SystemState,
    ) -> Result<System, WorkerError> {
        const CTX: CallContext = CallContext::new("systems", "override");

        if system_id.trim().is_empty() {
            let err = WorkerError::invalid_parameters(["system_id"]);
            self.report_failure(&CTX, ReportOutcome::Unhandled, None, err.to_string());
            return Err(err);
        }

        let transport = match &self.inner.transport {
            Some(transport) => Arc::clone(transport),
            None => return Err(WorkerError::failure("status service not configured")),
        };

        let request = ApiRequest::post("/systems/override")
            .json(&json!({ "systemId": system_id, "state": state.as_str() }))?;

        let result = match transport.send(&request).await {
            Err(e) => Err(translate_transport(e)),
            Ok(response) if !response.is_success() => {
                Err(translate_status(response.status, &response.body, &request.path))
            }
            Ok(response) => System::from_slice(&response.body),
        };

        match &result {
            Ok(_) => self.report_success(&CTX),
            Err(e) => {
                self.report_failure(&CTX, ReportOutcome::HardError, None, e.to_string())
            }
        }
        result
    }

    /// Waits for all in-flight reports to finish. Intended for graceful
    /// shutdown and deterministic tests; business code never needs it.
    pub async fn drain(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut in_flight = self
                .inner
                .in_flight
                .lock()
                .expect("in_flight lock poisoned");
            in_flight.drain(..).collect()
        };
        for handle in handles {
            // A panicked report task is already logged by the runtime.
            let _ = handle.await;
        }
    }

    fn dispatch(
        &self,
        ctx: &CallContext,
        outcome: ReportOutcome,
        failure_code: Option<u16>,
        detail: Option<String>,
    ) {
        let transport = match &self.inner.transport {
            Some(transport) => Arc::clone(transport),
            None => return,
        };
        let gate = self.inner.gate.clone();
        let path = format!("/status/{}/{}", ctx.system, ctx.endpoint);
        let system = ctx.system;
        let endpoint = ctx.endpoint;

        let handle = tokio::spawn(async move {
            if let Some((config, key)) = gate {
                // Gate failures default to reporting enabled.
                if let Ok(false) = config.bool_value(&key).await {
                    return;
                }
            }

            let mut body = json!({ "outcome": outcome.as_str() });
            if let Some(code) = failure_code {
                body["failureCode"] = json!(code);
            }
            if let Some(detail) = detail {
                body["detail"] = json!(detail);
            }

            let request = match ApiRequest::post(path).json(&body) {
                Ok(request) => request,
                Err(e) => {
                    tracing::warn!(system, endpoint, "failed to build status report: {e}");
                    return;
                }
            };

            match transport.send(&request).await {
                Ok(response) if response.is_success() => {}
                Ok(response) => {
                    tracing::warn!(
                        system,
                        endpoint,
                        status = response.status,
                        "status report rejected"
                    );
                }
                Err(e) => {
                    tracing::warn!(system, endpoint, "status report failed: {e}");
                }
            }
        });

        let mut in_flight = self
            .inner
            .in_flight
            .lock()
            .expect("in_flight lock poisoned");
        in_flight.retain(|h| !h.is_finished());
        in_flight.push(handle);
    }
}

impl std::fmt::Debug for StatusReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusReporter")
            .field("enabled", &self.inner.transport.is_some())
            .field("verbose", &self.inner.verbose)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockTransport;

    fn reporter_with(transport: Arc<MockTransport>) -> StatusReporter {
        StatusReporter::new(transport, true)
    }

    #[tokio::test]
    async fn success_report_posts_to_system_endpoint_path() {
        let transport = Arc::new(MockTransport::new().with_json(200, &json!({})));
        let reporter = reporter_with(Arc::clone(&transport));

        reporter.report_success(&CallContext::new("accounts", "list"));
        reporter.drain().await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/status/accounts/list");
        assert_eq!(requests[0].body.as_ref().unwrap()["outcome"], "success");
    }

    #[tokio::test]
    async fn failure_report_carries_code_and_detail_when_verbose() {
        let transport = Arc::new(MockTransport::new().with_json(200, &json!({})));
        let reporter = reporter_with(Arc::clone(&transport));

        reporter.report_failure(
            &CallContext::new("auth", "signIn"),
            ReportOutcome::HardError,
            Some(503),
            "provider down",
        );
        reporter.drain().await;

        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["outcome"], "hardError");
        assert_eq!(body["failureCode"], 503);
        assert_eq!(body["detail"], "provider down");
    }

    #[tokio::test]
    async fn reporting_failure_is_swallowed() {
        let transport = Arc::new(MockTransport::new().with_status(500, b"boom"));
        let reporter = reporter_with(Arc::clone(&transport));

        reporter.report_success(&CallContext::new("accounts", "list"));
        reporter.drain().await;
        // No panic, no surfaced error; the report was attempted.
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn disabled_reporter_sends_nothing() {
        let reporter = StatusReporter::disabled();
        reporter.report_success(&CallContext::new("accounts", "list"));
        reporter.drain().await;
    }

    #[tokio::test]
    async fn override_state_returns_updated_record() {
        let updated = System {
            id: "sys-1".into(),
            name: "Gateway".into(),
            state: SystemState::Down,
            metadata: Default::default(),
        };
        let transport = Arc::new(
            MockTransport::new()
                .with_json(200, &updated)
                .with_json(200, &json!({})),
        );
        let reporter = reporter_with(Arc::clone(&transport));

        let system = reporter.override_state("sys-1", SystemState::Down).await.unwrap();
        assert_eq!(system.state, SystemState::Down);

        let first = &transport.requests()[0];
        assert_eq!(first.path, "/systems/override");
        assert_eq!(first.body.as_ref().unwrap()["state"], "down");
    }

    #[tokio::test]
    async fn override_state_rejects_empty_system_id() {
        let reporter = StatusReporter::disabled();
        let err = reporter.override_state("  ", SystemState::Down).await.unwrap_err();
        assert_eq!(err, WorkerError::invalid_parameters(["system_id"]));
    }
}
