//! The request/response pipeline every gateway-backed worker runs through.
//!
//! One invocation: send the built request, decode on success, translate on
//! failure (with an optional domain-specific remap hook), and report exactly
//! one health outcome either way. Success and error paths are mutually
//! exclusive per invocation.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::WorkerError;
use crate::gateway::{translate_status, translate_transport, ApiRequest, Transport};
use crate::status::{CallContext, ReportOutcome, StatusReporter};

/// Decodes a JSON payload into a typed value, surfacing decode failures as
/// domain errors rather than panics.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, WorkerError> {
    serde_json::from_slice(body)
        .map_err(|e| WorkerError::failure(format!("response decode failed: {e}")))
}

/// Gateway client shared by every HTTP-backed worker.
///
/// Cheap to clone: the transport and reporter are shared.
#[derive(Clone)]
pub struct GatewayClient {
    transport: Arc<dyn Transport>,
    reporter: StatusReporter,
}

impl GatewayClient {
    pub fn new(transport: Arc<dyn Transport>, reporter: StatusReporter) -> Self {
        Self { transport, reporter }
    }

    /// The shared health reporter, for workers that report outside the
    /// pipeline (validation failures, non-gateway backends).
    pub fn reporter(&self) -> &StatusReporter {
        &self.reporter
    }

    /// Fails an operation before the pipeline is entered: reports an
    /// unhandled outcome for the call and returns `InvalidParameters`.
    pub fn invalid(&self, ctx: &CallContext, fields: &[&str]) -> WorkerError {
        let err = WorkerError::invalid_parameters(fields.iter().copied());
        self.reporter
            .report_failure(ctx, ReportOutcome::Unhandled, None, err.to_string());
        err
    }

    /// Runs the pipeline with the identity remap.
    pub async fn execute<T, D>(
        &self,
        ctx: &CallContext,
        request: ApiRequest,
        decode: D,
    ) -> Result<T, WorkerError>
    where
        D: FnOnce(&[u8]) -> Result<T, WorkerError> + Send,
    {
        self.execute_with_remap(ctx, request, decode, |e| e).await
    }

    /// Runs the pipeline with a domain-specific pending-error remap hook.
    ///
    /// The remap runs on every error path (transport, status, decode) before
    /// the error is returned, letting a worker turn a generic condition into
    /// a context-specific one. Exactly one health report fires per
    /// invocation regardless of branch.
    pub async fn execute_with_remap<T, D, R>(
        &self,
        ctx: &CallContext,
        request: ApiRequest,
        decode: D,
        remap: R,
    ) -> Result<T, WorkerError>
    where
        D: FnOnce(&[u8]) -> Result<T, WorkerError> + Send,
        R: FnOnce(WorkerError) -> WorkerError + Send,
    {
        match self.transport.send(&request).await {
            Err(transport_error) => {
                let code = None;
                let err = remap(translate_transport(transport_error));
                self.reporter
                    .report_failure(ctx, ReportOutcome::HardError, code, err.to_string());
                Err(err)
            }
            Ok(response) if !response.is_success() => {
                let err = remap(translate_status(response.status, &response.body, &request.path));
                self.reporter.report_failure(
                    ctx,
                    ReportOutcome::HardError,
                    Some(response.status),
                    err.to_string(),
                );
                Err(err)
            }
            Ok(response) => match decode(&response.body) {
                Ok(value) => {
                    self.reporter.report_success(ctx);
                    Ok(value)
                }
                Err(decode_error) => {
                    let err = remap(decode_error);
                    self.reporter.report_failure(
                        ctx,
                        ReportOutcome::PendingError,
                        Some(response.status),
                        err.to_string(),
                    );
                    Err(err)
                }
            },
        }
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{MockTransport, TransportError};
    use serde_json::json;

    const CTX: CallContext = CallContext::new("test", "call");

    fn client(transport: Arc<MockTransport>) -> (GatewayClient, Arc<MockTransport>) {
        // Reports go to the same mock so the tests can count them.
        let reporter = StatusReporter::new(Arc::clone(&transport) as Arc<dyn Transport>, false);
        (
            GatewayClient::new(Arc::clone(&transport) as Arc<dyn Transport>, reporter),
            transport,
        )
    }

    fn status_reports(transport: &MockTransport) -> Vec<ApiRequest> {
        transport
            .requests()
            .into_iter()
            .filter(|r| r.path.starts_with("/status/"))
            .collect()
    }

    #[tokio::test]
    async fn success_decodes_and_reports_exactly_once() {
        let transport = Arc::new(
            MockTransport::new()
                .with_json(200, &json!({"value": 7}))
                .with_json(200, &json!({})),
        );
        let (client, transport) = client(transport);

        #[derive(serde::Deserialize)]
        struct Payload {
            value: u32,
        }

        let payload: Payload = client
            .execute(&CTX, ApiRequest::get("/thing"), decode_json)
            .await
            .unwrap();
        client.reporter().drain().await;

        assert_eq!(payload.value, 7);
        let reports = status_reports(&transport);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].body.as_ref().unwrap()["outcome"], "success");
    }

    #[tokio::test]
    async fn transport_failure_reports_hard_error_once() {
        let transport = Arc::new(
            MockTransport::new()
                .with_error(TransportError::Connect("refused".into()))
                .with_json(200, &json!({})),
        );
        let (client, transport) = client(transport);

        let err = client
            .execute(&CTX, ApiRequest::get("/thing"), decode_json::<serde_json::Value>)
            .await
            .unwrap_err();
        client.reporter().drain().await;

        assert!(matches!(err, WorkerError::Network { .. }));
        let reports = status_reports(&transport);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].body.as_ref().unwrap()["outcome"], "hardError");
    }

    #[tokio::test]
    async fn decode_failure_reports_pending_error() {
        let transport = Arc::new(
            MockTransport::new()
                .with_status(200, b"not json")
                .with_json(200, &json!({})),
        );
        let (client, transport) = client(transport);

        let err = client
            .execute(&CTX, ApiRequest::get("/thing"), decode_json::<serde_json::Value>)
            .await
            .unwrap_err();
        client.reporter().drain().await;

        assert!(matches!(err, WorkerError::Failure { .. }));
        let reports = status_reports(&transport);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].body.as_ref().unwrap()["outcome"], "pendingError");
    }

    #[tokio::test]
    async fn remap_rewrites_the_error_before_reporting() {
        let transport = Arc::new(
            MockTransport::new()
                .with_status(404, b"")
                .with_json(200, &json!({})),
        );
        let (client, _transport) = client(transport);

        let err = client
            .execute_with_remap(
                &CTX,
                ApiRequest::get("/accounts/a-1/deactivate"),
                decode_json::<serde_json::Value>,
                |_| WorkerError::not_found("account", "a-1"),
            )
            .await
            .unwrap_err();
        client.reporter().drain().await;

        assert_eq!(err, WorkerError::not_found("account", "a-1"));
    }

    #[tokio::test]
    async fn invalid_reports_unhandled_and_returns_invalid_parameters() {
        let transport = Arc::new(MockTransport::new().with_json(200, &json!({})));
        let (client, transport) = client(transport);

        let err = client.invalid(&CTX, &["user_id"]);
        client.reporter().drain().await;

        assert_eq!(err, WorkerError::invalid_parameters(["user_id"]));
        let reports = status_reports(&transport);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].body.as_ref().unwrap()["outcome"], "unhandled");
    }
}
