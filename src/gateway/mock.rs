//! Scriptable mock transport for tests.
//!
//! Responses are queued ahead of time and replayed in order; every request
//! is captured for assertions. Not for production use: lock operations use
//! `.expect()` and will panic if poisoned, which is acceptable in test code.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;

use crate::gateway::{ApiRequest, RawResponse, Transport, TransportError};

/// In-memory transport replaying scripted responses.
///
/// # Example
///
/// ```ignore
/// let transport = MockTransport::new()
///     .with_json(200, &serde_json::json!({"accounts": []}));
/// let client = GatewayClient::new(Arc::new(transport), reporter);
/// ```
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and JSON body.
    pub fn with_json<T: Serialize>(self, status: u16, body: &T) -> Self {
        let bytes = serde_json::to_vec(body).expect("mock body must serialize");
        self.push(Ok(RawResponse { status, body: bytes }));
        self
    }

    /// Queues a response with the given status and raw body.
    pub fn with_status(self, status: u16, body: &[u8]) -> Self {
        self.push(Ok(RawResponse {
            status,
            body: body.to_vec(),
        }));
        self
    }

    /// Queues a transport-level error.
    pub fn with_error(self, error: TransportError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, response: Result<RawResponse, TransportError>) {
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .push_back(response);
    }

    // === Test Helpers ===

    /// All requests sent so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .clone()
    }

    /// Number of requests sent so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock poisoned").len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());

        self.responses
            .lock()
            .expect("responses lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_string())))
    }
}
