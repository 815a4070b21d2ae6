//! Transport - the wire layer beneath the pipeline.
//!
//! `HttpTransport` is the production implementation against the API gateway;
//! `MockTransport` (in `gateway::mock`) is the scriptable test double.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::GatewayConfig;
use crate::gateway::ApiRequest;

/// Raw response as seen before decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failures (the request never yielded a status line).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("transport failure: {0}")]
    Other(String),
}

/// Port for sending a built request and returning the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Production transport over `reqwest` against the API gateway.
///
/// Adds the wire-level contract every gateway call shares: the configured
/// base URL, the caller device identifier as a query parameter, and the API
/// key header when configured.
pub struct HttpTransport {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpTransport {
    /// Creates a transport from gateway configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), self.url(&request.path))
            .query(&request.query)
            .query(&[("device", self.config.device_id.as_str())]);

        if let Some(api_key) = &self.config.api_key {
            builder = builder.header("x-api-key", api_key.expose_secret());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    timeout_secs: self.config.timeout().as_secs(),
                }
            } else if e.is_connect() {
                TransportError::Connect(e.to_string())
            } else {
                TransportError::Other(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?
            .to_vec();

        Ok(RawResponse { status, body })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.config.base_url)
            .field("device_id", &self.config.device_id)
            .finish_non_exhaustive()
    }
}
