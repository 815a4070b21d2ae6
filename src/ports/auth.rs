//! Auth protocol and federated-flow correlation types.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AccessData, WorkerError};

/// Opaque handle correlating a federated sign-in attempt with its external
/// provider callback.
///
/// Pending flow state is keyed by handle in a concurrent map, so a second
/// attempt started before the first's callback arrives cannot overwrite the
/// first attempt's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowHandle(Uuid);

impl FlowHandle {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for FlowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Returned when a federated sign-in is issued: the handle the external
/// callback must carry, and the nonce to embed in the authorization request.
#[derive(Debug, Clone)]
pub struct FederatedChallenge {
    pub handle: FlowHandle,
    pub nonce: String,
}

/// What the external federated provider reported back.
#[derive(Debug, Clone)]
pub enum FederatedCallback {
    /// The provider authorized the request.
    Authorized {
        /// Raw identity token bytes, absent when the provider failed to
        /// attach one.
        identity_token: Option<Vec<u8>>,
        /// Email, present only on first authorization for most providers.
        email: Option<String>,
    },
    /// The provider reported an error.
    Failed { reason: String },
}

/// Caller-facing auth protocol.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Signs in with email/password credentials and returns the persisted
    /// session record.
    async fn sign_in(&self, username: &str, password: &str) -> Result<AccessData, WorkerError>;

    /// Starts a federated sign-in attempt: generates a nonce, records the
    /// pending flow state, and returns the challenge to hand to the external
    /// authorization request.
    async fn begin_federated_sign_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<FederatedChallenge, WorkerError>;

    /// Completes a federated sign-in attempt when the external provider
    /// calls back. Consumes the pending flow state exactly once.
    async fn complete_federated_sign_in(
        &self,
        handle: FlowHandle,
        callback: FederatedCallback,
    ) -> Result<AccessData, WorkerError>;

    /// Links an email/password credential to the current signed-in session.
    async fn link_password(&self, email: &str, password: &str)
        -> Result<AccessData, WorkerError>;

    /// Signs out: provider sign-out, then clears and persists local state.
    /// Local state is kept when the provider-level sign-out fails.
    async fn sign_out(&self) -> Result<(), WorkerError>;

    /// Refreshes the ID token for the current session without changing the
    /// sign-in method. Any fetch failure means not authenticated.
    async fn check_auth(&self) -> Result<AccessData, WorkerError>;

    /// A snapshot of the current session record.
    async fn access_data(&self) -> AccessData;
}
