//! Push identity protocol.
//!
//! Implementations may be chained: the gateway-backed worker fans `set` and
//! `clear` out to an ordered list of further implementations so the identity
//! propagates to secondary systems.

use async_trait::async_trait;

use crate::domain::WorkerError;

/// Port for push-notification identity registration.
#[async_trait]
pub trait PushIdentity: Send + Sync {
    /// Registers the device push token for a user.
    async fn set_identity(&self, user_id: &str, device_token: &str) -> Result<(), WorkerError>;

    /// Clears any registered push identity for a user.
    async fn clear_identity(&self, user_id: &str) -> Result<(), WorkerError>;
}
