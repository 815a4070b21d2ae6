//! Push identity worker - registers the device token with the backend, then
//! fans the change out to an ordered list of secondary implementations.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::WorkerError;
use crate::gateway::{ApiRequest, GatewayClient};
use crate::ports::PushIdentity;
use crate::status::CallContext;

pub struct PushIdentityWorker {
    gateway: GatewayClient,
    /// Secondary registrations, attempted in order after the backend call.
    links: Vec<Arc<dyn PushIdentity>>,
}

impl PushIdentityWorker {
    pub fn new(gateway: GatewayClient) -> Self {
        Self {
            gateway,
            links: Vec::new(),
        }
    }

    /// Appends a secondary implementation the identity propagates to.
    pub fn with_link(mut self, link: Arc<dyn PushIdentity>) -> Self {
        self.links.push(link);
        self
    }
}

/// First error wins, but every link is attempted.
fn combine(first_error: Option<WorkerError>) -> Result<(), WorkerError> {
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[async_trait]
impl PushIdentity for PushIdentityWorker {
    async fn set_identity(&self, user_id: &str, device_token: &str) -> Result<(), WorkerError> {
        const CTX: CallContext = CallContext::new("identity", "set");
        let user_id = user_id.trim();
        let device_token = device_token.trim();
        let mut missing = Vec::new();
        if user_id.is_empty() {
            missing.push("user_id");
        }
        if device_token.is_empty() {
            missing.push("device_token");
        }
        if !missing.is_empty() {
            return Err(self.gateway.invalid(&CTX, &missing));
        }

        let request = ApiRequest::post("/identity")
            .json(&json!({ "userId": user_id, "deviceToken": device_token }))?;
        self.gateway.execute(&CTX, request, |_| Ok(())).await?;

        let mut first_error = None;
        for link in &self.links {
            if let Err(e) = link.set_identity(user_id, device_token).await {
                tracing::warn!("push identity link failed to set: {e}");
                first_error.get_or_insert(e);
            }
        }
        combine(first_error)
    }

    async fn clear_identity(&self, user_id: &str) -> Result<(), WorkerError> {
        const CTX: CallContext = CallContext::new("identity", "clear");
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(self.gateway.invalid(&CTX, &["user_id"]));
        }

        let request = ApiRequest::delete("/identity").query("user", user_id);
        self.gateway.execute(&CTX, request, |_| Ok(())).await?;

        let mut first_error = None;
        for link in &self.links {
            if let Err(e) = link.clear_identity(user_id).await {
                tracing::warn!("push identity link failed to clear: {e}");
                first_error.get_or_insert(e);
            }
        }
        combine(first_error)
    }
}
