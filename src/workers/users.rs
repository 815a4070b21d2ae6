//! Users worker - gateway-backed implementation of `UsersApi`.

use async_trait::async_trait;

use crate::domain::{Record, User, WorkerError};
use crate::gateway::{ApiRequest, GatewayClient};
use crate::ports::UsersApi;
use crate::status::CallContext;

#[derive(Debug, Clone)]
pub struct UsersWorker {
    gateway: GatewayClient,
}

impl UsersWorker {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UsersApi for UsersWorker {
    async fn user(&self, user_id: &str) -> Result<User, WorkerError> {
        const CTX: CallContext = CallContext::new("users", "load");
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(self.gateway.invalid(&CTX, &["user_id"]));
        }

        let request = ApiRequest::get(format!("/users/{user_id}"));
        self.gateway.execute(&CTX, request, User::from_slice).await
    }

    async fn create_user(&self, user: &User) -> Result<User, WorkerError> {
        const CTX: CallContext = CallContext::new("users", "create");
        if user.email.trim().is_empty() {
            return Err(self.gateway.invalid(&CTX, &["email"]));
        }

        let request = ApiRequest::post("/users").json(user)?;
        self.gateway.execute(&CTX, request, User::from_slice).await
    }

    async fn update_user(&self, user: &User) -> Result<User, WorkerError> {
        const CTX: CallContext = CallContext::new("users", "update");
        if user.id.trim().is_empty() {
            return Err(self.gateway.invalid(&CTX, &["user_id"]));
        }

        let request = ApiRequest::patch(format!("/users/{}", user.id)).json(user)?;
        self.gateway.execute(&CTX, request, User::from_slice).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), WorkerError> {
        const CTX: CallContext = CallContext::new("users", "delete");
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(self.gateway.invalid(&CTX, &["user_id"]));
        }

        let request = ApiRequest::delete(format!("/users/{user_id}"));
        self.gateway.execute(&CTX, request, |_| Ok(())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockTransport;
    use crate::workers::testutil::gateway_over;
    use std::sync::Arc;

    #[tokio::test]
    async fn load_decodes_single_record_endpoint() {
        let user = User::new("u1", "ada@example.com");
        let transport = Arc::new(
            MockTransport::new()
                .with_json(200, &user)
                .with_json(200, &serde_json::json!({})),
        );
        let worker = UsersWorker::new(gateway_over(&transport));

        let loaded = worker.user("u1").await.unwrap();

        assert_eq!(loaded, user);
        assert_eq!(transport.requests()[0].path, "/users/u1");
    }

    #[tokio::test]
    async fn unauthorized_status_translates() {
        let transport = Arc::new(
            MockTransport::new()
                .with_status(401, b"")
                .with_json(200, &serde_json::json!({})),
        );
        let worker = UsersWorker::new(gateway_over(&transport));

        let err = worker.delete_user("u1").await.unwrap_err();
        assert_eq!(err, WorkerError::Unauthorized);
    }

    #[tokio::test]
    async fn create_requires_email() {
        let transport = Arc::new(MockTransport::new());
        let worker = UsersWorker::new(gateway_over(&transport));

        let mut user = User::new("u1", "");
        user.email = String::new();
        let err = worker.create_user(&user).await.unwrap_err();

        assert_eq!(err, WorkerError::invalid_parameters(["email"]));
    }
}
