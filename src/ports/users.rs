//! Users protocol.

use async_trait::async_trait;

use crate::domain::{User, WorkerError};

/// Port for user operations.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Loads a user by id.
    async fn user(&self, user_id: &str) -> Result<User, WorkerError>;

    /// Creates a user and returns the stored record.
    async fn create_user(&self, user: &User) -> Result<User, WorkerError>;

    /// Partially updates a user and returns the stored record.
    async fn update_user(&self, user: &User) -> Result<User, WorkerError>;

    /// Deletes a user.
    async fn delete_user(&self, user_id: &str) -> Result<(), WorkerError>;
}
