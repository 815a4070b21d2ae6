//! Accounts protocol - the caller-facing surface for account operations.

use async_trait::async_trait;

use crate::domain::{Account, WorkerError};

/// Port for account operations.
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// Loads every account belonging to a user, in backend order.
    async fn accounts_for_user(&self, user_id: &str) -> Result<Vec<Account>, WorkerError>;

    /// Loads a single account by id.
    async fn account(&self, account_id: &str) -> Result<Account, WorkerError>;

    /// Creates an account and returns the stored record.
    async fn create_account(&self, account: &Account) -> Result<Account, WorkerError>;

    /// Partially updates an account and returns the stored record.
    async fn update_account(&self, account: &Account) -> Result<Account, WorkerError>;

    /// Deletes an account.
    async fn delete_account(&self, account_id: &str) -> Result<(), WorkerError>;

    /// Deactivates an account (reversible).
    async fn deactivate_account(&self, account_id: &str) -> Result<Account, WorkerError>;

    /// Reactivates a previously deactivated account.
    async fn reactivate_account(&self, account_id: &str) -> Result<Account, WorkerError>;
}
