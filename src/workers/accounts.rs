//! Accounts worker - gateway-backed implementation of `AccountsApi`.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{Account, Record, WorkerError};
use crate::gateway::{decode_json, ApiRequest, GatewayClient};
use crate::ports::AccountsApi;
use crate::status::CallContext;

/// List endpoints wrap results in a named collection field.
#[derive(Debug, Deserialize)]
struct AccountsEnvelope {
    accounts: Vec<Account>,
}

/// Gateway-backed accounts worker.
#[derive(Debug, Clone)]
pub struct AccountsWorker {
    gateway: GatewayClient,
}

impl AccountsWorker {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl AccountsApi for AccountsWorker {
    async fn accounts_for_user(&self, user_id: &str) -> Result<Vec<Account>, WorkerError> {
        const CTX: CallContext = CallContext::new("accounts", "list");
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(self.gateway.invalid(&CTX, &["user_id"]));
        }

        let request = ApiRequest::get(format!("/users/{user_id}/accounts"));
        self.gateway
            .execute(&CTX, request, |body| {
                decode_json::<AccountsEnvelope>(body).map(|e| e.accounts)
            })
            .await
    }

    async fn account(&self, account_id: &str) -> Result<Account, WorkerError> {
        const CTX: CallContext = CallContext::new("accounts", "load");
        let account_id = account_id.trim();
        if account_id.is_empty() {
            return Err(self.gateway.invalid(&CTX, &["account_id"]));
        }

        let request = ApiRequest::get(format!("/accounts/{account_id}"));
        self.gateway.execute(&CTX, request, Account::from_slice).await
    }

    async fn create_account(&self, account: &Account) -> Result<Account, WorkerError> {
        const CTX: CallContext = CallContext::new("accounts", "create");
        let mut missing = Vec::new();
        if account.user_id.trim().is_empty() {
            missing.push("user_id");
        }
        if account.name.trim().is_empty() {
            missing.push("name");
        }
        if !missing.is_empty() {
            return Err(self.gateway.invalid(&CTX, &missing));
        }

        let request = ApiRequest::post("/accounts").json(account)?;
        self.gateway.execute(&CTX, request, Account::from_slice).await
    }

    async fn update_account(&self, account: &Account) -> Result<Account, WorkerError> {
        const CTX: CallContext = CallContext::new("accounts", "update");
        if account.id.trim().is_empty() {
            return Err(self.gateway.invalid(&CTX, &["account_id"]));
        }

        let request = ApiRequest::patch(format!("/accounts/{}", account.id)).json(account)?;
        self.gateway.execute(&CTX, request, Account::from_slice).await
    }

    async fn delete_account(&self, account_id: &str) -> Result<(), WorkerError> {
        const CTX: CallContext = CallContext::new("accounts", "delete");
        let account_id = account_id.trim();
        if account_id.is_empty() {
            return Err(self.gateway.invalid(&CTX, &["account_id"]));
        }

        let request = ApiRequest::delete(format!("/accounts/{account_id}"));
        self.gateway.execute(&CTX, request, |_| Ok(())).await
    }

    async fn deactivate_account(&self, account_id: &str) -> Result<Account, WorkerError> {
        const CTX: CallContext = CallContext::new("accounts", "deactivate");
        let account_id = account_id.trim();
        if account_id.is_empty() {
            return Err(self.gateway.invalid(&CTX, &["account_id"]));
        }

        let request = ApiRequest::post(format!("/accounts/{account_id}/deactivate"));
        // A generic failure here means the account was left active.
        self.gateway
            .execute_with_remap(&CTX, request, Account::from_slice, |err| match err {
                WorkerError::Failure { .. } => {
                    WorkerError::failure(format!("account {account_id} not deactivated"))
                }
                other => other,
            })
            .await
    }

    async fn reactivate_account(&self, account_id: &str) -> Result<Account, WorkerError> {
        const CTX: CallContext = CallContext::new("accounts", "reactivate");
        let account_id = account_id.trim();
        if account_id.is_empty() {
            return Err(self.gateway.invalid(&CTX, &["account_id"]));
        }

        let request = ApiRequest::post(format!("/accounts/{account_id}/reactivate"));
        self.gateway
            .execute_with_remap(&CTX, request, Account::from_slice, |err| match err {
                WorkerError::Failure { .. } => {
                    WorkerError::failure(format!("account {account_id} not reactivated"))
                }
                other => other,
            })
            .await
    }
}
