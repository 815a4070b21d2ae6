//! Auth worker - the one genuinely stateful worker.
//!
//! Owns the session record exclusively: loaded from the secure store at
//! startup, cleared at the top of every sign-in attempt, mutated only on
//! provider success, and persisted on every mutation. Federated sign-in is
//! split into begin/complete halves correlated by a [`FlowHandle`], so two
//! attempts in flight at once cannot clobber each other's nonce.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{AccessData, SignInMethod, WorkerError};
use crate::gateway::translate_provider;
use crate::ports::{
    AuthApi, FederatedCallback, FederatedChallenge, FederatedCredential, FlowHandle,
    IdentityProvider, ProviderSignInMethod, ProviderUser, SecureStore,
};
use crate::status::{CallContext, ReportOutcome, StatusReporter};

/// Secure-store key the serialized session record lives under.
pub const ACCESS_DATA_KEY: &str = "waypoint.access_data";

const FEDERATED_PROVIDER: &str = "apple.com";

/// State held between the begin and complete halves of one federated
/// sign-in attempt.
struct PendingFlow {
    nonce: String,
    username: String,
    password: Secret<String>,
}

pub struct AuthWorker {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn SecureStore>,
    reporter: StatusReporter,
    access: Mutex<AccessData>,
    flows: std::sync::Mutex<HashMap<FlowHandle, PendingFlow>>,
}

impl AuthWorker {
    /// Creates the worker and restores any persisted session.
    ///
    /// A missing or undecodable stored record starts the worker signed out
    /// rather than failing construction.
    pub async fn load(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn SecureStore>,
        reporter: StatusReporter,
    ) -> Self {
        let access = match store.read(ACCESS_DATA_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<AccessData>(&bytes) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!("stored session undecodable, starting signed out: {e}");
                    AccessData::default()
                }
            },
            Ok(None) => AccessData::default(),
            Err(e) => {
                tracing::warn!("secure store unreadable, starting signed out: {e}");
                AccessData::default()
            }
        };
        Self {
            provider,
            store,
            reporter,
            access: Mutex::new(access),
            flows: std::sync::Mutex::new(HashMap::new()),
        }
    }

    async fn persist(&self, data: &AccessData) -> Result<(), WorkerError> {
        let bytes = serde_json::to_vec(data)
            .map_err(|e| WorkerError::failure(format!("session serialization failed: {e}")))?;
        self.store
            .write(ACCESS_DATA_KEY, &bytes)
            .await
            .map_err(|e| WorkerError::failure(format!("session persistence failed: {e}")))
    }

    /// Resets the in-memory session and persists the signed-out record.
    async fn reset(&self) -> Result<(), WorkerError> {
        let mut access = self.access.lock().await;
        access.clear();
        self.persist(&access).await
    }

    /// Fetches a fresh ID token and installs the authenticated session.
    async fn install_session(
        &self,
        user: ProviderUser,
        method: SignInMethod,
        email: Option<String>,
    ) -> Result<AccessData, WorkerError> {
        let token = self.provider.id_token().await.map_err(translate_provider)?;
        let (given_name, family_name) = split_display_name(user.display_name.as_deref());

        let mut access = self.access.lock().await;
        *access = AccessData {
            access_token: token,
            provider_user_id: user.uid,
            method,
            given_name,
            family_name,
            email: email.or(user.email),
        };
        self.persist(&access).await?;
        Ok(access.clone())
    }

    fn fail(&self, ctx: &CallContext, err: WorkerError) -> WorkerError {
        self.reporter.observe::<()>(ctx, &Err(err.clone()));
        err
    }
}

/// Best-effort split of a provider display name into given/family parts.
fn split_display_name(display_name: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(name) = display_name else {
        return (None, None);
    };
    let mut parts = name.split_whitespace();
    let given = parts.next().map(str::to_string);
    let family = parts.last().map(str::to_string);
    (given, family)
}

#[async_trait]
impl AuthApi for AuthWorker {
    async fn sign_in(&self, username: &str, password: &str) -> Result<AccessData, WorkerError> {
        const CTX: CallContext = CallContext::new("auth", "signIn");
        let username = username.trim();

        let mut missing = Vec::new();
        if username.is_empty() {
            missing.push("username");
        }
        if password.is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            let err = WorkerError::invalid_parameters(missing);
            self.reporter
                .report_failure(&CTX, ReportOutcome::Unhandled, None, err.to_string());
            return Err(err);
        }

        self.reset().await.map_err(|e| self.fail(&CTX, e))?;

        let user = self
            .provider
            .sign_in_with_password(username, password)
            .await
            .map_err(|e| self.fail(&CTX, translate_provider(e)))?;

        let result = self.install_session(user, SignInMethod::Password, None).await;
        self.reporter.observe(&CTX, &result);
        result
    }

    async fn begin_federated_sign_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<FederatedChallenge, WorkerError> {
        let handle = FlowHandle::new();
        let nonce = Uuid::new_v4().simple().to_string();
        let flow = PendingFlow {
            nonce: nonce.clone(),
            username: username.trim().to_string(),
            password: Secret::new(password.to_string()),
        };
        self.flows
            .lock()
            .expect("flow map poisoned")
            .insert(handle, flow);
        Ok(FederatedChallenge { handle, nonce })
    }

    async fn complete_federated_sign_in(
        &self,
        handle: FlowHandle,
        callback: FederatedCallback,
    ) -> Result<AccessData, WorkerError> {
        const CTX: CallContext = CallContext::new("auth", "federatedSignIn");

        let flow = self.flows.lock().expect("flow map poisoned").remove(&handle);
        let Some(flow) = flow else {
            let err = WorkerError::invalid_parameters(["nonce"]);
            self.reporter
                .report_failure(&CTX, ReportOutcome::Unhandled, None, err.to_string());
            return Err(err);
        };

        let (identity_token, email) = match callback {
            FederatedCallback::Failed { reason } => {
                return Err(self.fail(&CTX, WorkerError::failure(reason)));
            }
            FederatedCallback::Authorized {
                identity_token,
                email,
            } => (identity_token, email),
        };

        let Some(token_bytes) = identity_token else {
            return Err(self.fail(&CTX, WorkerError::not_found("identityToken", handle.to_string())));
        };
        let identity_token = String::from_utf8(token_bytes)
            .map_err(|_| self.fail(&CTX, WorkerError::invalid_parameters(["identity_token"])))?;

        self.reset().await.map_err(|e| self.fail(&CTX, e))?;

        let credential = FederatedCredential {
            identity_token,
            nonce: flow.nonce,
            provider: FEDERATED_PROVIDER.to_string(),
        };

        // When the email already has a password-only account, sign in with
        // it first and attach the federated credential, so the user keeps a
        // single account instead of forking a second one.
        let user = match &email {
            Some(email_addr) => {
                let methods = self
                    .provider
                    .fetch_sign_in_methods(email_addr)
                    .await
                    .map_err(|e| self.fail(&CTX, translate_provider(e)))?;
                let password_only = methods.contains(&ProviderSignInMethod::Password)
                    && !methods.contains(&ProviderSignInMethod::Federated);
                if password_only {
                    self.provider
                        .sign_in_with_password(email_addr, flow.password.expose_secret())
                        .await
                        .map_err(|e| self.fail(&CTX, translate_provider(e)))?;
                    self.provider
                        .link_federated(&credential)
                        .await
                        .map_err(|e| self.fail(&CTX, translate_provider(e)))?
                } else {
                    self.provider
                        .sign_in_with_federated(&credential)
                        .await
                        .map_err(|e| self.fail(&CTX, translate_provider(e)))?
                }
            }
            None => self
                .provider
                .sign_in_with_federated(&credential)
                .await
                .map_err(|e| self.fail(&CTX, translate_provider(e)))?,
        };

        let result = self
            .install_session(user, SignInMethod::Federated, email)
            .await;
        self.reporter.observe(&CTX, &result);
        result
    }

    async fn link_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccessData, WorkerError> {
        const CTX: CallContext = CallContext::new("auth", "link");
        let email = email.trim();

        let mut missing = Vec::new();
        if email.is_empty() {
            missing.push("email");
        }
        if password.is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            let err = WorkerError::invalid_parameters(missing);
            self.reporter
                .report_failure(&CTX, ReportOutcome::Unhandled, None, err.to_string());
            return Err(err);
        }

        if !self.access.lock().await.is_signed_in() {
            return Err(self.fail(&CTX, WorkerError::Unauthorized));
        }

        let user = self
            .provider
            .link_password(email, password)
            .await
            .map_err(|e| self.fail(&CTX, translate_provider(e)))?;

        // Linking does not change how the session was established.
        let result = async {
            let mut access = self.access.lock().await;
            access.email = Some(email.to_string());
            access.provider_user_id = user.uid;
            self.persist(&access).await?;
            Ok(access.clone())
        }
        .await;
        self.reporter.observe(&CTX, &result);
        result
    }

    async fn sign_out(&self) -> Result<(), WorkerError> {
        const CTX: CallContext = CallContext::new("auth", "signOut");

        if !self.access.lock().await.is_signed_in() {
            self.reporter.report_success(&CTX);
            return Ok(());
        }

        // A failed provider sign-out leaves local state in place so the
        // caller can retry; clearing here would strand a live provider
        // session with no local record of it.
        self.provider
            .sign_out()
            .await
            .map_err(|e| self.fail(&CTX, translate_provider(e)))?;

        let result = self.reset().await;
        self.reporter.observe(&CTX, &result);
        result
    }

    async fn check_auth(&self) -> Result<AccessData, WorkerError> {
        const CTX: CallContext = CallContext::new("auth", "checkAuth");

        // No current provider user means the session is definitively gone;
        // clear the persisted record too.
        let Some(user) = self.provider.current_user().await else {
            let _ = self.reset().await;
            return Err(self.fail(&CTX, WorkerError::Unauthorized));
        };

        // A token-fetch failure may be transient (network, provider
        // hiccup); surface not-authenticated but keep the local session so
        // a retry can recover it, mirroring the sign-out policy.
        let token = match self.provider.id_token().await {
            Ok(token) => token,
            Err(e) => return Err(self.fail(&CTX, translate_provider(e))),
        };

        let result = async {
            let mut access = self.access.lock().await;
            access.access_token = token;
            access.provider_user_id = user.uid;
            if access.email.is_none() {
                access.email = user.email;
            }
            self.persist(&access).await?;
            Ok(access.clone())
        }
        .await;
        self.reporter.observe(&CTX, &result);
        result
    }

    async fn access_data(&self) -> AccessData {
        self.access.lock().await.clone()
    }
}
