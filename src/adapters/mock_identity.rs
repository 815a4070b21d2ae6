//! Scriptable identity provider for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{
    FederatedCredential, IdentityProvider, ProviderError, ProviderSignInMethod, ProviderUser,
};

#[derive(Default)]
struct State {
    /// email -> (password, uid)
    password_users: HashMap<String, (String, String)>,
    /// uid returned for federated sign-ins
    federated_uid: Option<String>,
    sign_in_methods: HashMap<String, Vec<ProviderSignInMethod>>,
    current: Option<ProviderUser>,
    fail_sign_out: bool,
    fail_id_tokens: bool,
    token_counter: u64,
    linked_credentials: Vec<String>,
}

/// Behavioral [`IdentityProvider`] double: holds a user table, tracks the
/// signed-in user, and mints sequential ID tokens.
#[derive(Default)]
pub struct MockIdentityProvider {
    state: Mutex<State>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_password_user(
        self,
        email: impl Into<String>,
        password: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        self.state
            .lock()
            .expect("provider state poisoned")
            .password_users
            .insert(email.into(), (password.into(), uid.into()));
        self
    }

    pub fn with_federated_user(self, uid: impl Into<String>) -> Self {
        self.state
            .lock()
            .expect("provider state poisoned")
            .federated_uid = Some(uid.into());
        self
    }

    pub fn with_sign_in_methods(
        self,
        email: impl Into<String>,
        methods: Vec<ProviderSignInMethod>,
    ) -> Self {
        self.state
            .lock()
            .expect("provider state poisoned")
            .sign_in_methods
            .insert(email.into(), methods);
        self
    }

    pub fn with_sign_out_failure(self) -> Self {
        self.state
            .lock()
            .expect("provider state poisoned")
            .fail_sign_out = true;
        self
    }

    /// Makes every subsequent `id_token` call fail as a network error,
    /// simulating a transient provider outage mid-session.
    pub fn fail_id_tokens(&self) {
        self.state
            .lock()
            .expect("provider state poisoned")
            .fail_id_tokens = true;
    }

    /// Providers the mock has had federated credentials linked for.
    pub fn linked_credentials(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("provider state poisoned")
            .linked_credentials
            .clone()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, ProviderError> {
        let mut state = self.state.lock().expect("provider state poisoned");
        let Some((expected, uid)) = state.password_users.get(email) else {
            return Err(ProviderError::NoSuchUser {
                email: email.to_string(),
            });
        };
        if expected != password {
            return Err(ProviderError::WrongPassword);
        }
        let user = ProviderUser::new(uid.clone()).with_email(email);
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn sign_in_with_federated(
        &self,
        credential: &FederatedCredential,
    ) -> Result<ProviderUser, ProviderError> {
        if credential.identity_token.is_empty() || credential.nonce.is_empty() {
            return Err(ProviderError::InvalidToken);
        }
        let mut state = self.state.lock().expect("provider state poisoned");
        let uid = state
            .federated_uid
            .clone()
            .unwrap_or_else(|| "federated-user".to_string());
        let user = ProviderUser::new(uid);
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<ProviderUser, ProviderError> {
        let mut state = self.state.lock().expect("provider state poisoned");
        if state.password_users.contains_key(email) {
            return Err(ProviderError::EmailInUse);
        }
        let uid = format!("uid-{}", state.password_users.len() + 1);
        state
            .password_users
            .insert(email.to_string(), (password.to_string(), uid.clone()));
        let user = ProviderUser::new(uid).with_email(email);
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let mut state = self.state.lock().expect("provider state poisoned");
        if state.fail_sign_out {
            return Err(ProviderError::Other("sign-out unavailable".to_string()));
        }
        state.current = None;
        Ok(())
    }

    async fn link_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, ProviderError> {
        let mut state = self.state.lock().expect("provider state poisoned");
        let Some(mut user) = state.current.clone() else {
            return Err(ProviderError::InvalidCredential);
        };
        if state.password_users.contains_key(email) {
            return Err(ProviderError::EmailInUse);
        }
        state
            .password_users
            .insert(email.to_string(), (password.to_string(), user.uid.clone()));
        user.email = Some(email.to_string());
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn link_federated(
        &self,
        credential: &FederatedCredential,
    ) -> Result<ProviderUser, ProviderError> {
        if credential.identity_token.is_empty() {
            return Err(ProviderError::InvalidToken);
        }
        let mut state = self.state.lock().expect("provider state poisoned");
        let Some(user) = state.current.clone() else {
            return Err(ProviderError::InvalidCredential);
        };
        state.linked_credentials.push(credential.provider.clone());
        Ok(user)
    }

    async fn fetch_sign_in_methods(
        &self,
        email: &str,
    ) -> Result<Vec<ProviderSignInMethod>, ProviderError> {
        let state = self.state.lock().expect("provider state poisoned");
        Ok(state.sign_in_methods.get(email).cloned().unwrap_or_default())
    }

    async fn id_token(&self) -> Result<String, ProviderError> {
        let mut state = self.state.lock().expect("provider state poisoned");
        if state.fail_id_tokens {
            return Err(ProviderError::Network("token endpoint unreachable".into()));
        }
        if state.current.is_none() {
            return Err(ProviderError::ExpiredToken);
        }
        state.token_counter += 1;
        Ok(format!("token-{}", state.token_counter))
    }

    async fn current_user(&self) -> Option<ProviderUser> {
        self.state
            .lock()
            .expect("provider state poisoned")
            .current
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn password_sign_in_tracks_the_current_user() {
        let provider = MockIdentityProvider::new().with_password_user("a@x.com", "pw", "uid-1");

        let user = provider.sign_in_with_password("a@x.com", "pw").await.unwrap();
        assert_eq!(user.uid, "uid-1");
        assert_eq!(provider.current_user().await, Some(user));

        provider.sign_out().await.unwrap();
        assert_eq!(provider.current_user().await, None);
    }

    #[tokio::test]
    async fn id_tokens_are_sequential_and_require_a_session() {
        let provider = MockIdentityProvider::new().with_password_user("a@x.com", "pw", "uid-1");

        assert_eq!(provider.id_token().await, Err(ProviderError::ExpiredToken));

        provider.sign_in_with_password("a@x.com", "pw").await.unwrap();
        assert_eq!(provider.id_token().await.unwrap(), "token-1");
        assert_eq!(provider.id_token().await.unwrap(), "token-2");
    }

    #[tokio::test]
    async fn link_federated_records_the_provider() {
        let provider = MockIdentityProvider::new().with_password_user("a@x.com", "pw", "uid-1");
        provider.sign_in_with_password("a@x.com", "pw").await.unwrap();

        let credential = FederatedCredential {
            identity_token: "tok".to_string(),
            nonce: "nonce".to_string(),
            provider: "apple.com".to_string(),
        };
        provider.link_federated(&credential).await.unwrap();

        assert_eq!(provider.linked_credentials(), vec!["apple.com"]);
    }
}
