//! Identity Provider Port - interface to the managed authentication backend.
//!
//! Implementations connect to the vendor auth SDK and translate between its
//! API and these provider-level types. The auth worker never sees a vendor
//! error: everything funnels through [`ProviderError`] and is translated at
//! the worker boundary into the domain taxonomy.

use async_trait::async_trait;
use thiserror::Error;

/// The provider's view of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl ProviderUser {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A federated (Apple-style) credential: the external provider's identity
/// token plus the nonce the flow was issued with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedCredential {
    pub identity_token: String,
    pub nonce: String,
    pub provider: String,
}

/// Sign-in methods the provider may report for an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSignInMethod {
    Password,
    Federated,
}

/// Closed set of provider-specific failure conditions.
///
/// This is the input side of the error translator; see
/// `gateway::translate_provider` for the mapping into the domain taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("invalid credential")]
    InvalidCredential,
    #[error("email already in use")]
    EmailInUse,
    #[error("account disabled")]
    UserDisabled,
    #[error("wrong password")]
    WrongPassword,
    #[error("too many requests")]
    TooManyRequests,
    #[error("token expired")]
    ExpiredToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("password too weak")]
    WeakPassword,
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("no user found for '{email}'")]
    NoSuchUser { email: String },
    #[error("network failure: {0}")]
    Network(String),
    #[error("{0}")]
    Other(String),
}

/// Port for the managed authentication provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Signs in with email/password credentials.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, ProviderError>;

    /// Signs in with a federated credential, implicitly linking if the
    /// identity is already associated with an existing user.
    async fn sign_in_with_federated(
        &self,
        credential: &FederatedCredential,
    ) -> Result<ProviderUser, ProviderError>;

    /// Creates a new email/password user.
    async fn sign_up(&self, email: &str, password: &str) -> Result<ProviderUser, ProviderError>;

    /// Signs the current user out.
    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Links an email/password credential to the current user.
    async fn link_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, ProviderError>;

    /// Links a federated credential to the current user.
    async fn link_federated(
        &self,
        credential: &FederatedCredential,
    ) -> Result<ProviderUser, ProviderError>;

    /// Returns the sign-in methods registered for an email address.
    async fn fetch_sign_in_methods(
        &self,
        email: &str,
    ) -> Result<Vec<ProviderSignInMethod>, ProviderError>;

    /// Fetches a fresh ID token for the current user.
    async fn id_token(&self) -> Result<String, ProviderError>;

    /// The currently signed-in user, if any.
    async fn current_user(&self) -> Option<ProviderUser>;
}
