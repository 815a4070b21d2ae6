//! Ports - interfaces between the workers and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts the workers
//! implement (the caller-facing domain protocols) and the contracts they
//! consume (the backend collaborators). Vendor SDKs are out of scope; only
//! their port traits live here, with in-memory adapters in `adapters/`.
//!
//! ## Caller-facing protocols
//!
//! One trait per domain: accounts, users, places, events, announcements,
//! chats, systems health, media, CMS, push identity, app events, analytics
//! and auth.
//!
//! ## Backend collaborators
//!
//! - `IdentityProvider` - managed authentication backend
//! - `DocumentStore` - path-addressed document reads
//! - `BlobStore` - uploads with progress plus download URLs
//! - `SecureStore` - opaque blob persistence for session state
//! - `RemoteConfig` - feature flags with a refresh policy
//! - `AnalyticsSink` - vendor analytics SDK

mod accounts;
mod analytics;
mod announcements;
mod app_events;
mod auth;
mod blob_store;
mod chats;
mod cms;
mod document_store;
mod events;
mod fan_out;
mod identity_provider;
mod media;
mod places;
mod push_identity;
mod remote_config;
mod secure_store;
mod systems;
mod users;

pub use accounts::AccountsApi;
pub use analytics::{AnalyticsApi, AnalyticsSink};
pub use announcements::AnnouncementsApi;
pub use app_events::AppEventsApi;
pub use auth::{AuthApi, FederatedCallback, FederatedChallenge, FlowHandle};
pub use blob_store::{BlobMetadata, BlobStore, ProgressCallback, UploadProgress};
pub use chats::ChatsApi;
pub use cms::CmsApi;
pub use document_store::{Direction, DocumentData, DocumentStore, Query, StoreError};
pub use events::EventsApi;
pub use fan_out::FanOut;
pub use identity_provider::{
    FederatedCredential, IdentityProvider, ProviderError, ProviderSignInMethod, ProviderUser,
};
pub use media::MediaApi;
pub use places::PlacesApi;
pub use push_identity::PushIdentity;
pub use remote_config::{RemoteConfig, RemoteConfigError};
pub use secure_store::{SecureStore, SecureStoreError};
pub use systems::SystemsApi;
pub use users::UsersApi;
