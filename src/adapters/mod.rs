//! Adapters - implementations of the backend collaborator ports.
//!
//! The production app wires vendor SDK adapters in at the edge; this crate
//! ships in-memory and file-backed implementations used by tests and local
//! development:
//! - `MockIdentityProvider` - scriptable identity provider
//! - `MemoryDocumentStore` - path-addressed documents with query support
//! - `MemoryBlobStore` - blob uploads with progress reporting
//! - `MemorySecureStore` / `FileSecureStore` - secure key-value persistence
//! - `StaticRemoteConfig` - fixed feature flags with refresh throttling
//! - `TracingAnalyticsSink` / `MemoryAnalyticsSink` - analytics sinks

mod analytics;
mod file_secure;
mod memory_blob;
mod memory_document;
mod memory_secure;
mod mock_identity;
mod static_config;

pub use analytics::{MemoryAnalyticsSink, TracingAnalyticsSink};
pub use file_secure::FileSecureStore;
pub use memory_blob::MemoryBlobStore;
pub use memory_document::MemoryDocumentStore;
pub use memory_secure::MemorySecureStore;
pub use mock_identity::MockIdentityProvider;
pub use static_config::StaticRemoteConfig;
