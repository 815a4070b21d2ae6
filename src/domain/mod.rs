//! Domain layer - backend-agnostic records and the unified error taxonomy.
//!
//! Nothing in this module knows about the gateway, the document store or any
//! vendor SDK. Workers decode backend payloads into these types and translate
//! backend failures into [`WorkerError`] before anything reaches a caller.

mod access_data;
mod account;
mod announcement;
mod app_event;
mod chat;
mod document;
mod errors;
mod event;
mod media;
mod metadata;
mod place;
mod record;
mod system;
mod user;

pub use access_data::{AccessData, SignInMethod};
pub use account::Account;
pub use announcement::Announcement;
pub use app_event::{AppEvent, AppEventDetail};
pub use chat::{Chat, ChatMessage};
pub use document::{Document, Faq};
pub use errors::WorkerError;
pub use event::Event;
pub use media::Media;
pub use metadata::RecordMetadata;
pub use place::Place;
pub use record::Record;
pub use system::{FailureCode, HistoryEntry, System, SystemEndpoint, SystemState};
pub use user::User;
