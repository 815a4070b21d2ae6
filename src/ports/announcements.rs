//! Announcements protocol.

use async_trait::async_trait;

use crate::domain::{Announcement, WorkerError};

/// Port for announcement reads.
#[async_trait]
pub trait AnnouncementsApi: Send + Sync {
    /// Loads the most recent announcements, newest first.
    async fn latest_announcements(&self, limit: u32) -> Result<Vec<Announcement>, WorkerError>;
}
