//! Announcement record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordMetadata};

/// A broadcast announcement, read-heavy and served from the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl Record for Announcement {
    fn id(&self) -> &str {
        &self.id
    }
}
