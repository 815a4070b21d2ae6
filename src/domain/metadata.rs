//! Shared record metadata (creation/update timestamps).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp block carried by every domain record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// When the record was first created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl RecordMetadata {
    /// Creates metadata with both timestamps set to now.
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy with `updated_at` bumped to now.
    pub fn touched(self) -> Self {
        Self {
            updated_at: Utc::now(),
            ..self
        }
    }
}

impl Default for RecordMetadata {
    fn default() -> Self {
        Self::now()
    }
}
