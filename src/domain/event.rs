//! Event record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordMetadata};

/// A scheduled event attached to a place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub place_code: String,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        place_code: impl Into<String>,
        title: impl Into<String>,
        starts_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            place_code: place_code.into(),
            title: title.into(),
            starts_at,
            ends_at: None,
            metadata: RecordMetadata::now(),
        }
    }
}

impl Record for Event {
    fn id(&self) -> &str {
        &self.id
    }
}
