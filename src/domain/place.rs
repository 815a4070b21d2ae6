//! Place record.

use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordMetadata};

/// A named place, addressed by a short human-facing code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    /// Short code used in gateway paths, e.g. `GET /places/{code}`.
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl Place {
    pub fn new(id: impl Into<String>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            latitude: None,
            longitude: None,
            metadata: RecordMetadata::now(),
        }
    }
}

impl Record for Place {
    fn id(&self) -> &str {
        &self.id
    }
}
