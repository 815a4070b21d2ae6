//! Account record.

use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordMetadata};

/// A user-owned account as served by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// Whether the account is currently active (deactivation is reversible).
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

fn default_active() -> bool {
    true
}

impl Account {
    /// Creates a new active account with fresh metadata.
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name: name.into(),
            active: true,
            metadata: RecordMetadata::now(),
        }
    }
}

impl Record for Account {
    fn id(&self) -> &str {
        &self.id
    }
}
