//! User record.

use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordMetadata};

/// An application user as served by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl User {
    /// Creates a new user with fresh metadata.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            given_name: None,
            family_name: None,
            metadata: RecordMetadata::now(),
        }
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}
