//! Chat and chat message records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordMetadata};

/// A conversation between users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub user_ids: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl Record for Chat {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A single message inside a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub chat_id: String,
    pub sender_id: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl ChatMessage {
    pub fn new(
        id: impl Into<String>,
        chat_id: impl Into<String>,
        sender_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            chat_id: chat_id.into(),
            sender_id: sender_id.into(),
            body: body.into(),
            sent_at: Utc::now(),
            metadata: RecordMetadata::now(),
        }
    }
}

impl Record for ChatMessage {
    fn id(&self) -> &str {
        &self.id
    }
}
