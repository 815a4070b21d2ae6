//! CMS records: documents and FAQs.

use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordMetadata};

/// A CMS document (terms, privacy policy, onboarding copy and similar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl Record for Document {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A single FAQ entry, ordered by `position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl Record for Faq {
    fn id(&self) -> &str {
        &self.id
    }
}
