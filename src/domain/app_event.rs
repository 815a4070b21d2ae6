//! App event records (product analytics read model).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Record;

/// An aggregated application event stored in the document store.
///
/// Details live in a sub-collection and are attached by the app-events
/// worker's fan-out enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEvent {
    pub id: String,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub details: Vec<AppEventDetail>,
}

/// One detail row attached to an app event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEventDetail {
    pub id: String,
    pub label: String,
    pub value: String,
}

impl Record for AppEvent {
    fn id(&self) -> &str {
        &self.id
    }
}
