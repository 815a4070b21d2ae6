//! System health records: systems, endpoints, state snapshots and
//! failure-code breakdowns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordMetadata};

/// Reported state of a system or endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SystemState {
    Operational,
    Degraded,
    Down,
    #[default]
    Unknown,
}

impl SystemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemState::Operational => "operational",
            SystemState::Degraded => "degraded",
            SystemState::Down => "down",
            SystemState::Unknown => "unknown",
        }
    }
}

/// A monitored system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: SystemState,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl Record for System {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One endpoint belonging to exactly one system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemEndpoint {
    pub id: String,
    pub system_id: String,
    pub name: String,
    #[serde(default)]
    pub state: SystemState,
    #[serde(default)]
    pub metadata: RecordMetadata,
}

impl Record for SystemEndpoint {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Count of one failure code observed inside a history bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureCode {
    pub code: String,
    pub count: u32,
}

/// A point-in-time snapshot in an endpoint's history.
///
/// Failure codes live in a sub-collection and are attached by the systems
/// worker's fan-out enrichment after the bucket listing returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub state: SystemState,
    #[serde(default)]
    pub failure_codes: Vec<FailureCode>,
}

impl Record for HistoryEntry {
    fn id(&self) -> &str {
        &self.id
    }
}
