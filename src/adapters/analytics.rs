//! Analytics sinks: one logging, one recording for tests.

use std::sync::Mutex;

use crate::ports::AnalyticsSink;

/// Sink that emits each event as a structured log line. Used in local
/// development where no vendor SDK is wired in.
#[derive(Debug, Default)]
pub struct TracingAnalyticsSink;

impl TracingAnalyticsSink {
    pub fn new() -> Self {
        Self
    }
}

impl AnalyticsSink for TracingAnalyticsSink {
    fn track(&self, event: &str, params: &[(&str, &str)]) {
        tracing::info!(event, ?params, "analytics");
    }
}

/// Sink that records events for assertions.
#[derive(Debug, Default)]
pub struct MemoryAnalyticsSink {
    events: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl MemoryAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.events.lock().expect("event log poisoned").clone()
    }
}

impl AnalyticsSink for MemoryAnalyticsSink {
    fn track(&self, event: &str, params: &[(&str, &str)]) {
        let params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.events
            .lock()
            .expect("event log poisoned")
            .push((event.to_string(), params));
    }
}
