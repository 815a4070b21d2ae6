//! Analytics worker - thin fire-and-forget pass-through to the vendor sink.
//!
//! No health reporting here: analytics is itself telemetry, and reporting on
//! it would double every event.

use std::sync::Arc;

use async_trait::async_trait;

use crate::ports::{AnalyticsApi, AnalyticsSink};

pub struct AnalyticsWorker {
    sink: Arc<dyn AnalyticsSink>,
}

impl AnalyticsWorker {
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl AnalyticsApi for AnalyticsWorker {
    async fn track_event(&self, name: &str, params: &[(&str, &str)]) {
        if name.trim().is_empty() {
            tracing::warn!("dropping analytics event with empty name");
            return;
        }
        self.sink.track(name, params);
    }

    async fn track_screen(&self, screen: &str) {
        self.track_event("screen_view", &[("screen", screen)]).await;
    }
}
