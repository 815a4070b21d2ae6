//! Analytics ports: the caller-facing protocol and the vendor sink.

use async_trait::async_trait;

/// Port for the vendor analytics SDK.
///
/// Tracking is fire-and-forget and infallible at this boundary; sinks
/// swallow and log their own failures.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &str, params: &[(&str, &str)]);
}

/// Caller-facing analytics protocol.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Records a named event with parameters.
    async fn track_event(&self, name: &str, params: &[(&str, &str)]);

    /// Records a screen view.
    async fn track_screen(&self, screen: &str);
}
