//! Events worker - gateway-backed implementation of `EventsApi`.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{Event, Record, WorkerError};
use crate::gateway::{decode_json, ApiRequest, GatewayClient};
use crate::ports::EventsApi;
use crate::status::CallContext;

#[derive(Debug, Deserialize)]
struct EventsEnvelope {
    events: Vec<Event>,
}

#[derive(Debug, Clone)]
pub struct EventsWorker {
    gateway: GatewayClient,
}

impl EventsWorker {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl EventsApi for EventsWorker {
    async fn events_for_place(&self, place_code: &str) -> Result<Vec<Event>, WorkerError> {
        const CTX: CallContext = CallContext::new("events", "list");
        let place_code = place_code.trim();
        if place_code.is_empty() {
            return Err(self.gateway.invalid(&CTX, &["place_code"]));
        }

        let request = ApiRequest::get(format!("/places/{place_code}/events"));
        self.gateway
            .execute(&CTX, request, |body| {
                decode_json::<EventsEnvelope>(body).map(|e| e.events)
            })
            .await
    }

    async fn create_event(&self, event: &Event) -> Result<Event, WorkerError> {
        const CTX: CallContext = CallContext::new("events", "create");
        let mut missing = Vec::new();
        if event.place_code.trim().is_empty() {
            missing.push("place_code");
        }
        if event.title.trim().is_empty() {
            missing.push("title");
        }
        if !missing.is_empty() {
            return Err(self.gateway.invalid(&CTX, &missing));
        }

        let request = ApiRequest::post("/events").json(event)?;
        self.gateway.execute(&CTX, request, Event::from_slice).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockTransport;
    use crate::workers::testutil::gateway_over;
    use chrono::Utc;
    use std::sync::Arc;

    #[tokio::test]
    async fn list_builds_place_scoped_path() {
        let event = Event::new("e1", "AAA", "Open day", Utc::now());
        let transport = Arc::new(
            MockTransport::new()
                .with_json(200, &serde_json::json!({"events": [event]}))
                .with_json(200, &serde_json::json!({})),
        );
        let worker = EventsWorker::new(gateway_over(&transport));

        let events = worker.events_for_place("AAA").await.unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(transport.requests()[0].path, "/places/AAA/events");
    }

    #[tokio::test]
    async fn create_requires_place_and_title() {
        let transport = Arc::new(MockTransport::new());
        let worker = EventsWorker::new(gateway_over(&transport));

        let event = Event::new("e1", " ", "", Utc::now());
        let err = worker.create_event(&event).await.unwrap_err();

        assert_eq!(err, WorkerError::invalid_parameters(["place_code", "title"]));
    }

    #[tokio::test]
    async fn create_blames_only_the_empty_title() {
        let transport = Arc::new(MockTransport::new());
        let worker = EventsWorker::new(gateway_over(&transport));

        let event = Event::new("e1", "AAA", "  ", Utc::now());
        let err = worker.create_event(&event).await.unwrap_err();

        assert_eq!(err, WorkerError::invalid_parameters(["title"]));
    }
}
