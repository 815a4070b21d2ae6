//! Places worker - gateway-backed implementation of `PlacesApi`.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{Place, Record, WorkerError};
use crate::gateway::{decode_json, ApiRequest, GatewayClient};
use crate::ports::PlacesApi;
use crate::status::CallContext;

#[derive(Debug, Deserialize)]
struct PlacesEnvelope {
    places: Vec<Place>,
}

#[derive(Debug, Clone)]
pub struct PlacesWorker {
    gateway: GatewayClient,
}

impl PlacesWorker {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl PlacesApi for PlacesWorker {
    async fn place_by_code(&self, code: &str) -> Result<Place, WorkerError> {
        const CTX: CallContext = CallContext::new("places", "load");
        let code = code.trim();
        if code.is_empty() {
            return Err(self.gateway.invalid(&CTX, &["code"]));
        }

        let request = ApiRequest::get(format!("/places/{code}"));
        self.gateway.execute(&CTX, request, Place::from_slice).await
    }

    async fn places(&self) -> Result<Vec<Place>, WorkerError> {
        const CTX: CallContext = CallContext::new("places", "list");
        let request = ApiRequest::get("/places");
        self.gateway
            .execute(&CTX, request, |body| {
                decode_json::<PlacesEnvelope>(body).map(|e| e.places)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockTransport;
    use crate::workers::testutil::gateway_over;
    use std::sync::Arc;

    #[tokio::test]
    async fn missing_place_translates_to_not_found() {
        let transport = Arc::new(
            MockTransport::new()
                .with_json(404, &serde_json::json!({"error": {"field": "place", "value": "XYZ"}}))
                .with_json(200, &serde_json::json!({})),
        );
        let worker = PlacesWorker::new(gateway_over(&transport));

        let err = worker.place_by_code("XYZ").await.unwrap_err();
        assert_eq!(err, WorkerError::not_found("place", "XYZ"));
    }

    #[tokio::test]
    async fn list_unwraps_envelope() {
        let transport = Arc::new(
            MockTransport::new()
                .with_json(
                    200,
                    &serde_json::json!({"places": [Place::new("p1", "AAA", "North")]}),
                )
                .with_json(200, &serde_json::json!({})),
        );
        let worker = PlacesWorker::new(gateway_over(&transport));

        let places = worker.places().await.unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].code, "AAA");
    }
}
