//! Gateway request builder (the "router" side of each worker).
//!
//! Workers turn typed domain calls into an [`ApiRequest`]: method, path
//! built from entity ids, query parameters, and a JSON body for mutating
//! operations. The transport adds wire-level concerns (base URL, device
//! identifier, auth headers).

use reqwest::Method;
use serde::Serialize;

use crate::domain::WorkerError;

/// A fully-built gateway request, still transport-agnostic.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the gateway base URL, e.g. `/users/u1/accounts`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attaches a JSON-encoded body.
    ///
    /// Encoding failure is a data error surfaced before the pipeline is
    /// entered.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, WorkerError> {
        let value = serde_json::to_value(body)
            .map_err(|e| WorkerError::failure(format!("request encode failed: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_method_path_and_query() {
        let request = ApiRequest::get("/users/u1/accounts").query("active", "true");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/users/u1/accounts");
        assert_eq!(request.query, vec![("active".to_string(), "true".to_string())]);
        assert!(request.body.is_none());
    }

    #[test]
    fn json_attaches_encoded_body() {
        let request = ApiRequest::post("/accounts")
            .json(&serde_json::json!({"name": "Checking"}))
            .unwrap();
        assert_eq!(request.body.unwrap()["name"], "Checking");
    }
}
