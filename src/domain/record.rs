//! The `Record` trait: what every backend-agnostic domain record supports.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::errors::WorkerError;

/// A backend-agnostic structured record with a stable identifier.
///
/// Every record is constructible three ways: from another instance of the
/// same type (`Clone`), from a loosely-typed key/value mapping as returned
/// by the document store ([`Record::from_map`]), and from wire bytes
/// ([`Record::from_slice`]). The identifier is immutable after creation
/// except through explicit update operations.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The record's stable identifier.
    fn id(&self) -> &str;

    /// Decodes a record from a loosely-typed document-store mapping.
    fn from_map(map: Map<String, Value>) -> Result<Self, WorkerError> {
        serde_json::from_value(Value::Object(map))
            .map_err(|e| WorkerError::failure(format!("record decode failed: {e}")))
    }

    /// Decodes a record from wire bytes (JSON).
    fn from_slice(bytes: &[u8]) -> Result<Self, WorkerError> {
        serde_json::from_slice(bytes)
            .map_err(|e| WorkerError::failure(format!("record decode failed: {e}")))
    }

    /// Encodes the record back into a loosely-typed mapping.
    fn to_map(&self) -> Result<Map<String, Value>, WorkerError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(WorkerError::failure(format!(
                "record serialized to non-object value: {other}"
            ))),
            Err(e) => Err(WorkerError::failure(format!("record encode failed: {e}"))),
        }
    }
}
