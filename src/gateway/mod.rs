//! Gateway layer - HTTP plumbing shared by the workers.
//!
//! - `ApiRequest` - transport-agnostic request builder (the router side)
//! - `Transport` - wire layer, with `HttpTransport` for production and
//!   `MockTransport` for tests
//! - `GatewayClient` - the execute/decode/translate/report pipeline
//! - translation functions mapping backend conditions into `WorkerError`

mod mock;
mod pipeline;
mod request;
mod translate;
mod transport;

pub use mock::MockTransport;
pub use pipeline::{decode_json, GatewayClient};
pub use request::ApiRequest;
pub use translate::{translate_provider, translate_status, translate_store, translate_transport};
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
