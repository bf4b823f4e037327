//! HTTP transport: URL joining, authentication headers and body encoding.

mod http;

pub use http::{ApiRequest, HttpTransport, RequestBody, TransportError};
