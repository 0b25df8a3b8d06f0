//! HTTP transport
//!
//! Configuration for the `reqwest` client the API clients dispatch through.

mod provider;

pub use provider::{TransportConfig, build_http_client};
