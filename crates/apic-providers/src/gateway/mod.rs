//! API gateway client
//!
//! An API-key authenticated [`ApiClient`](crate::ApiClient) that validates
//! responses into parsed data or [`Error::GatewayResponse`](crate::Error).
//! Failed responses are reported to an injected [`GatewayErrorSink`].

mod client;
mod sink;

pub use client::GatewayClient;
pub use sink::{GatewayErrorSink, GatewayFailure, NullErrorSink, TracingErrorSink};
