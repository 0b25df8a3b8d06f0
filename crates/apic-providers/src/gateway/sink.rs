//! Gateway failure sinks

use std::collections::BTreeMap;

use tracing::error;

/// Record of a failed gateway response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayFailure {
    /// Effective request URI
    pub uri: String,
    /// Transport status code
    pub status: u16,
    /// Message from the response body, or empty
    pub error: String,
    /// Response headers
    pub headers: BTreeMap<String, Vec<String>>,
}

/// Receives a record of every failed gateway response
///
/// Recording is fire-and-forget: implementations must not fail or block for long.
pub trait GatewayErrorSink: Send + Sync {
    /// Record a failure
    fn record(&self, failure: &GatewayFailure);
}

/// Emits failures as structured `tracing` error events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl GatewayErrorSink for TracingErrorSink {
    fn record(&self, failure: &GatewayFailure) {
        error!(
            uri = %failure.uri,
            status = failure.status,
            error = %failure.error,
            headers = ?failure.headers,
            "API Gateway Error"
        );
    }
}

/// Discards failures
#[derive(Debug, Clone, Copy, Default)]
pub struct NullErrorSink;

impl GatewayErrorSink for NullErrorSink {
    fn record(&self, _failure: &GatewayFailure) {}
}
