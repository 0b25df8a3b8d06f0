//! # API Clients - HTTP Implementations
//!
//! `reqwest`-backed clients built on the domain types in `apic-domain`.
//!
//! | Type | Role |
//! |------|------|
//! | [`ApiClient`] | Builds URLs, decorates requests per [`AuthStrategy`], dispatches GET/POST/DELETE |
//! | [`ApiResponse`] | Eagerly read response: status, effective URL, headers, body |
//! | [`GatewayClient`] | API-key client that turns responses into data or [`Error::GatewayResponse`] |
//! | [`GatewayErrorSink`] | Receives a record of every failed gateway response |
//!
//! ## Usage
//!
//! ```no_run
//! use apic_providers::{ApiClient, AuthScheme, PostEncoding, NO_PARAMS};
//!
//! # fn main() -> apic_providers::Result<()> {
//! let client = ApiClient::new(
//!     "billing",
//!     AuthScheme::Basic,
//!     [("url", "https://billing.example.com"), ("username", "svc"), ("password", "pw")],
//! )?;
//!
//! let invoices = client.get("/v1/invoices", &[("status", "open")])?;
//! let _created = client.post("v1/invoices", &serde_json::json!({"amount": 10}), PostEncoding::Json)?;
//! let _deleted = client.delete("v1/invoices/7", NO_PARAMS)?;
//! println!("{}", invoices.status());
//! # Ok(())
//! # }
//! ```

// Re-export domain types commonly used with the clients
pub use apic_domain::error::{Error, Result};
pub use apic_domain::{AuthScheme, AuthStrategy, Credentials};

/// Request dispatcher shared by every auth scheme
pub mod client;

/// API gateway client and its failure sinks
pub mod gateway;

/// HTTP transport configuration
pub mod http;

/// Response handling utilities
pub mod utils;

pub use client::{ApiClient, NO_PARAMS, PostEncoding};
pub use gateway::{
    GatewayClient, GatewayErrorSink, GatewayFailure, NullErrorSink, TracingErrorSink,
};
pub use http::TransportConfig;
pub use utils::{ApiResponse, ResponseData, extract_response_data};
