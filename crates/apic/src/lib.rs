//! # API Clients
//!
//! JSON-over-HTTP clients with a common request contract: credentials are
//! validated once at construction, paths are joined onto a configured base
//! URL, and every request carries `Accept` / `Content-Type: application/json`.
//!
//! - [`ApiClient`] dispatches GET/POST/DELETE decorated by its [`AuthScheme`]:
//!   nothing extra, an `x-api-key` header, or transport-level basic auth.
//! - [`GatewayClient`] turns API gateway responses into parsed data or an
//!   [`Error::GatewayResponse`].
//! - [`ClientFactory`] builds named clients from `apic.toml` / `APIC_*` configuration.
//!
//! ## Example
//!
//! ```no_run
//! use apic::{GatewayClient, NO_PARAMS};
//!
//! # fn main() -> apic::Result<()> {
//! let gateway = GatewayClient::new(
//!     "orders",
//!     [("url", "https://gateway.example.com"), ("api_key", "secret")],
//! )?;
//! let order = gateway.get_data("/v1/orders/7", NO_PARAMS)?;
//! println!("{}", order["id"]);
//! # Ok(())
//! # }
//! ```

/// Domain layer - credentials, auth strategies, errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use apic_domain::*;
}

/// Client implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use apic_providers::*;
}

/// Infrastructure layer - config, logging and client factory
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use apic_infrastructure::*;
}

pub use apic_domain::{AuthScheme, AuthStrategy, Credentials, Error, Result, build_url};
pub use apic_infrastructure::{AppConfig, ClientConfig, ClientFactory, ConfigLoader};
pub use apic_providers::{
    ApiClient, ApiResponse, GatewayClient, GatewayErrorSink, GatewayFailure, NO_PARAMS,
    NullErrorSink, PostEncoding, ResponseData, TracingErrorSink, TransportConfig,
    extract_response_data,
};
