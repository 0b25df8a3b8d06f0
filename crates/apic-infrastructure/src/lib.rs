//! # API Clients - Infrastructure Layer
//!
//! Cross-cutting concerns around the clients.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Config file names, env prefixes, defaults |
//! | [`factory`] | Builds configured clients by name |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod factory;
pub mod logging;

pub use config::{AppConfig, ClientConfig, ConfigBuilder, ConfigLoader, LoggingConfig};
pub use factory::ClientFactory;
