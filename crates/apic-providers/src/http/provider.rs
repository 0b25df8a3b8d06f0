//! HTTP client construction
//!
//! Pooling, TLS and redirect handling all stay with `reqwest`'s defaults. The
//! only knobs exposed are the user agent and an optional overall timeout.

use std::time::Duration;

use apic_domain::error::{Error, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// User agent string
    pub user_agent: String,
    /// Total timeout for requests; `None` keeps the transport default
    #[serde(with = "optional_secs")]
    pub timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("apic/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl TransportConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Default::default()
        }
    }
}

/// Build a blocking `reqwest` client from transport configuration
pub fn build_http_client(config: &TransportConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(&config.user_agent);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| Error::configuration_with_source("Failed to create HTTP client", e))
}

/// Timeouts are written as whole seconds in configuration files
mod optional_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => serializer.serialize_some(&duration.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}
