//! Configuration types

use std::collections::BTreeMap;
use std::path::PathBuf;

use apic_domain::AuthScheme;
use apic_providers::TransportConfig;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// HTTP transport shared by every configured client
    pub transport: TransportConfig,

    /// Named API clients
    pub clients: BTreeMap<String, ClientConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// A single named API client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Authentication scheme: `none`, `api_key` or `basic`
    pub scheme: AuthScheme,

    /// Credential mapping (`url`, `api_key`, `username`, `password`, ...)
    pub credentials: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Create a client entry
    pub fn new<I, K, V>(scheme: AuthScheme, credentials: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            scheme,
            credentials: credentials
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
