//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the API clients
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error: missing credentials, unreadable config, bad values
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The API gateway reported a failure, either via status or via a sentinel body
    #[error("{message}")]
    GatewayResponse {
        /// Message taken from the response body, or synthesized from the status
        message: String,
        /// Transport status, or 500 for a sentinel failure
        status: u16,
    },

    /// Transport-level failure reported by the HTTP library
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON serialization error for outbound parameters
    #[error("JSON serialization error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create the error raised when a required credential is absent or empty
    pub fn missing_credential(client: &str, key: &str) -> Self {
        Self::configuration(format!(
            "Could not load credentials for API client: {client} (missing `{key}`)"
        ))
    }
}

// Network error creation methods
impl Error {
    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Gateway error creation methods
impl Error {
    /// Create a gateway response error
    pub fn gateway_response<S: Into<String>>(message: S, status: u16) -> Self {
        Self::GatewayResponse {
            message: message.into(),
            status,
        }
    }
}

// Inspection helpers
impl Error {
    /// Whether this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this is a gateway response error
    pub fn is_gateway_response(&self) -> bool {
        matches!(self, Self::GatewayResponse { .. })
    }

    /// Status code carried by a gateway response error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::GatewayResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}
