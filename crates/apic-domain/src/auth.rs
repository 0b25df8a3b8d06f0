//! Authentication schemes and strategies
//!
//! [`AuthScheme`] is the configuration-level choice (which keys a client
//! needs). [`AuthStrategy`] is the resolved value carrying the actual secrets;
//! its methods describe how an outbound request is decorated without touching
//! any HTTP type, so they can be tested in isolation.

use serde::{Deserialize, Serialize};

use crate::constants::{
    API_KEY_HEADER, CONTENT_TYPE_JSON, CREDENTIAL_API_KEY, CREDENTIAL_PASSWORD, CREDENTIAL_URL,
    CREDENTIAL_USERNAME, HEADER_ACCEPT, HEADER_CONTENT_TYPE,
};
use crate::credentials::Credentials;

/// Authentication scheme selected for a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// No authentication, only standard JSON headers
    #[default]
    None,
    /// `x-api-key` header
    ApiKey,
    /// Transport-level basic authentication
    Basic,
}

impl AuthScheme {
    /// Credential keys that must be present and non-empty for this scheme
    pub fn required_keys(self) -> &'static [&'static str] {
        match self {
            Self::None => &[CREDENTIAL_URL],
            Self::ApiKey => &[CREDENTIAL_URL, CREDENTIAL_API_KEY],
            Self::Basic => &[CREDENTIAL_URL, CREDENTIAL_USERNAME, CREDENTIAL_PASSWORD],
        }
    }

    /// Resolve the strategy for this scheme from validated credentials
    pub fn strategy(self, credentials: &Credentials) -> AuthStrategy {
        let value = |key: &str| credentials.get(key).unwrap_or_default().to_string();
        match self {
            Self::None => AuthStrategy::None,
            Self::ApiKey => AuthStrategy::ApiKey(value(CREDENTIAL_API_KEY)),
            Self::Basic => AuthStrategy::Basic {
                username: value(CREDENTIAL_USERNAME),
                password: value(CREDENTIAL_PASSWORD),
            },
        }
    }
}

impl std::fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::ApiKey => "api_key",
            Self::Basic => "basic",
        };
        f.write_str(name)
    }
}

/// Resolved authentication strategy
#[derive(Clone, PartialEq, Eq)]
pub enum AuthStrategy {
    /// No authentication
    None,
    /// API key sent as the `x-api-key` header
    ApiKey(String),
    /// Username and password sent as transport-level basic credentials
    Basic {
        /// Basic auth user name
        username: String,
        /// Basic auth password
        password: String,
    },
}

impl AuthStrategy {
    /// Headers sent with every request under this strategy
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            (HEADER_ACCEPT, CONTENT_TYPE_JSON.to_string()),
            (HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON.to_string()),
        ];
        if let Self::ApiKey(key) = self {
            headers.push((API_KEY_HEADER, key.clone()));
        }
        headers
    }

    /// Basic credentials to attach at the transport level, if any
    pub fn basic_credentials(&self) -> Option<(&str, &str)> {
        match self {
            Self::Basic { username, password } => Some((username, password)),
            _ => None,
        }
    }

    /// The scheme this strategy was resolved from
    pub fn scheme(&self) -> AuthScheme {
        match self {
            Self::None => AuthScheme::None,
            Self::ApiKey(_) => AuthScheme::ApiKey,
            Self::Basic { .. } => AuthScheme::Basic,
        }
    }
}

impl std::fmt::Debug for AuthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}
