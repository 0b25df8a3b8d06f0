//! Immutable credential set
//!
//! A client is handed its credentials once, at construction. They are checked
//! against the keys its [`AuthScheme`] requires and then frozen: there are no
//! setters, and the values are only reachable through read-only accessors.

use std::collections::BTreeMap;
use std::fmt;

use crate::auth::{AuthScheme, AuthStrategy};
use crate::constants::CREDENTIAL_URL;
use crate::error::{Error, Result};

/// Validated, read-only credential set owned by a single client
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client: String,
    scheme: AuthScheme,
    values: BTreeMap<String, String>,
}

impl Credentials {
    /// Validate `credentials` against the keys `scheme` requires.
    ///
    /// `client` names the owning client in error messages and logs. A key that
    /// is absent, empty or `"0"` counts as missing.
    pub fn load<I, K, V>(client: &str, scheme: AuthScheme, credentials: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values: BTreeMap<String, String> = credentials
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for key in scheme.required_keys() {
            if values.get(*key).is_none_or(|value| is_empty_value(value)) {
                return Err(Error::missing_credential(client, key));
            }
        }

        Ok(Self {
            client: client.to_string(),
            scheme,
            values,
        })
    }

    /// Name of the client these credentials belong to
    pub fn client(&self) -> &str {
        &self.client
    }

    /// The scheme these credentials were validated against
    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    /// Resolve the authentication strategy for these credentials
    pub fn strategy(&self) -> AuthStrategy {
        self.scheme.strategy(self)
    }

    /// Look up a credential by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        // Every scheme requires `url`, so `load` guarantees it is present.
        self.get(CREDENTIAL_URL).unwrap_or_default()
    }

    /// Credential keys, in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

// Values are secrets; only the keys are printed.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client", &self.client)
            .field("scheme", &self.scheme)
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn is_empty_value(value: &str) -> bool {
    value.is_empty() || value == "0"
}
