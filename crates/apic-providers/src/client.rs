//! Request dispatcher
//!
//! [`ApiClient`] is the single client type behind every auth scheme. The
//! scheme only changes how each request is decorated, which is decided by the
//! [`AuthStrategy`] resolved from the credentials at construction.

use apic_domain::error::{Error, Result};
use apic_domain::{AuthScheme, AuthStrategy, Credentials, build_url};
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::HeaderValue;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::http::{TransportConfig, build_http_client};
use crate::utils::ApiResponse;

/// Empty parameter list for calls that send no query or body
pub const NO_PARAMS: &[(&str, &str)] = &[];

/// How a POST body is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostEncoding {
    /// `application/json`
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`
    Form,
}

/// HTTP API client
///
/// Holds an immutable credential set and the strategy derived from it.
/// Every call builds a fresh request; nothing is shared between calls except
/// the underlying `reqwest` client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    credentials: Credentials,
    strategy: AuthStrategy,
    http_client: Client,
}

impl ApiClient {
    /// Create a client with the default transport
    ///
    /// # Arguments
    /// * `name` - Client name used in errors and logs
    /// * `scheme` - Authentication scheme, which decides the required credential keys
    /// * `credentials` - Credential mapping (`url` plus the scheme's keys)
    pub fn new<I, K, V>(name: &str, scheme: AuthScheme, credentials: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_transport(name, scheme, credentials, &TransportConfig::default())
    }

    /// Create a client with a custom transport configuration
    pub fn with_transport<I, K, V>(
        name: &str,
        scheme: AuthScheme,
        credentials: I,
        transport: &TransportConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let credentials = Credentials::load(name, scheme, credentials)?;
        let http_client = build_http_client(transport)?;
        Self::from_credentials(credentials, http_client)
    }

    /// Create a client from already validated credentials and an injected HTTP client
    pub fn from_credentials(credentials: Credentials, http_client: Client) -> Result<Self> {
        let strategy = credentials.strategy();

        for (name, value) in strategy.headers() {
            HeaderValue::from_str(&value).map_err(|e| {
                Error::configuration_with_source(
                    format!(
                        "Invalid value for header `{name}` in API client: {}",
                        credentials.client()
                    ),
                    e,
                )
            })?;
        }

        Ok(Self {
            credentials,
            strategy,
            http_client,
        })
    }

    /// Client name
    pub fn name(&self) -> &str {
        self.credentials.client()
    }

    /// The client's credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The authentication strategy applied to every request
    pub fn strategy(&self) -> &AuthStrategy {
        &self.strategy
    }

    /// Join the configured base URL with `path`
    pub fn build_url(&self, path: &str) -> String {
        build_url(self.credentials.base_url(), path)
    }

    /// Headers sent with every request
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        self.strategy.headers()
    }

    /// Send a GET request with query parameters and return the response
    pub fn get<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<ApiResponse> {
        let request = self.request(Method::GET, path).query(query);
        self.send(request)
    }

    /// Send a POST request with a JSON or form-encoded body and return the response
    pub fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        encoding: PostEncoding,
    ) -> Result<ApiResponse> {
        let request = self.request(Method::POST, path);
        let request = match encoding {
            PostEncoding::Json => request.json(body),
            PostEncoding::Form => request.form(body),
        };
        self.send(request)
    }

    /// Send a DELETE request and return the response
    ///
    /// Parameters travel as a JSON body; empty parameters send no body.
    pub fn delete<B: Serialize + ?Sized>(&self, path: &str, params: &B) -> Result<ApiResponse> {
        let params = serde_json::to_value(params)?;
        let mut request = self.request(Method::DELETE, path);
        if !is_empty_params(&params) {
            request = request.json(&params);
        }
        self.send(request)
    }

    /// Fresh request carrying the strategy's headers and credentials
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.build_url(path);
        debug!(client = self.name(), %method, %url, "Dispatching request");

        let mut request = self.http_client.request(method, url);
        for (name, value) in self.strategy.headers() {
            request = request.header(name, value);
        }
        if let Some((username, password)) = self.strategy.basic_credentials() {
            request = request.basic_auth(username, Some(password));
        }
        request
    }

    fn send(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().map_err(|e| {
            if e.is_builder() {
                Error::configuration_with_source(
                    format!("Could not build request for API client {}", self.name()),
                    e,
                )
            } else {
                Error::network_with_source(
                    format!("Request from API client {} failed", self.name()),
                    e,
                )
            }
        })?;
        ApiResponse::from_reqwest(response)
    }
}

fn is_empty_params(params: &Value) -> bool {
    match params {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
