//! HTTP Response Utilities
//!
//! [`ApiResponse`] is read eagerly from the transport so it can be inspected
//! more than once and constructed directly in tests.

use std::collections::BTreeMap;

use apic_domain::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Parsed response body: string keys to arbitrary JSON values
pub type ResponseData = Map<String, Value>;

/// Completed HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    url: String,
    headers: BTreeMap<String, Vec<String>>,
    body: String,
}

impl ApiResponse {
    /// Create a response with the given status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            url: String::new(),
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// Set the effective URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Append a header value; names are stored lowercase
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Read status, effective URL, headers and body from a transport response
    pub fn from_reqwest(response: reqwest::blocking::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in response.headers() {
            headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        let body = response.text().map_err(|e| {
            Error::network_with_source(format!("Failed to read body from {url}"), e)
        })?;

        Ok(Self {
            status,
            url,
            headers,
            body,
        })
    }

    /// Numeric status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Effective URL the response came from, after redirects
    pub fn url(&self) -> &str {
        &self.url
    }

    /// All response headers, keyed by lowercase name
    pub fn headers(&self) -> &BTreeMap<String, Vec<String>> {
        &self.headers
    }

    /// First value of a header, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Raw body text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Body parsed as a mapping; see [`extract_response_data`]
    pub fn data(&self) -> ResponseData {
        extract_response_data(self)
    }

    /// Deserialize the body into a typed value
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Parse a response body into a mapping.
///
/// Never fails: a body that is not JSON, or is JSON `null`, yields an empty
/// mapping. Arrays become index-keyed mappings (`"0"`, `"1"`, ...) and a bare
/// scalar is stored under `"0"`.
pub fn extract_response_data(response: &ApiResponse) -> ResponseData {
    match serde_json::from_str::<Value>(response.body()) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        Ok(Value::Null) | Err(_) => ResponseData::new(),
        Ok(scalar) => ResponseData::from_iter([("0".to_string(), scalar)]),
    }
}
