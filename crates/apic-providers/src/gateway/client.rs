//! Gateway client and response validation

use std::fmt;
use std::sync::Arc;

use apic_domain::constants::{
    GATEWAY_INTERNAL_ERROR_SENTINEL, GATEWAY_MESSAGE_FIELD, GATEWAY_SENTINEL_STATUS,
};
use apic_domain::error::{Error, Result};
use apic_domain::{AuthScheme, Credentials};
use serde::Serialize;
use serde_json::Value;

use super::sink::{GatewayErrorSink, GatewayFailure, TracingErrorSink};
use crate::client::{ApiClient, PostEncoding};
use crate::http::{TransportConfig, build_http_client};
use crate::utils::{ApiResponse, ResponseData, extract_response_data};

/// API gateway client
///
/// Requires `url` and `api_key` credentials and sends the key as the
/// `x-api-key` header on every request.
#[derive(Clone)]
pub struct GatewayClient {
    client: ApiClient,
    sink: Arc<dyn GatewayErrorSink>,
}

impl GatewayClient {
    /// Create a gateway client that reports failures through `tracing`
    pub fn new<I, K, V>(name: &str, credentials: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_sink(name, credentials, Arc::new(TracingErrorSink))
    }

    /// Create a gateway client reporting failures to `sink`
    pub fn with_sink<I, K, V>(
        name: &str,
        credentials: I,
        sink: Arc<dyn GatewayErrorSink>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let credentials = Credentials::load(name, AuthScheme::ApiKey, credentials)?;
        let http_client = build_http_client(&TransportConfig::default())?;
        Self::from_client(ApiClient::from_credentials(credentials, http_client)?, sink)
    }

    /// Wrap an existing API-key client
    pub fn from_client(client: ApiClient, sink: Arc<dyn GatewayErrorSink>) -> Result<Self> {
        if client.credentials().scheme() != AuthScheme::ApiKey {
            return Err(Error::configuration(format!(
                "API client {} must use the api_key scheme to act as a gateway client, found {}",
                client.name(),
                client.credentials().scheme()
            )));
        }
        Ok(Self { client, sink })
    }

    /// The underlying API client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Send a GET request and return the raw response
    pub fn get<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<ApiResponse> {
        self.client.get(path, query)
    }

    /// Send a POST request and return the raw response
    pub fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        encoding: PostEncoding,
    ) -> Result<ApiResponse> {
        self.client.post(path, body, encoding)
    }

    /// Send a DELETE request and return the raw response
    pub fn delete<B: Serialize + ?Sized>(&self, path: &str, params: &B) -> Result<ApiResponse> {
        self.client.delete(path, params)
    }

    /// GET and validate in one call
    pub fn get_data<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<ResponseData> {
        let response = self.get(path, query)?;
        self.validate_and_return_response_data(&response)
    }

    /// POST and validate in one call
    pub fn post_data<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        encoding: PostEncoding,
    ) -> Result<ResponseData> {
        let response = self.post(path, body, encoding)?;
        self.validate_and_return_response_data(&response)
    }

    /// DELETE and validate in one call
    pub fn delete_data<B: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &B,
    ) -> Result<ResponseData> {
        let response = self.delete(path, params)?;
        self.validate_and_return_response_data(&response)
    }

    /// Turn a gateway response into its parsed body or a [`Error::GatewayResponse`].
    ///
    /// * Non-2xx: the failure is recorded with the sink, and the error carries
    ///   the body's `message` (or `"API responded with status code: {status}"`)
    ///   and the real status.
    /// * 2xx whose body `message` is exactly `"Internal server error"`: fails
    ///   with that message and status 500. The gateway reports some upstream
    ///   failures this way.
    /// * Otherwise the parsed body is returned.
    pub fn validate_and_return_response_data(
        &self,
        response: &ApiResponse,
    ) -> Result<ResponseData> {
        let data = extract_response_data(response);
        let message = body_message(&data);

        if !response.is_success() {
            self.sink.record(&GatewayFailure {
                uri: response.url().to_string(),
                status: response.status(),
                error: message.clone().unwrap_or_default(),
                headers: response.headers().clone(),
            });

            let message = message.unwrap_or_else(|| {
                format!("API responded with status code: {}", response.status())
            });
            return Err(Error::gateway_response(message, response.status()));
        }

        if message.as_deref() == Some(GATEWAY_INTERNAL_ERROR_SENTINEL) {
            return Err(Error::gateway_response(
                GATEWAY_INTERNAL_ERROR_SENTINEL,
                GATEWAY_SENTINEL_STATUS,
            ));
        }

        Ok(data)
    }
}

impl fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayClient")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

/// The body's `message` field; non-string values are rendered as JSON
fn body_message(data: &ResponseData) -> Option<String> {
    match data.get(GATEWAY_MESSAGE_FIELD)? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
