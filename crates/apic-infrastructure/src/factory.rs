//! Client factory
//!
//! Builds configured clients by name. Every client built by one factory shares
//! the same `reqwest` client and therefore its connection pool.

use std::collections::BTreeMap;
use std::sync::Arc;

use apic_domain::error::{Error, Result};
use apic_domain::Credentials;
use apic_providers::http::build_http_client;
use apic_providers::{ApiClient, GatewayClient, GatewayErrorSink, TracingErrorSink};
use reqwest::blocking::Client;
use tracing::debug;

use crate::config::{AppConfig, ClientConfig};

/// Factory for the clients declared in [`AppConfig::clients`]
#[derive(Debug, Clone)]
pub struct ClientFactory {
    clients: BTreeMap<String, ClientConfig>,
    http_client: Client,
}

impl ClientFactory {
    /// Create a factory from application configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            clients: config.clients.clone(),
            http_client: build_http_client(&config.transport)?,
        })
    }

    /// Names of the configured clients, sorted
    pub fn client_names(&self) -> impl Iterator<Item = &str> {
        self.clients.keys().map(String::as_str)
    }

    /// Build the named client with its configured scheme
    pub fn api_client(&self, name: &str) -> Result<ApiClient> {
        let config = self.client_config(name)?;
        let credentials = Credentials::load(name, config.scheme, config.credentials.clone())?;
        debug!(client = name, scheme = %config.scheme, "Building API client");
        ApiClient::from_credentials(credentials, self.http_client.clone())
    }

    /// Build the named client as a gateway client reporting through `tracing`
    pub fn gateway_client(&self, name: &str) -> Result<GatewayClient> {
        self.gateway_client_with_sink(name, Arc::new(TracingErrorSink))
    }

    /// Build the named client as a gateway client reporting to `sink`
    ///
    /// The client must be configured with the `api_key` scheme.
    pub fn gateway_client_with_sink(
        &self,
        name: &str,
        sink: Arc<dyn GatewayErrorSink>,
    ) -> Result<GatewayClient> {
        GatewayClient::from_client(self.api_client(name)?, sink)
    }

    fn client_config(&self, name: &str) -> Result<&ClientConfig> {
        self.clients
            .get(name)
            .ok_or_else(|| Error::configuration(format!("No API client configured as: {name}")))
    }
}
