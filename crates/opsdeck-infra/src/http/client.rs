//! HttpTransport -- concrete [`AgentClient`] and [`CatalogClient`]
//! implementation over HTTP.
//!
//! One reqwest client, two base URLs. Each operation is a single
//! request/response exchange: no retry (the backends' idempotency is
//! unknown), no caching (the product fetch explicitly asks for a fresh
//! response), no per-request timeout beyond the client default set at
//! construction.

use std::time::Duration;

use reqwest::header::CACHE_CONTROL;

use opsdeck_core::transport::{AgentClient, CatalogClient};
use opsdeck_types::catalog::Product;
use opsdeck_types::chat::AgentReply;
use opsdeck_types::config::ConsoleConfig;
use opsdeck_types::error::TransportError;

use super::types::ChatQuery;

/// HTTP client for the two backend services.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    agent_base_url: String,
    catalog_base_url: String,
}

impl HttpTransport {
    /// Create a transport from the configured base endpoints.
    pub fn new(config: &ConsoleConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            agent_base_url: config.agent_base_url.trim_end_matches('/').to_string(),
            catalog_base_url: config.catalog_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the full agent-service URL for a given path.
    fn agent_url(&self, path: &str) -> String {
        format!("{}{}", self.agent_base_url, path)
    }

    /// Build the full catalog-service URL for a given path.
    fn catalog_url(&self, path: &str) -> String {
        format!("{}{}", self.catalog_base_url, path)
    }
}

impl AgentClient for HttpTransport {
    async fn send_chat_message(&self, query: &str) -> Result<AgentReply, TransportError> {
        let body = ChatQuery {
            query: query.to_string(),
        };

        let response = self
            .client
            .post(self.agent_url("/chat"))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::FetchFailure(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(TransportError::FetchFailure(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        response
            .json::<AgentReply>()
            .await
            .map_err(|e| TransportError::MalformedResponse(format!("failed to parse response: {e}")))
    }
}

impl CatalogClient for HttpTransport {
    async fn fetch_product_list(&self) -> Result<Vec<Product>, TransportError> {
        let response = self
            .client
            .get(self.catalog_url("/products"))
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| TransportError::FetchFailure(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(TransportError::FetchFailure(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| TransportError::MalformedResponse(format!("failed to parse response: {e}")))
    }
}
