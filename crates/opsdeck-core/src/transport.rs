//! Transport client ports for the two backend services.
//!
//! Both traits describe a single request/response exchange with no retry
//! and no caching: the backends' idempotency is unknown, so no implicit
//! retries are performed. Uses native async fn in traits (RPITIT, Rust
//! 2024 edition). Implementations live in opsdeck-infra
//! (e.g., `HttpTransport`).

use opsdeck_types::catalog::Product;
use opsdeck_types::chat::AgentReply;
use opsdeck_types::error::TransportError;

/// Port to the agent reasoning service.
pub trait AgentClient: Send + Sync {
    /// Send one chat message and receive the agent's reply.
    ///
    /// Fails with [`TransportError::FetchFailure`] on a non-success status
    /// or transport error, [`TransportError::MalformedResponse`] when the
    /// body does not decode.
    fn send_chat_message(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<AgentReply, TransportError>> + Send;
}

/// Port to the product catalog service.
pub trait CatalogClient: Send + Sync {
    /// Fetch the full product list, always as a fresh network fetch.
    fn fetch_product_list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Product>, TransportError>> + Send;
}
