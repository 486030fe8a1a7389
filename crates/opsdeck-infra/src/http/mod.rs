//! HTTP transport to the catalog and agent backends.
//!
//! `client::HttpTransport` implements the `AgentClient` and
//! `CatalogClient` ports from opsdeck-core over a single reqwest client.

pub mod client;
pub mod types;

pub use client::HttpTransport;
