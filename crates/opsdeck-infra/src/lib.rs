//! Infrastructure layer for Opsdeck.
//!
//! Contains implementations of the transport ports defined in
//! `opsdeck-core` (reqwest-backed HTTP clients for the catalog and agent
//! services) and the configuration loader.

pub mod config;
pub mod http;
