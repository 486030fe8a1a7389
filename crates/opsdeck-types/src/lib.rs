//! Shared domain types for Opsdeck.
//!
//! This crate contains the core domain types used across the Opsdeck console:
//! conversation turns, catalog records, session events, configuration, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod event;
