//! Session controller and transport port definitions for Opsdeck.
//!
//! This crate owns the chat session controller (conversation log, pending
//! input, in-flight gate) and defines the "ports" (transport traits) that
//! the infrastructure layer implements. It depends only on `opsdeck-types`
//! -- never on `opsdeck-infra` or any HTTP/IO crate.

pub mod event;
pub mod session;
pub mod transport;
