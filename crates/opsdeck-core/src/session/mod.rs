//! Chat session state for the agent view.
//!
//! `controller::SessionController` owns the conversation log, the pending
//! input buffer, and the in-flight gate for one session. Entry point:
//! `SessionController::submit`.

pub mod controller;
