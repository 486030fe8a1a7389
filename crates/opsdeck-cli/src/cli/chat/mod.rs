//! Interactive CLI chat experience for the supply chain agent.
//!
//! This module is the presentation view over the session controller in
//! opsdeck-core: it forwards operator intent (text entry, send trigger)
//! and renders from the controller's state-change events. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
