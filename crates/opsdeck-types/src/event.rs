//! Event types for the session event bus.
//!
//! `SessionEvent` is broadcast by the chat session controller on every
//! state mutation so views can re-render without the controller reaching
//! into rendering. All variants are Clone + Send + Sync for use with tokio
//! broadcast channels.

use serde::{Deserialize, Serialize};

use crate::chat::Turn;

/// State-change notifications published by the session controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A turn was appended to the conversation log.
    TurnAppended { turn: Turn },

    /// The pending input buffer was replaced.
    InputChanged { text: String },

    /// The in-flight flag toggled.
    InFlightChanged { in_flight: bool },
}
