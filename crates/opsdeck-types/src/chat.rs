//! Conversation types for the agent-chat view.
//!
//! A conversation is an append-only sequence of [`Turn`]s attributed to
//! either the human operator or the remote agent. Turns are immutable once
//! appended; ordering is conversation order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Greeting seeded as the first agent turn of every session.
pub const AGENT_GREETING: &str = "Hello! I am your Supply Chain Agent. I can check inventory, read contracts, and draft orders. How can I help?";

/// Fixed agent-turn text shown when a chat request fails.
///
/// Failures are surfaced as a visible turn rather than propagated, so the
/// operator always sees a response instead of a silent hang.
pub const AGENT_ERROR_TEXT: &str = "Error: Could not connect to the Agent Brain.";

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Operator,
    Agent,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Operator => write!(f, "operator"),
            Speaker::Agent => write!(f, "agent"),
        }
    }
}

impl FromStr for Speaker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operator" => Ok(Speaker::Operator),
            "agent" => Ok(Speaker::Agent),
            other => Err(format!("invalid speaker: '{other}'")),
        }
    }
}

/// One message in a conversation, immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    /// Create a new turn stamped with the current time.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            speaker,
            text: text.into(),
            at: Utc::now(),
        }
    }

    /// Whether this turn was produced by the operator.
    pub fn is_operator(&self) -> bool {
        self.speaker == Speaker::Operator
    }
}

/// Success body of the agent backend's `/chat` endpoint.
///
/// The `response` text is carried into the agent turn verbatim: no
/// transformation, no length limit, embedded line breaks preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReply {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_display_roundtrip() {
        assert_eq!(Speaker::Operator.to_string(), "operator");
        assert_eq!(Speaker::Agent.to_string(), "agent");
        assert_eq!("operator".parse::<Speaker>().unwrap(), Speaker::Operator);
        assert_eq!("AGENT".parse::<Speaker>().unwrap(), Speaker::Agent);
        assert!("narrator".parse::<Speaker>().is_err());
    }

    #[test]
    fn test_turn_new_stamps_identity() {
        let turn = Turn::new(Speaker::Operator, "ping");
        assert_eq!(turn.speaker, Speaker::Operator);
        assert_eq!(turn.text, "ping");
        assert!(turn.is_operator());
    }

    #[test]
    fn test_agent_reply_deserializes_wire_shape() {
        let reply: AgentReply = serde_json::from_str(r#"{"response": "ack"}"#).unwrap();
        assert_eq!(reply.response, "ack");
    }

    #[test]
    fn test_agent_reply_preserves_line_breaks() {
        let reply: AgentReply =
            serde_json::from_str("{\"response\": \"line one\\nline two\"}").unwrap();
        assert_eq!(reply.response, "line one\nline two");
    }
}
