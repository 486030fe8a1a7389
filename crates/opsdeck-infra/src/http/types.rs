//! Wire types for the agent backend.
//!
//! The agent service speaks a single JSON shape: `{"query": ...}` in,
//! `{"response": ...}` out. The reply type lives in `opsdeck-types`
//! because the controller consumes it directly.

use serde::Serialize;

/// Request body of `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatQuery {
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_query_wire_shape() {
        let body = ChatQuery {
            query: "How much desk stock is left?".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"query":"How much desk stock is left?"}"#);
    }
}
