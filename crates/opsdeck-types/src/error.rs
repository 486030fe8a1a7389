use thiserror::Error;

/// Errors surfaced by the backend transport clients.
///
/// Callers treat both variants identically: the chat controller converts
/// either into a visible sentinel turn, and the inventory view stops its
/// loading indicator.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Non-success HTTP status or transport-level failure.
    #[error("fetch failed: {0}")]
    FetchFailure(String),

    /// Response body missing expected fields or otherwise undecodable.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_display() {
        let err = TransportError::FetchFailure("HTTP 500: boom".to_string());
        assert_eq!(err.to_string(), "fetch failed: HTTP 500: boom");
    }

    #[test]
    fn test_malformed_response_display() {
        let err = TransportError::MalformedResponse("missing field `response`".to_string());
        assert!(err.to_string().contains("missing field `response`"));
    }
}
