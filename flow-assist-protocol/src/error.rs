//! Typed error types for flow-assist-protocol.

use thiserror::Error;

/// A response payload whose `type` is known but whose body is malformed.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// A required field is missing or has the wrong JSON type.
    #[error("invalid '{kind}' payload: {source}")]
    Invalid {
        /// The payload's `type` discriminator.
        kind: String,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Failures reported by an [`AssistantTransport`](crate::AssistantTransport)
/// implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the connection dropped.
    #[error("assistant request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("assistant backend returned {status}: {message}")]
    Status {
        /// HTTP-style status code.
        status: u16,
        /// Error text returned by the backend.
        message: String,
    },

    /// The backend's answer could not be decoded.
    #[error("could not decode assistant reply: {0}")]
    Decode(#[from] PayloadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Status {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "assistant backend returned 503: overloaded"
        );

        let err = TransportError::Request("connection reset".to_string());
        assert!(err.to_string().contains("connection reset"));
    }
}
