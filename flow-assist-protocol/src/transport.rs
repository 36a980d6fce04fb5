//! The seam between the state core and the assistant backend.
//!
//! The core never performs I/O itself. An HTTP or streaming client implements
//! [`AssistantTransport`]; tests implement it with scripted replies.

use std::future::Future;

use crate::error::TransportError;
use crate::request::ChatRequest;
use crate::response::ResponsePayload;

/// The settled result of one exchange with the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssistantReply {
    /// Session id assigned (or echoed) by the backend.
    pub session_id: Option<String>,
    /// Response payloads in the order the backend produced them.
    pub messages: Vec<ResponsePayload>,
}

impl AssistantReply {
    /// A reply carrying a session id and payloads.
    pub fn new(session_id: impl Into<String>, messages: Vec<ResponsePayload>) -> Self {
        Self {
            session_id: Some(session_id.into()),
            messages,
        }
    }
}

/// Client side of the assistant backend.
///
/// Each call is a single outstanding operation awaited to completion; the
/// returned futures are not expected to be cancelled.
pub trait AssistantTransport {
    /// Start a new session from `request` (an `init-error-helper` body).
    fn start_session(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<AssistantReply, TransportError>> + Send;

    /// Send a follow-up turn within an existing session.
    fn send_message(
        &self,
        session_id: &str,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<AssistantReply, TransportError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl AssistantTransport for Echo {
        async fn start_session(
            &self,
            _request: &ChatRequest,
        ) -> Result<AssistantReply, TransportError> {
            Ok(AssistantReply::new("sess-1", Vec::new()))
        }

        async fn send_message(
            &self,
            session_id: &str,
            _request: &ChatRequest,
        ) -> Result<AssistantReply, TransportError> {
            Err(TransportError::Request(format!("{session_id} closed")))
        }
    }

    #[tokio::test]
    async fn test_scripted_transport_replies() {
        let transport = Echo;
        let reply = transport
            .start_session(&ChatRequest::message("hi"))
            .await
            .unwrap();
        assert_eq!(reply.session_id.as_deref(), Some("sess-1"));

        let err = transport
            .send_message("sess-1", &ChatRequest::message("again"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("sess-1 closed"));
    }
}
