//! Shared integration test helpers for flow-assist.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{ScriptedTransport, sample_error_context};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers is used per file.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use serde_json::json;
use tokio::sync::Notify;

use flow_assist::protocol::{
    AssistantReply, AssistantTransport, ChatRequest, ErrorContext, NodeErrorInfo, NodeInfo,
    ResponsePayload, TransportError,
};

/// A request as seen by the transport: the session id it was sent under
/// (`None` for session starts) and the body.
pub type RecordedRequest = (Option<String>, ChatRequest);

/// Transport that answers from a queue of scripted results.
///
/// An empty queue answers with an empty reply. When a gate is set, every
/// call parks after recording its request until the gate is notified.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<AssistantReply, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    start_calls: AtomicUsize,
    send_calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: AssistantReply) -> Self {
        self.replies.lock().push_back(Ok(reply));
        self
    }

    pub fn with_error(self, error: TransportError) -> Self {
        self.replies.lock().push_back(Err(error));
        self
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn start_calls(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }

    pub fn send_calls(&self) -> usize {
        self.send_calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    async fn answer(
        &self,
        session_id: Option<&str>,
        request: &ChatRequest,
    ) -> Result<AssistantReply, TransportError> {
        self.requests
            .lock()
            .push((session_id.map(str::to_string), request.clone()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(AssistantReply::default()))
    }
}

impl AssistantTransport for ScriptedTransport {
    async fn start_session(
        &self,
        request: &ChatRequest,
    ) -> Result<AssistantReply, TransportError> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(None, request).await
    }

    async fn send_message(
        &self,
        session_id: &str,
        request: &ChatRequest,
    ) -> Result<AssistantReply, TransportError> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(Some(session_id), request).await
    }
}

/// A `message` payload with the given text.
pub fn text_payload(text: &str) -> ResponsePayload {
    ResponsePayload::from_value(&json!({
        "type": "message",
        "role": "assistant",
        "text": text,
    }))
    .expect("valid message payload")
}

/// A payload of a kind the normalizer does not map.
pub fn unknown_payload() -> ResponsePayload {
    ResponsePayload::from_value(&json!({ "type": "event", "eventName": "end-session" }))
        .expect("unknown kinds decode")
}

/// A Code node failing on an undefined property.
pub fn sample_error_context() -> ErrorContext {
    ErrorContext {
        error: NodeErrorInfo {
            message: "Cannot read properties of undefined (reading 'json')".to_string(),
            description: Some("Check the expression in line 3".to_string()),
            name: Some("NodeOperationError".to_string()),
        },
        node: NodeInfo {
            id: "node-1".to_string(),
            node_type: "n8n-nodes-base.code".to_string(),
            name: "Code".to_string(),
            parameters: json!({ "jsCode": "return $input.first().json.missing.json;" }),
            position: [250.0, 300.0],
        },
    }
}
