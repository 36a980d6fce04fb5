//! Typed errors for the assistant state core.
//!
//! None of these leave the store inconsistent: transcript length, session id
//! and the streaming flag are always well-defined after a failed call.

use thiserror::Error;

use flow_assist_protocol::{PayloadError, TransportError};

/// Failures surfaced by the normalizer and the session controller.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The backend sent a payload kind the normalizer has no mapping for.
    #[error("unknown assistant message type '{kind}'")]
    UnknownMessageType { kind: String },

    /// A known payload kind arrived with a malformed body.
    #[error(transparent)]
    InvalidPayload(#[from] PayloadError),

    /// The session-start or follow-up call to the backend failed.
    #[error("assistant transport failed: {0}")]
    Transport(#[from] TransportError),

    /// Some messages of a batch were rejected; the rest were appended.
    #[error("{} assistant message(s) rejected, {appended} appended", .rejected.len())]
    PartialBatch {
        appended: usize,
        rejected: Vec<AssistantError>,
    },

    /// A follow-up was attempted before any session was opened.
    #[error("no active assistant session")]
    NoActiveSession,
}

impl AssistantError {
    /// Check if this is an unknown message type error
    pub fn is_unknown_message_type(&self) -> bool {
        matches!(self, Self::UnknownMessageType { .. })
    }

    /// Check if this is a transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
