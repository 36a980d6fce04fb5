//! State core for a workflow editor's AI assistant chat panel.
//!
//! The crate keeps the chat transcript, the backend session id and the
//! streaming flag, normalizes backend response payloads into renderable
//! messages, and tracks the panel's width and visibility. Network I/O is left
//! to an [`protocol::AssistantTransport`] implementation supplied by the host.
//!
//! Workspace layout:
//! - `flow-assist-protocol`: wire types and the transport seam (re-exported as [`protocol`])
//! - `flow-assist-config`: YAML-backed settings (re-exported as [`config`])

pub mod assistant;

pub use flow_assist_config as config;
pub use flow_assist_protocol as protocol;

pub use assistant::{
    AssistantError, ChatMessage, LayoutState, MessageBody, SessionController, Transcript,
    VisibilityGate,
};
