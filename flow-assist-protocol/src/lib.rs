//! flow-assist-protocol: wire types for the workflow assistant backend.
//!
//! This crate models the JSON exchanged with the assistant service and the
//! seam through which the state core talks to it. It owns no I/O: concrete
//! HTTP/streaming clients implement [`AssistantTransport`] elsewhere.
//!
//! # Architecture
//!
//! - [`response`] - Response payload kinds (`message`, `code-diff`, `summary`,
//!   `agent-suggestion`) with discriminator dispatch
//! - [`request`] - Outgoing chat requests and the node error context
//! - [`transport`] - The [`AssistantTransport`] trait and [`AssistantReply`]
//! - [`error`] - [`PayloadError`] and [`TransportError`]

pub mod error;
pub mod request;
pub mod response;
pub mod transport;

// Re-export the main public types at the crate root for convenience
pub use error::{PayloadError, TransportError};
pub use request::{ChatRequest, ErrorContext, NodeErrorInfo, NodeInfo, UserInfo};
pub use response::{
    AgentSuggestionResponse, CodeDiffResponse, QuickReply, ResponsePayload, Role,
    SummaryResponse, TextResponse,
};
pub use transport::{AssistantReply, AssistantTransport};
