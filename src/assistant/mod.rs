//! The assistant panel's state core.
//!
//! Sub-modules:
//! - [`chat`]: transcript message model, payload normalization and the transcript
//! - [`session`]: [`SessionController`], which drives exchanges with the backend
//! - [`layout`]: panel width and open/closed state
//! - [`visibility`]: whether the assistant is offered to this user at all
//! - [`error`]: [`AssistantError`]

pub mod chat;
pub mod error;
pub mod layout;
pub mod session;
pub mod visibility;

pub use chat::{ChatMessage, MessageBody, QuickReply, Role, Transcript};
pub use error::AssistantError;
pub use layout::{LayoutState, clamp_chat_width};
pub use session::SessionController;
pub use visibility::{
    EXPERIMENT_CONTROL, EXPERIMENT_VARIANT, ExperimentSource, SettingsSource, VisibilityGate,
};
