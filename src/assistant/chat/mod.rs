//! Chat sub-system for the assistant panel.
//!
//! Sub-modules:
//! - [`types`]     : `ChatMessage`, `MessageBody` and the re-exported wire `Role`/`QuickReply`
//! - [`normalize`] : response payload → `ChatMessage` mapping
//! - [`transcript`]: `Transcript`: ordered messages plus unread bookkeeping

pub mod normalize;
mod transcript;
mod types;


// Re-export the public API so callers can use `chat::Transcript` etc.
pub use normalize::{normalize, normalize_value};
pub use transcript::Transcript;
pub use types::{ChatMessage, MessageBody, QuickReply, Role};
