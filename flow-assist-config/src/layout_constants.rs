//! Layout constants for the assistant chat panel.
//!
//! These constants are defined here so that both the root crate
//! (`flow-assist`) and the config defaults reference the same values
//! without duplicating magic numbers.

/// Narrowest the chat panel may be resized to, in pixels.
pub const MIN_CHAT_WIDTH: f32 = 225.0;
/// Widest the chat panel may be resized to, in pixels.
pub const MAX_CHAT_WIDTH: f32 = 650.0;
/// Width of the chat panel before the user resizes it.
pub const DEFAULT_CHAT_WIDTH: f32 = 330.0;
