//! Configuration system for the flow-assist chat panel.
//!
//! This crate provides configuration loading, saving, and default values
//! for the assistant panel. It includes:
//!
//! - [`AssistantConfig`]: panel layout, feature gate and session settings
//! - [`layout_constants`]: chat panel width bounds shared with the root crate
//! - [`ConfigError`]: typed failures for config I/O and validation

pub mod config;
pub mod error;
pub mod layout_constants;

// Re-export main types for convenience
pub use config::AssistantConfig;
pub use error::ConfigError;
pub use layout_constants::{DEFAULT_CHAT_WIDTH, MAX_CHAT_WIDTH, MIN_CHAT_WIDTH};
