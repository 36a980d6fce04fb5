//! [`AssistantConfig`] and its persistence helpers.
//!
//! Sub-modules:
//! - `assistant_config`: the struct, its serde defaults and `validate`
//! - `persistence`     : YAML load/save and path resolution

mod assistant_config;
mod persistence;

pub use assistant_config::AssistantConfig;
