//! [`AssistantConfig`]: assistant chat panel settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout_constants::DEFAULT_CHAT_WIDTH;

/// Configuration for the assistant chat panel.
///
/// Every field carries a serde default so partial YAML files (or an empty
/// one) load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Settings-level switch for the assistant. Combined with the experiment
    /// assignment by the visibility gate.
    #[serde(default = "default_assistant_enabled")]
    pub assistant_enabled: bool,

    /// Initial width of the chat panel in pixels (clamped on use)
    #[serde(default = "default_chat_width")]
    pub chat_width: f32,

    /// Open the chat panel automatically on startup
    #[serde(default = "default_chat_open_on_startup")]
    pub chat_open_on_startup: bool,

    /// Name of the experiment whose assignment gates the assistant
    #[serde(default = "default_experiment_name")]
    pub experiment_name: String,

    /// Text of the placeholder message shown while the error helper session opens
    #[serde(default = "default_error_helper_placeholder")]
    pub error_helper_placeholder: String,

    /// First name sent to the backend when a session starts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_first_name: Option<String>,
}

// ── Default value functions ────────────────────────────────────────────────

fn default_assistant_enabled() -> bool {
    true
}

fn default_chat_width() -> f32 {
    DEFAULT_CHAT_WIDTH
}

fn default_chat_open_on_startup() -> bool {
    false
}

fn default_experiment_name() -> String {
    "021_ai_debug_helper".to_string()
}

fn default_error_helper_placeholder() -> String {
    "Analyzing the error...".to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            assistant_enabled: default_assistant_enabled(),
            chat_width: default_chat_width(),
            chat_open_on_startup: default_chat_open_on_startup(),
            experiment_name: default_experiment_name(),
            error_helper_placeholder: default_error_helper_placeholder(),
            user_first_name: None,
        }
    }
}

impl AssistantConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial chat width (builder style).
    pub fn with_chat_width(mut self, width: f32) -> Self {
        self.chat_width = width;
        self
    }

    /// Set the settings-level assistant switch (builder style).
    pub fn with_assistant_enabled(mut self, enabled: bool) -> Self {
        self.assistant_enabled = enabled;
        self
    }

    /// Check semantic constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.chat_width.is_finite() {
            return Err(ConfigError::Validation(format!(
                "chat_width must be a finite number, got {}",
                self.chat_width
            )));
        }
        if self.experiment_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "experiment_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
