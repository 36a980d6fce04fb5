//! Chat panel layout state: width within fixed bounds and the open flag.
//!
//! Independent of the transcript; nothing here reads or writes chat state.

use flow_assist_config::{AssistantConfig, DEFAULT_CHAT_WIDTH, MAX_CHAT_WIDTH, MIN_CHAT_WIDTH};

/// Width and visibility of the assistant side panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    /// Panel width in pixels, always within `[MIN_CHAT_WIDTH, MAX_CHAT_WIDTH]`.
    chat_width: f32,
    chat_window_open: bool,
}

impl LayoutState {
    /// Closed panel at the default width.
    pub fn new() -> Self {
        Self {
            chat_width: DEFAULT_CHAT_WIDTH,
            chat_window_open: false,
        }
    }

    /// Initial layout from config. The configured width is clamped like any
    /// other request.
    pub fn from_config(config: &AssistantConfig) -> Self {
        let mut layout = Self::new();
        layout.update_window_width(config.chat_width);
        layout.chat_window_open = config.chat_open_on_startup;
        layout
    }

    /// Resize the panel. Out-of-range requests are clamped, never rejected.
    pub fn update_window_width(&mut self, requested: f32) {
        self.chat_width = clamp_chat_width(requested);
    }

    pub fn open_chat(&mut self) {
        self.chat_window_open = true;
    }

    pub fn close_chat(&mut self) {
        self.chat_window_open = false;
    }

    /// Toggle the panel open/closed.
    ///
    /// Returns `true` if the panel was just opened.
    pub fn toggle_chat(&mut self) -> bool {
        self.chat_window_open = !self.chat_window_open;
        self.chat_window_open
    }

    pub fn chat_width(&self) -> f32 {
        self.chat_width
    }

    pub fn is_chat_window_open(&self) -> bool {
        self.chat_window_open
    }

    /// Returns the width the panel takes from the editor canvas (0 if closed).
    pub fn consumed_width(&self) -> f32 {
        if self.chat_window_open {
            self.chat_width
        } else {
            0.0
        }
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a requested width into the panel bounds. NaN maps to the minimum.
pub fn clamp_chat_width(requested: f32) -> f32 {
    if requested.is_nan() {
        log::debug!("Ignoring NaN chat width, using minimum");
        return MIN_CHAT_WIDTH;
    }
    requested.clamp(MIN_CHAT_WIDTH, MAX_CHAT_WIDTH)
}
