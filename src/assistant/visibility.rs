//! Visibility gate: decides whether the assistant (and its entry-point
//! buttons) are shown at all.
//!
//! Both inputs live outside this crate and can change at any moment, so every
//! check reads them afresh. Nothing is cached.

use std::sync::Arc;

use flow_assist_config::AssistantConfig;

/// Experiment arm that enables the assistant.
pub const EXPERIMENT_VARIANT: &str = "variant";
/// Experiment arm that keeps the assistant hidden.
pub const EXPERIMENT_CONTROL: &str = "control";

/// Settings store exposing the assistant on/off switch.
pub trait SettingsSource {
    fn assistant_enabled(&self) -> bool;
}

/// Experiment-assignment service.
pub trait ExperimentSource {
    /// The arm this user is assigned to for `experiment`, if any.
    fn variant(&self, experiment: &str) -> Option<String>;
}

impl SettingsSource for AssistantConfig {
    fn assistant_enabled(&self) -> bool {
        self.assistant_enabled
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for &T {
    fn assistant_enabled(&self) -> bool {
        (**self).assistant_enabled()
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for Arc<T> {
    fn assistant_enabled(&self) -> bool {
        (**self).assistant_enabled()
    }
}

impl<T: ExperimentSource + ?Sized> ExperimentSource for &T {
    fn variant(&self, experiment: &str) -> Option<String> {
        (**self).variant(experiment)
    }
}

impl<T: ExperimentSource + ?Sized> ExperimentSource for Arc<T> {
    fn variant(&self, experiment: &str) -> Option<String> {
        (**self).variant(experiment)
    }
}

/// Combines the settings switch with the experiment assignment.
pub struct VisibilityGate<S, E> {
    settings: S,
    experiments: E,
    experiment_name: String,
}

impl<S: SettingsSource, E: ExperimentSource> VisibilityGate<S, E> {
    pub fn new(settings: S, experiments: E, experiment_name: impl Into<String>) -> Self {
        Self {
            settings,
            experiments,
            experiment_name: experiment_name.into(),
        }
    }

    /// Whether the assistant chat can be shown to this user.
    pub fn can_show_assistant(&self) -> bool {
        self.settings.assistant_enabled() && self.in_variant()
    }

    /// Whether the "ask assistant" buttons can be shown.
    ///
    /// Currently the same rule as [`Self::can_show_assistant`], evaluated on
    /// its own so the two can diverge.
    pub fn can_show_assistant_buttons(&self) -> bool {
        self.settings.assistant_enabled() && self.in_variant()
    }

    pub fn experiment_name(&self) -> &str {
        &self.experiment_name
    }

    fn in_variant(&self) -> bool {
        self.experiments
            .variant(&self.experiment_name)
            .is_some_and(|arm| arm == EXPERIMENT_VARIANT)
    }
}
