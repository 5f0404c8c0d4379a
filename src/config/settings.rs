//! Configuration settings for pomopanel.
//!
//! Settings are loaded from `~/.pomopanel/config.yaml`. They only seed the
//! timer at startup; nothing the panel does at runtime is written back.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Startup timer settings.
    pub timer: TimerConfig,
    /// Notification delivery.
    pub notifications: NotificationConfig,
    /// Panel behavior.
    pub ui: UiConfig,
}

/// Startup values for the timer.
///
/// Out-of-range values are clamped the same way user edits are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work phase length in minutes.
    #[serde(default = "default_work_duration")]
    pub work_duration_minutes: i64,
    /// Break phase length in minutes.
    #[serde(default = "default_break_duration")]
    pub break_duration_minutes: i64,
    /// Number of sessions in a run.
    #[serde(default = "default_total_sessions")]
    pub total_sessions: i64,
}

/// Notification delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Also raise a desktop notification on each transition.
    pub desktop: bool,
    /// Ring the terminal bell on each transition.
    pub bell: bool,
}

/// Which tab the panel opens on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StartTab {
    /// Countdown and controls.
    #[default]
    Timer,
    /// Settings form.
    Settings,
}

/// Panel behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for input before redrawing, in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Tab shown at startup.
    #[serde(default)]
    pub start_tab: StartTab,
    /// How long a toast stays in the status line, in seconds.
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
}

// Default value functions for serde
const fn default_work_duration() -> i64 {
    25
}

const fn default_break_duration() -> i64 {
    5
}

const fn default_total_sessions() -> i64 {
    4
}

const fn default_tick_rate() -> u64 {
    250
}

const fn default_toast_seconds() -> u64 {
    4
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_duration_minutes: default_work_duration(),
            break_duration_minutes: default_break_duration(),
            total_sessions: default_total_sessions(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            start_tab: StartTab::default(),
            toast_seconds: default_toast_seconds(),
        }
    }
}

/// Shortest accepted event poll interval, in milliseconds.
pub const MIN_TICK_RATE_MS: u64 = 10;

/// Longest a toast may stay up, in seconds.
pub const MAX_TOAST_SECONDS: u64 = 3600;

impl UiConfig {
    /// Event poll interval, raised to [`MIN_TICK_RATE_MS`].
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    /// Toast lifetime, capped at [`MAX_TOAST_SECONDS`].
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_seconds.min(MAX_TOAST_SECONDS))
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PanelError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PanelError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PanelError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PanelError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PanelError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PanelError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
