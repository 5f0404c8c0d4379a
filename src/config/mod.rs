//! Configuration management for pomopanel.
//!
//! This module handles loading and saving configuration from `~/.pomopanel/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, NotificationConfig, StartTab, TimerConfig, UiConfig};
