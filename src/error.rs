//! Error types for pomopanel.
//!
//! The timer core never fails; these errors come from the shell around it
//! (terminal setup, configuration files, output encoding, notifications).

use thiserror::Error;

/// Errors that can occur outside the timer state machine.
#[derive(Error, Debug)]
pub enum PanelError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or parsing failure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Terminal setup, drawing or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A notification could not be delivered.
    #[error("Notification error: {0}")]
    Notification(String),
}

impl From<serde_json::Error> for PanelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for PanelError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
