//! Notification delivery.
//!
//! The timer reports phase transitions as [`Notification`]s and hands them to
//! a [`Notifier`]. Delivery is fire-and-forget: failures are logged by the
//! caller and never reach the state machine.

mod desktop;

pub use desktop::DesktopNotifier;

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::NotificationConfig;
use crate::error::PanelError;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Something finished as expected.
    Success,
    /// Neutral information.
    Info,
}

impl Severity {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Text to show.
    pub message: String,
    /// Presentation hint.
    pub severity: Severity,
}

impl Notification {
    /// Create a notification.
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Accepts notifications from the timer.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Deliver one notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered.
    fn notify(&self, notification: &Notification) -> Result<(), PanelError>;
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), PanelError> {
        info!(severity = notification.severity.as_str(), "{}", notification.message);
        Ok(())
    }
}

/// Rings the terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellNotifier;

impl Notifier for BellNotifier {
    fn notify(&self, _notification: &Notification) -> Result<(), PanelError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Delivers each notification to every inner notifier.
///
/// Every notifier is attempted; the first error is returned.
#[derive(Default)]
pub struct Notifiers {
    inner: Vec<Box<dyn Notifier>>,
}

impl Notifiers {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notifier.
    #[must_use]
    pub fn with(mut self, notifier: impl Notifier + 'static) -> Self {
        self.inner.push(Box::new(notifier));
        self
    }

    /// Build the notifier set for the panel.
    ///
    /// Transitions are always logged; desktop and bell delivery are opt-in.
    #[must_use]
    pub fn from_config(config: &NotificationConfig) -> Self {
        let mut set = Self::new().with(LogNotifier);
        if config.desktop {
            set = set.with(DesktopNotifier::new());
        }
        if config.bell {
            set = set.with(BellNotifier);
        }
        set
    }

    /// Number of notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Notifier for Notifiers {
    fn notify(&self, notification: &Notification) -> Result<(), PanelError> {
        let mut first_error = None;
        for notifier in &self.inner {
            if let Err(e) = notifier.notify(notification) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
