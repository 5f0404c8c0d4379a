//! Desktop notifications through the platform notification service.

use notify_rust::Notification as DesktopNotification;

use crate::error::PanelError;
use crate::notify::{Notification, Notifier};

/// Summary line used for every desktop notification.
const SUMMARY: &str = "Pomodoro";

/// Sends notifications to the desktop.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    summary: String,
}

impl DesktopNotifier {
    /// Create a notifier with the default summary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            summary: SUMMARY.to_string(),
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), PanelError> {
        DesktopNotification::new()
            .summary(&self.summary)
            .body(&notification.message)
            .show()
            .map_err(|e| PanelError::Notification(e.to_string()))?;
        Ok(())
    }
}
