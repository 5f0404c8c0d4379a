//! The session timer: timer state plus notification delivery.
//!
//! [`SessionTimer`] feeds events through the pure state machine and hands
//! every resulting notification to its [`Notifier`]. It owns no tick source;
//! the caller reads [`SessionTimer::is_running`] after each dispatch and
//! starts or stops its ticker to match.

use tracing::warn;

use crate::features::pomodoro::format::{format_time, progress};
use crate::features::pomodoro::machine::{apply, Event};
use crate::features::pomodoro::state::{Setting, TimerState};
use crate::notify::{Notification, Notifier};

/// Owns the timer state for one panel session.
pub struct SessionTimer<N: Notifier> {
    state: TimerState,
    notifier: N,
}

impl<N: Notifier> SessionTimer<N> {
    /// Create a timer with default settings, reset and paused.
    #[must_use]
    pub fn new(notifier: N) -> Self {
        Self {
            state: TimerState::default(),
            notifier,
        }
    }

    /// Create a timer and apply startup settings as raw input.
    ///
    /// The values go through the same normalization as user edits.
    #[must_use]
    pub fn with_settings(notifier: N, work: &str, brk: &str, sessions: &str) -> Self {
        let mut timer = Self::new(notifier);
        timer.dispatch(&Event::set_work_duration(work));
        timer.dispatch(&Event::set_break_duration(brk));
        timer.dispatch(&Event::set_total_sessions(sessions));
        timer
    }

    /// Apply one event and deliver its notifications.
    ///
    /// Returns the notifications that were emitted, in order.
    pub fn dispatch(&mut self, event: &Event) -> Vec<Notification> {
        let transition = apply(self.state, event);
        self.state = transition.state;

        for notification in &transition.notifications {
            if let Err(e) = self.notifier.notify(notification) {
                warn!(error = %e, message = %notification.message, "notification failed");
            }
        }
        transition.notifications
    }

    /// One second elapsed.
    pub fn tick(&mut self) -> Vec<Notification> {
        self.dispatch(&Event::Tick)
    }

    /// Start or pause.
    pub fn toggle(&mut self) {
        self.dispatch(&Event::Toggle);
    }

    /// Back to the first work session, paused.
    pub fn reset(&mut self) {
        self.dispatch(&Event::Reset);
    }

    /// Edit a setting from raw text.
    pub fn set(&mut self, setting: Setting, raw: &str) {
        self.dispatch(&Event::Set {
            setting,
            raw: raw.to_string(),
        });
    }

    /// Edit the work duration.
    pub fn set_work_duration(&mut self, raw: &str) {
        self.set(Setting::WorkDuration, raw);
    }

    /// Edit the break duration.
    pub fn set_break_duration(&mut self, raw: &str) {
        self.set(Setting::BreakDuration, raw);
    }

    /// Edit the number of sessions.
    pub fn set_total_sessions(&mut self, raw: &str) {
        self.set(Setting::TotalSessions, raw);
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &TimerState {
        &self.state
    }

    /// Whether the tick source should be active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Overall run progress, 0-100.
    #[must_use]
    pub fn progress(&self) -> f64 {
        progress(&self.state)
    }

    /// Countdown as `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format_time(self.state.time_left_seconds)
    }
}
