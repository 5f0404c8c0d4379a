//! Application state for the TUI.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::config::{StartTab, UiConfig};
use crate::features::pomodoro::{SessionTimer, Setting, Ticker};
use crate::notify::{Notification, Notifier, Severity};

/// Panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Countdown and controls.
    Timer,
    /// Settings form.
    Settings,
}

impl Tab {
    /// Tab titles in display order.
    pub const TITLES: [&'static str; 2] = ["Timer", "Settings"];

    /// Position in [`Tab::TITLES`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Timer => 0,
            Self::Settings => 1,
        }
    }

    /// The other tab.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Timer => Self::Settings,
            Self::Settings => Self::Timer,
        }
    }
}

impl From<StartTab> for Tab {
    fn from(tab: StartTab) -> Self {
        match tab {
            StartTab::Timer => Self::Timer,
            StartTab::Settings => Self::Settings,
        }
    }
}

/// A notification shown in the status line for a while.
#[derive(Debug, Clone)]
pub struct Toast {
    /// The notification.
    pub notification: Notification,
    /// Wall-clock time it was raised.
    pub shown_at: DateTime<Local>,
    expires: Instant,
}

/// Application state.
pub struct App<N: Notifier> {
    /// The session timer.
    pub timer: SessionTimer<N>,
    /// The single tick source.
    pub ticker: Ticker,
    /// Active tab.
    pub tab: Tab,
    /// Selected setting on the Settings tab.
    pub selected: usize,
    /// Text being typed into the selected setting, if any.
    pub input: Option<String>,
    /// Current toast.
    pub toast: Option<Toast>,
    /// Whether the app should quit.
    pub should_quit: bool,
    toast_duration: Duration,
}

impl<N: Notifier> App<N> {
    /// Create a new app instance.
    #[must_use]
    pub fn new(timer: SessionTimer<N>, ui: &UiConfig) -> Self {
        Self {
            timer,
            ticker: Ticker::default(),
            tab: ui.start_tab.into(),
            selected: 0,
            input: None,
            toast: None,
            should_quit: false,
            toast_duration: ui.toast_duration(),
        }
    }

    /// Start or pause the timer.
    pub fn toggle(&mut self, now: Instant) {
        self.timer.toggle();
        self.ticker.sync(self.timer.is_running(), now);
    }

    /// Reset the timer.
    pub fn reset(&mut self, now: Instant) {
        self.timer.reset();
        self.ticker.sync(self.timer.is_running(), now);
    }

    /// Deliver every tick that is due at `now`.
    pub fn on_tick(&mut self, now: Instant) {
        for _ in 0..self.ticker.due(now) {
            let notifications = self.timer.tick();
            for notification in notifications {
                self.show_toast(notification, now);
            }
            // Completion pauses the timer; drop any remaining catch-up ticks.
            if !self.timer.is_running() {
                break;
            }
        }
        self.ticker.sync(self.timer.is_running(), now);
        self.expire_toast(now);
    }

    /// How long the event loop may block before the next tick is due.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        self.ticker
            .until_next(now)
            .map_or(tick_rate, |until| until.min(tick_rate))
    }

    /// Show a toast.
    pub fn show_toast(&mut self, notification: Notification, now: Instant) {
        self.toast = Some(Toast {
            notification,
            shown_at: Local::now(),
            expires: now + self.toast_duration,
        });
    }

    /// Show an informational message.
    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.show_toast(Notification::new(message, Severity::Info), now);
    }

    fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.expires <= now) {
            self.toast = None;
        }
    }

    /// Switch to the other tab.
    pub fn next_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    /// Switch to a tab, discarding any unfinished input.
    pub fn select_tab(&mut self, tab: Tab) {
        self.input = None;
        self.tab = tab;
    }

    /// The setting under the cursor.
    #[must_use]
    pub const fn selected_setting(&self) -> Setting {
        Setting::ALL[self.selected]
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        self.input = None;
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        self.input = None;
        if self.selected < Setting::ALL.len() - 1 {
            self.selected += 1;
        }
    }

    /// Move the selected setting's slider by `delta`.
    pub fn slide(&mut self, delta: i64) {
        self.input = None;
        let setting = self.selected_setting();
        let current = i64::from(self.timer.state().setting(setting));
        let target = setting.clamp(current + delta);
        self.timer.set(setting, &target.to_string());
    }

    /// Append a character to the input buffer.
    pub fn push_input(&mut self, c: char) {
        let buffer = self.input.get_or_insert_with(String::new);
        if buffer.len() < 4 {
            buffer.push(c);
        }
    }

    /// Delete the last input character.
    ///
    /// Starts editing from the current value when not already editing.
    pub fn backspace(&mut self) {
        let setting = self.selected_setting();
        let current = self.timer.state().setting(setting);
        let buffer = self
            .input
            .get_or_insert_with(|| current.to_string());
        buffer.pop();
    }

    /// Apply the typed text to the selected setting.
    ///
    /// Empty text is applied as-is and falls back to the setting's default.
    pub fn commit_input(&mut self) {
        if let Some(raw) = self.input.take() {
            self.timer.set(self.selected_setting(), &raw);
        }
    }

    /// Discard the typed text.
    pub fn cancel_input(&mut self) {
        self.input = None;
    }

    /// Whether text is being typed.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    /// Stop the ticker and mark the app for exit.
    pub fn quit(&mut self) {
        self.ticker.stop();
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::LogNotifier;

    fn app() -> App<LogNotifier> {
        App::new(SessionTimer::new(LogNotifier), &UiConfig::default())
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_toggle_drives_ticker() {
        let mut app = app();
        let start = Instant::now();
        assert!(!app.ticker.is_active());

        app.toggle(start);
        assert!(app.ticker.is_active());

        app.toggle(start + secs(1));
        assert!(!app.ticker.is_active());
    }

    #[test]
    fn test_on_tick_counts_down_once_per_second() {
        let mut app = app();
        let start = Instant::now();
        app.toggle(start);

        app.on_tick(start + Duration::from_millis(500));
        assert_eq!(app.timer.display(), "25:00");
        app.on_tick(start + secs(1));
        assert_eq!(app.timer.display(), "24:59");
        // A second poll at the same instant must not double-advance.
        app.on_tick(start + secs(1));
        assert_eq!(app.timer.display(), "24:59");
        app.on_tick(start + secs(3));
        assert_eq!(app.timer.display(), "24:57");
    }

    #[test]
    fn test_settings_edit_while_running_keeps_single_ticker() {
        let mut app = app();
        let start = Instant::now();
        app.toggle(start);
        app.tab = Tab::Settings;
        app.slide(1);
        app.slide(1);

        app.on_tick(start + secs(1));
        assert_eq!(app.timer.state().time_left_seconds, 1499);
        assert_eq!(app.timer.state().work_duration_minutes, 27);
    }

    #[test]
    fn test_transition_shows_toast_and_completion_stops_ticker() {
        let mut app = app();
        app.timer.set_work_duration("1");
        app.timer.set_total_sessions("1");
        let start = Instant::now();
        app.toggle(start);

        app.on_tick(start + secs(60));
        let toast = app.toast.as_ref().map(|t| t.notification.message.clone());
        assert_eq!(toast.as_deref(), Some("All sessions completed!"));
        assert!(!app.timer.is_running());
        assert!(!app.ticker.is_active());
        assert_eq!(app.timer.display(), "01:00");
    }

    #[test]
    fn test_catch_up_stops_at_completion() {
        let mut app = app();
        app.timer.set_work_duration("1");
        app.timer.set_total_sessions("1");
        let start = Instant::now();
        app.toggle(start);

        // Far behind: only one run may complete.
        app.on_tick(start + secs(200));
        assert!(!app.timer.is_running());
        assert_eq!(app.timer.state().time_left_seconds, 60);
    }

    #[test]
    fn test_toast_expires() {
        let mut app = app();
        let start = Instant::now();
        app.info("hello", start);
        app.on_tick(start + secs(1));
        assert!(app.toast.is_some());
        app.on_tick(start + secs(10));
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_huge_toast_setting_does_not_overflow() {
        let config: crate::config::Config =
            serde_yaml::from_str("ui:\n  toast_seconds: 18446744073709551615\n").unwrap();
        let mut app = App::new(SessionTimer::new(LogNotifier), &config.ui);
        let start = Instant::now();

        app.info("Timer reset", start);
        app.on_tick(start + secs(60));
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_slide_clamps() {
        let mut app = app();
        app.selected = 2;
        for _ in 0..20 {
            app.slide(1);
        }
        assert_eq!(app.timer.state().total_sessions, 10);
        for _ in 0..20 {
            app.slide(-1);
        }
        assert_eq!(app.timer.state().total_sessions, 1);
    }

    #[test]
    fn test_typed_input_commits_through_setter() {
        let mut app = app();
        app.select_next();
        assert_eq!(app.selected_setting(), Setting::BreakDuration);

        app.push_input('4');
        app.push_input('5');
        app.commit_input();
        assert_eq!(app.timer.state().break_duration_minutes, 30);
        assert!(!app.is_editing());
    }

    #[test]
    fn test_empty_commit_falls_back_to_default() {
        let mut app = app();
        app.timer.set_work_duration("40");
        app.backspace();
        app.backspace();
        assert_eq!(app.input.as_deref(), Some(""));
        app.commit_input();
        assert_eq!(app.timer.state().work_duration_minutes, 25);
    }

    #[test]
    fn test_cancel_input() {
        let mut app = app();
        app.push_input('9');
        app.cancel_input();
        app.commit_input();
        assert_eq!(app.timer.state().work_duration_minutes, 25);
    }

    #[test]
    fn test_tabs() {
        let mut app = app();
        assert_eq!(app.tab, Tab::Timer);
        app.push_input('1');
        app.next_tab();
        assert_eq!(app.tab, Tab::Settings);
        assert!(!app.is_editing());

        let ui = UiConfig {
            start_tab: StartTab::Settings,
            ..UiConfig::default()
        };
        let app = App::new(SessionTimer::new(LogNotifier), &ui);
        assert_eq!(app.tab, Tab::Settings);
    }

    #[test]
    fn test_poll_timeout() {
        let mut app = app();
        let start = Instant::now();
        let rate = Duration::from_millis(250);
        assert_eq!(app.poll_timeout(start, rate), rate);

        app.toggle(start);
        assert_eq!(
            app.poll_timeout(start + Duration::from_millis(900), rate),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn test_quit_stops_ticker() {
        let mut app = app();
        app.toggle(Instant::now());
        app.quit();
        assert!(app.should_quit);
        assert!(!app.ticker.is_active());
    }
}
