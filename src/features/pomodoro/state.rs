//! Timer state and the user-editable settings that drive it.
//!
//! All setting input arrives as raw text (from a numeric field or a slider)
//! and is normalized here: unparseable text falls back to the setting's
//! default and everything else is clamped into range.

use serde::{Deserialize, Serialize};

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// A user-editable timer setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// Length of a work phase in minutes.
    WorkDuration,
    /// Length of a break phase in minutes.
    BreakDuration,
    /// Number of work sessions in a full run.
    TotalSessions,
}

impl Setting {
    /// All settings, in form order.
    pub const ALL: [Self; 3] = [Self::WorkDuration, Self::BreakDuration, Self::TotalSessions];

    /// Value used when the input is empty or not a number.
    #[must_use]
    pub const fn default_value(&self) -> u32 {
        match self {
            Self::WorkDuration => 25,
            Self::BreakDuration => 5,
            Self::TotalSessions => 4,
        }
    }

    /// Smallest accepted value.
    #[must_use]
    pub const fn min(&self) -> u32 {
        1
    }

    /// Largest accepted value.
    #[must_use]
    pub const fn max(&self) -> u32 {
        match self {
            Self::WorkDuration => 60,
            Self::BreakDuration => 30,
            Self::TotalSessions => 10,
        }
    }

    /// Form label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WorkDuration => "Work Duration (minutes)",
            Self::BreakDuration => "Break Duration (minutes)",
            Self::TotalSessions => "Number of Sessions",
        }
    }

    /// Clamp a parsed value into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: i64) -> u32 {
        let clamped = value.clamp(i64::from(self.min()), i64::from(self.max()));
        // In range of u32 after clamping.
        u32::try_from(clamped).unwrap_or(self.default_value())
    }

    /// Normalize raw input into a stored value.
    ///
    /// Empty or non-numeric input yields [`Setting::default_value`], never the
    /// previous value.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> u32 {
        parse_leading_int(raw).map_or(self.default_value(), |v| self.clamp(v))
    }
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace is skipped and an optional sign is accepted; parsing
/// stops at the first non-digit, so `"12abc"` is 12 and `"3.9"` is 3.
/// Returns `None` when no digit follows. Values that overflow saturate.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(d));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Which phase the timer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Focused work.
    Work,
    /// Rest between work phases.
    Break,
}

impl Phase {
    /// Heading shown above the countdown.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Work => "Work Session",
            Self::Break => "Break",
        }
    }

    /// Encouragement line shown under the controls.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Work => "Focus on your work!",
            Self::Break => "Take a break and relax.",
        }
    }

    /// The setting that controls this phase's length.
    #[must_use]
    pub const fn duration_setting(&self) -> Setting {
        match self {
            Self::Work => Setting::WorkDuration,
            Self::Break => Setting::BreakDuration,
        }
    }
}

/// Complete state of the session timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Work phase length, 1-60 minutes.
    pub work_duration_minutes: u32,
    /// Break phase length, 1-30 minutes.
    pub break_duration_minutes: u32,
    /// Sessions in a full run, 1-10.
    pub total_sessions: u32,
    /// 1-indexed, never above `total_sessions`.
    pub current_session: u32,
    /// Countdown for the active phase.
    pub time_left_seconds: u32,
    /// Whether the countdown is advancing.
    pub is_running: bool,
    /// True during work, false during a break.
    pub is_work_phase: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        let work = Setting::WorkDuration.default_value();
        Self {
            work_duration_minutes: work,
            break_duration_minutes: Setting::BreakDuration.default_value(),
            total_sessions: Setting::TotalSessions.default_value(),
            current_session: 1,
            time_left_seconds: work * SECONDS_PER_MINUTE,
            is_running: false,
            is_work_phase: true,
        }
    }
}

impl TimerState {
    /// The active phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_work_phase {
            Phase::Work
        } else {
            Phase::Break
        }
    }

    /// Full length of the work phase in seconds.
    #[must_use]
    pub const fn work_seconds(&self) -> u32 {
        self.work_duration_minutes * SECONDS_PER_MINUTE
    }

    /// Full length of the break phase in seconds.
    #[must_use]
    pub const fn break_seconds(&self) -> u32 {
        self.break_duration_minutes * SECONDS_PER_MINUTE
    }

    /// Current stored value of a setting.
    #[must_use]
    pub const fn setting(&self, setting: Setting) -> u32 {
        match setting {
            Setting::WorkDuration => self.work_duration_minutes,
            Setting::BreakDuration => self.break_duration_minutes,
            Setting::TotalSessions => self.total_sessions,
        }
    }

    /// Whether this is the last session of the run.
    #[must_use]
    pub const fn is_final_session(&self) -> bool {
        self.current_session >= self.total_sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = TimerState::default();
        assert_eq!(state.work_duration_minutes, 25);
        assert_eq!(state.break_duration_minutes, 5);
        assert_eq!(state.total_sessions, 4);
        assert_eq!(state.current_session, 1);
        assert_eq!(state.time_left_seconds, 1500);
        assert!(!state.is_running);
        assert!(state.is_work_phase);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_parse_leading_int_invalid() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("  "), None);
    }

    #[test]
    fn test_normalize_clamps() {
        assert_eq!(Setting::WorkDuration.normalize("0"), 1);
        assert_eq!(Setting::WorkDuration.normalize("61"), 60);
        assert_eq!(Setting::BreakDuration.normalize("45"), 30);
        assert_eq!(Setting::TotalSessions.normalize("-2"), 1);
        assert_eq!(Setting::TotalSessions.normalize("11"), 10);
        assert_eq!(Setting::WorkDuration.normalize("99999999999999999999"), 60);
    }

    #[test]
    fn test_normalize_defaults() {
        assert_eq!(Setting::WorkDuration.normalize(""), 25);
        assert_eq!(Setting::WorkDuration.normalize("abc"), 25);
        assert_eq!(Setting::BreakDuration.normalize(""), 5);
        assert_eq!(Setting::TotalSessions.normalize("x"), 4);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::Work.heading(), "Work Session");
        assert_eq!(Phase::Break.heading(), "Break");
        assert_eq!(Phase::Work.hint(), "Focus on your work!");
        assert_eq!(Phase::Break.duration_setting(), Setting::BreakDuration);
    }
}
