//! The session/phase state machine.
//!
//! [`apply`] is a pure function: it takes the whole [`TimerState`] plus one
//! [`Event`] and returns the next state and the notifications to emit. It
//! never schedules or cancels ticks; callers read `is_running` off the new
//! state and drive their tick source from that.

use tracing::{debug, info};

use crate::features::pomodoro::state::{Phase, Setting, TimerState, SECONDS_PER_MINUTE};
use crate::notify::{Notification, Severity};

/// Emitted when a work phase ends and a break begins.
pub const WORK_FINISHED: &str = "Work session finished! Take a break.";
/// Emitted when a break ends and the next work session begins.
pub const BREAK_FINISHED: &str = "Break finished! Back to work.";
/// Emitted when the final phase of the final session ends.
pub const ALL_COMPLETED: &str = "All sessions completed!";

/// Something that can happen to the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One second elapsed on the tick source.
    Tick,
    /// Start or pause.
    Toggle,
    /// Return to the first work session, paused.
    Reset,
    /// Raw text entered for a setting.
    Set {
        /// The setting being edited.
        setting: Setting,
        /// Unparsed input.
        raw: String,
    },
}

impl Event {
    /// Edit the work duration.
    #[must_use]
    pub fn set_work_duration(raw: impl Into<String>) -> Self {
        Self::Set {
            setting: Setting::WorkDuration,
            raw: raw.into(),
        }
    }

    /// Edit the break duration.
    #[must_use]
    pub fn set_break_duration(raw: impl Into<String>) -> Self {
        Self::Set {
            setting: Setting::BreakDuration,
            raw: raw.into(),
        }
    }

    /// Edit the number of sessions.
    #[must_use]
    pub fn set_total_sessions(raw: impl Into<String>) -> Self {
        Self::Set {
            setting: Setting::TotalSessions,
            raw: raw.into(),
        }
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the event.
    pub state: TimerState,
    /// Notifications to deliver, in order.
    pub notifications: Vec<Notification>,
}

impl Transition {
    fn quiet(state: TimerState) -> Self {
        Self {
            state,
            notifications: Vec::new(),
        }
    }
}

/// Apply `event` to `state`.
#[must_use]
pub fn apply(state: TimerState, event: &Event) -> Transition {
    match event {
        Event::Tick => tick(state),
        Event::Toggle => Transition::quiet(toggle(state)),
        Event::Reset => Transition::quiet(reset(state)),
        Event::Set { setting, raw } => Transition::quiet(set(state, *setting, raw)),
    }
}

/// Advance the countdown by one second.
///
/// The phase transition fires on the tick that brings the countdown to zero,
/// so a phase of `n` seconds ends after exactly `n` ticks. A tick on a paused
/// timer does nothing.
fn tick(mut state: TimerState) -> Transition {
    if !state.is_running {
        return Transition::quiet(state);
    }

    if state.time_left_seconds > 0 {
        state.time_left_seconds -= 1;
    }
    if state.time_left_seconds > 0 {
        return Transition::quiet(state);
    }

    expire(state)
}

/// Handle the active phase reaching zero.
fn expire(mut state: TimerState) -> Transition {
    let more_sessions = state.current_session < state.total_sessions;

    let message = match state.phase() {
        Phase::Work if more_sessions => {
            state.is_work_phase = false;
            state.time_left_seconds = state.break_seconds();
            WORK_FINISHED
        }
        Phase::Break if more_sessions => {
            state.is_work_phase = true;
            state.current_session += 1;
            state.time_left_seconds = state.work_seconds();
            BREAK_FINISHED
        }
        _ => {
            state = reset(state);
            ALL_COMPLETED
        }
    };

    info!(
        session = state.current_session,
        total = state.total_sessions,
        phase = ?state.phase(),
        "{message}"
    );

    Transition {
        state,
        notifications: vec![Notification::new(message, Severity::Success)],
    }
}

fn toggle(mut state: TimerState) -> TimerState {
    state.is_running = !state.is_running;
    state
}

/// Back to session 1, work phase, paused, full work countdown.
#[must_use]
pub fn reset(mut state: TimerState) -> TimerState {
    state.is_running = false;
    state.is_work_phase = true;
    state.current_session = 1;
    state.time_left_seconds = state.work_seconds();
    state
}

fn set(mut state: TimerState, setting: Setting, raw: &str) -> TimerState {
    let value = setting.normalize(raw);
    debug!(?setting, raw, value, "setting changed");

    match setting {
        Setting::WorkDuration => state.work_duration_minutes = value,
        Setting::BreakDuration => state.break_duration_minutes = value,
        Setting::TotalSessions => {
            state.total_sessions = value;
            if state.current_session > value {
                state.current_session = value;
            }
            return state;
        }
    }

    // Only an idle timer showing the edited phase picks up the new length.
    if state.phase().duration_setting() == setting && !state.is_running {
        state.time_left_seconds = value * SECONDS_PER_MINUTE;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: TimerState, event: &Event, times: u32) -> (TimerState, Vec<Notification>) {
        let mut state = state;
        let mut notes = Vec::new();
        for _ in 0..times {
            let t = apply(state, event);
            state = t.state;
            notes.extend(t.notifications);
        }
        (state, notes)
    }

    fn started(state: TimerState) -> TimerState {
        apply(state, &Event::Toggle).state
    }

    fn messages(notes: &[Notification]) -> Vec<&str> {
        notes.iter().map(|n| n.message.as_str()).collect()
    }

    #[test]
    fn test_tick_decrements() {
        let state = started(TimerState::default());
        let t = apply(state, &Event::Tick);
        assert_eq!(t.state.time_left_seconds, 1499);
        assert!(t.state.is_work_phase);
        assert!(t.notifications.is_empty());
    }

    #[test]
    fn test_tick_while_paused_does_nothing() {
        let state = TimerState::default();
        let t = apply(state, &Event::Tick);
        assert_eq!(t.state, state);
        assert!(t.notifications.is_empty());

        let mut zero = state;
        zero.time_left_seconds = 0;
        let t = apply(zero, &Event::Tick);
        assert_eq!(t.state, zero);
        assert!(t.notifications.is_empty());
    }

    #[test]
    fn test_single_session_completes_and_resets() {
        let state = apply(TimerState::default(), &Event::set_total_sessions("1")).state;
        let state = started(state);
        let ticks = state.work_seconds();

        let (end, notes) = run(state, &Event::Tick, ticks);

        assert_eq!(messages(&notes), vec![ALL_COMPLETED]);
        assert_eq!(end, reset(state));
        assert!(!end.is_running);
    }

    #[test]
    fn test_two_sessions_work_then_break() {
        let state = apply(TimerState::default(), &Event::set_total_sessions("2")).state;
        let state = started(apply(state, &Event::Reset).state);

        let (after_work, notes) = run(state, &Event::Tick, state.work_seconds());
        assert_eq!(messages(&notes), vec![WORK_FINISHED]);
        assert!(!after_work.is_work_phase);
        assert_eq!(after_work.time_left_seconds, after_work.break_seconds());
        assert_eq!(after_work.current_session, 1);
        assert!(after_work.is_running);

        let (after_break, notes) = run(after_work, &Event::Tick, after_work.break_seconds());
        assert_eq!(messages(&notes), vec![BREAK_FINISHED]);
        assert_eq!(after_break.current_session, 2);
        assert!(after_break.is_work_phase);
        assert_eq!(after_break.time_left_seconds, after_break.work_seconds());

        let (done, notes) = run(after_break, &Event::Tick, after_break.work_seconds());
        assert_eq!(messages(&notes), vec![ALL_COMPLETED]);
        assert_eq!(done, reset(done));
    }

    #[test]
    fn test_tick_at_zero_expires() {
        let mut state = started(TimerState::default());
        state.time_left_seconds = 0;
        let t = apply(state, &Event::Tick);
        assert_eq!(messages(&t.notifications), vec![WORK_FINISHED]);
        assert!(!t.state.is_work_phase);
    }

    #[test]
    fn test_notifications_are_success() {
        let mut state = started(TimerState::default());
        state.time_left_seconds = 1;
        let t = apply(state, &Event::Tick);
        assert_eq!(t.notifications.len(), 1);
        assert_eq!(t.notifications[0].severity, Severity::Success);
    }

    #[test]
    fn test_toggle_only_flips_running() {
        let mut state = TimerState::default();
        state.time_left_seconds = 42;
        state.current_session = 3;
        state.is_work_phase = false;

        let on = apply(state, &Event::Toggle).state;
        assert!(on.is_running);
        assert_eq!(on.time_left_seconds, 42);
        assert_eq!(on.current_session, 3);
        assert!(!on.is_work_phase);

        let off = apply(on, &Event::Toggle).state;
        assert_eq!(off, state);
    }

    #[test]
    fn test_reset() {
        let mut state = started(TimerState::default());
        state.current_session = 3;
        state.is_work_phase = false;
        state.time_left_seconds = 12;
        state.work_duration_minutes = 40;

        let t = apply(state, &Event::Reset);
        assert!(!t.state.is_running);
        assert!(t.state.is_work_phase);
        assert_eq!(t.state.current_session, 1);
        assert_eq!(t.state.time_left_seconds, 2400);
        assert_eq!(t.state.work_duration_minutes, 40);
        assert!(t.notifications.is_empty());
    }

    #[test]
    fn test_set_work_duration_clamps_and_defaults() {
        let state = TimerState::default();
        for (raw, expected) in [("1", 1), ("30", 30), ("60", 60), ("0", 1), ("75", 60)] {
            let t = apply(state, &Event::set_work_duration(raw));
            assert_eq!(t.state.work_duration_minutes, expected, "input {raw}");
        }

        let edited = apply(state, &Event::set_work_duration("40")).state;
        assert_eq!(apply(edited, &Event::set_work_duration("")).state.work_duration_minutes, 25);
        assert_eq!(apply(edited, &Event::set_work_duration("abc")).state.work_duration_minutes, 25);
    }

    #[test]
    fn test_set_break_duration_defaults_to_five() {
        let state = apply(TimerState::default(), &Event::set_break_duration("20")).state;
        assert_eq!(state.break_duration_minutes, 20);
        let state = apply(state, &Event::set_break_duration("nope")).state;
        assert_eq!(state.break_duration_minutes, 5);
        let state = apply(state, &Event::set_break_duration("31")).state;
        assert_eq!(state.break_duration_minutes, 30);
    }

    #[test]
    fn test_set_active_duration_while_idle_resets_countdown() {
        let state = apply(TimerState::default(), &Event::set_work_duration("10")).state;
        assert_eq!(state.time_left_seconds, 600);
    }

    #[test]
    fn test_set_active_duration_while_running_keeps_countdown() {
        let state = started(TimerState::default());
        let state = apply(state, &Event::Tick).state;
        let state = apply(state, &Event::set_work_duration("10")).state;
        assert_eq!(state.work_duration_minutes, 10);
        assert_eq!(state.time_left_seconds, 1499);
    }

    #[test]
    fn test_set_break_during_work_never_touches_countdown() {
        let idle = TimerState::default();
        let running = started(idle);
        for state in [idle, running] {
            let t = apply(state, &Event::set_break_duration("12"));
            assert_eq!(t.state.time_left_seconds, state.time_left_seconds);
            assert_eq!(t.state.break_duration_minutes, 12);
        }
    }

    #[test]
    fn test_set_break_during_idle_break_resets_countdown() {
        let mut state = TimerState::default();
        state.is_work_phase = false;
        state.time_left_seconds = 17;
        let t = apply(state, &Event::set_break_duration("8"));
        assert_eq!(t.state.time_left_seconds, 480);

        let t = apply(state, &Event::set_work_duration("8"));
        assert_eq!(t.state.time_left_seconds, 17);
    }

    #[test]
    fn test_set_total_sessions() {
        let state = TimerState::default();
        for (raw, expected) in [("1", 1), ("10", 10), ("0", 1), ("12", 10), ("", 4), ("?", 4)] {
            let t = apply(state, &Event::set_total_sessions(raw));
            assert_eq!(t.state.total_sessions, expected, "input {raw:?}");
        }
    }

    #[test]
    fn test_set_total_sessions_clamps_current_session() {
        let mut state = TimerState::default();
        state.total_sessions = 8;
        state.current_session = 6;

        let lowered = apply(state, &Event::set_total_sessions("3")).state;
        assert_eq!(lowered.total_sessions, 3);
        assert_eq!(lowered.current_session, 3);

        let raised = apply(state, &Event::set_total_sessions("9")).state;
        assert_eq!(raised.current_session, 6);
    }

    #[test]
    fn test_set_total_sessions_keeps_countdown() {
        let state = apply(TimerState::default(), &Event::set_work_duration("7")).state;
        let state = apply(state, &Event::set_total_sessions("2")).state;
        assert_eq!(state.time_left_seconds, 420);
    }

    #[test]
    fn test_break_expiry_on_final_session_completes() {
        // Lowering the session count during a break can leave the run on its
        // final session mid-break.
        let mut state = TimerState::default();
        state.current_session = 2;
        state.is_work_phase = false;
        state.time_left_seconds = 1;
        let state = apply(state, &Event::set_total_sessions("2")).state;
        let state = started(state);

        let t = apply(state, &Event::Tick);
        assert_eq!(messages(&t.notifications), vec![ALL_COMPLETED]);
        assert_eq!(t.state, reset(state));
    }
}
