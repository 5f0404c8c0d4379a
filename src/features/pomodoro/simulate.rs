//! Headless run of a full Pomodoro cycle.
//!
//! Starts a reset timer and ticks the state machine until the run completes,
//! recording every transition with the simulated second it happened at.

use serde::Serialize;

use crate::features::pomodoro::machine::{apply, Event};
use crate::features::pomodoro::state::{Phase, TimerState};
use crate::notify::Severity;

/// One transition observed during a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatedTransition {
    /// Seconds since the run started.
    pub second: u64,
    /// Notification text.
    pub message: String,
    /// Notification severity.
    pub severity: Severity,
    /// Phase entered by the transition.
    pub phase: Phase,
    /// Session after the transition.
    pub session: u32,
}

/// Outcome of a simulated run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Normalized settings the run used.
    pub work_duration_minutes: u32,
    /// Normalized break length.
    pub break_duration_minutes: u32,
    /// Normalized session count.
    pub total_sessions: u32,
    /// Transitions in order; the last is always the completion.
    pub transitions: Vec<SimulatedTransition>,
    /// Length of the whole run in seconds.
    pub total_seconds: u64,
    /// State after completion (equal to a fresh reset).
    pub final_state: TimerState,
}

/// Run a complete cycle starting from `state`'s settings.
#[must_use]
pub fn simulate(state: TimerState) -> SimulationReport {
    let mut state = apply(state, &Event::Reset).state;
    let (work, brk, total) = (
        state.work_duration_minutes,
        state.break_duration_minutes,
        state.total_sessions,
    );
    state = apply(state, &Event::Toggle).state;

    let mut transitions = Vec::new();
    let mut second: u64 = 0;
    while state.is_running {
        let transition = apply(state, &Event::Tick);
        second += 1;
        state = transition.state;

        for notification in transition.notifications {
            transitions.push(SimulatedTransition {
                second,
                message: notification.message,
                severity: notification.severity,
                phase: state.phase(),
                session: state.current_session,
            });
        }
    }

    SimulationReport {
        work_duration_minutes: work,
        break_duration_minutes: brk,
        total_sessions: total,
        transitions,
        total_seconds: second,
        final_state: state,
    }
}
