//! Command implementations for pomopanel.
//!
//! This module contains the implementation of the non-interactive commands.

mod config;
mod simulate;

pub use config::config;
pub use simulate::simulate;

use crate::cli::args::TimerArgs;
use crate::config::TimerConfig;
use crate::features::pomodoro::{apply, Event, TimerState};

/// Build the startup timer state.
///
/// Command-line values win over the config file. Both go through the same
/// normalization as panel input, so the result is always in range.
#[must_use]
pub fn initial_state(config: &TimerConfig, args: &TimerArgs) -> TimerState {
    let [work, brk, sessions] = startup_settings(config, args);
    [
        Event::set_work_duration(work),
        Event::set_break_duration(brk),
        Event::set_total_sessions(sessions),
    ]
    .iter()
    .fold(TimerState::default(), |state, event| apply(state, event).state)
}

/// Raw startup values for work, break and sessions, in that order.
#[must_use]
pub fn startup_settings(config: &TimerConfig, args: &TimerArgs) -> [String; 3] {
    [
        args.work
            .clone()
            .unwrap_or_else(|| config.work_duration_minutes.to_string()),
        args.brk
            .clone()
            .unwrap_or_else(|| config.break_duration_minutes.to_string()),
        args.sessions
            .clone()
            .unwrap_or_else(|| config.total_sessions.to_string()),
    ]
}
