//! Simulate command implementation.
//!
//! Runs a full cycle through the state machine without a terminal.

use tracing::debug;

use crate::cli::args::{OutputFormat, TimerArgs};
use crate::cli::commands::initial_state;
use crate::config::Config;
use crate::error::PanelError;
use crate::features::pomodoro;
use crate::output::format_simulation;

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn simulate(
    config: &Config,
    args: &TimerArgs,
    format: OutputFormat,
) -> Result<String, PanelError> {
    let state = initial_state(&config.timer, args);
    debug!(?state, "simulating run");

    let report = pomodoro::simulate(state);
    format_simulation(&report, format)
}
