//! Countdown formatting and run progress.

use chrono::Duration;

use crate::features::pomodoro::state::TimerState;

/// Format seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so 3600 seconds is `60:00`.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// Overall progress through the run as a percentage (0.0 - 100.0).
///
/// Completed sessions count fully. During a work phase the current session
/// counts by elapsed work time; during a break it counts as complete.
#[must_use]
pub fn progress(state: &TimerState) -> f64 {
    let completed = f64::from(state.current_session.saturating_sub(1));
    let portion = if state.is_work_phase {
        let total = f64::from(state.work_seconds());
        if total == 0.0 {
            1.0
        } else {
            1.0 - f64::from(state.time_left_seconds) / total
        }
    } else {
        1.0
    };

    let value = (completed + portion) / f64::from(state.total_sessions.max(1)) * 100.0;
    value.clamp(0.0, 100.0)
}

/// Positions of the session boundary markers, as percentages.
///
/// There are `total_sessions - 1` markers, evenly spaced.
#[must_use]
pub fn session_markers(total_sessions: u32) -> Vec<f64> {
    let total = f64::from(total_sessions.max(1));
    (1..total_sessions).map(|i| f64::from(i) / total * 100.0).collect()
}

/// Render a progress bar with session boundary markers.
///
/// `percent` is 0-100. Marker cells are drawn as `|` over the fill.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(percent: f64, total_sessions: u32, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut cells: Vec<char> = (0..width)
        .map(|i| if i < filled { '█' } else { '░' })
        .collect();

    for marker in session_markers(total_sessions) {
        let index = ((marker / 100.0) * width as f64).round() as usize;
        if let Some(cell) = cells.get_mut(index) {
            *cell = '|';
        }
    }

    format!("[{}]", cells.into_iter().collect::<String>())
}
