use colored::Colorize;

use crate::config::Config;
use crate::error::PanelError;
use crate::features::pomodoro::{format_duration, format_time, Phase, SimulationReport};

/// Format a simulation report as a timeline
pub fn format_simulation_pretty(report: &SimulationReport) -> String {
    let mut output = format!(
        "Simulated run: {}min work / {}min break x {} session{}\n",
        report.work_duration_minutes,
        report.break_duration_minutes,
        report.total_sessions,
        if report.total_sessions == 1 { "" } else { "s" }
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for t in &report.transitions {
        let clock = format_elapsed(t.second);
        let phase = match t.phase {
            Phase::Work => "work ".red(),
            Phase::Break => "break".green(),
        };
        output.push_str(&format!(
            "{}  {}  session {}  {}\n",
            clock.dimmed(),
            phase,
            t.session,
            t.message.bold()
        ));
    }

    output.push_str(&"─".repeat(60));
    output.push('\n');
    #[allow(clippy::cast_possible_wrap)]
    let total = chrono::Duration::seconds(report.total_seconds as i64);
    output.push_str(&format!("Total: {}", format_duration(total).cyan()));
    output
}

/// Elapsed seconds as `H:MM:SS` once past an hour, `MM:SS` before.
fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let rest = u32::try_from(seconds % 3600).unwrap_or(0);
    if hours > 0 {
        format!("{hours}:{}", format_time(rest))
    } else {
        format_time(rest)
    }
}

/// Format the effective configuration as YAML
///
/// # Errors
///
/// Returns `PanelError::Parse` if YAML serialization fails.
pub fn format_config_pretty(config: &Config) -> Result<String, PanelError> {
    let yaml = serde_yaml::to_string(config)?;
    Ok(yaml.trim_end().to_string())
}
