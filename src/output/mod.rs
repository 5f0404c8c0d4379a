//! Output formatting for pomopanel.
//!
//! This module provides formatters for the non-interactive commands.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PanelError;
use crate::features::pomodoro::SimulationReport;

pub use json::*;
pub use pretty::*;

/// Format a simulation report based on output format
///
/// # Errors
///
/// Returns `PanelError::Parse` if JSON serialization fails.
pub fn format_simulation(
    report: &SimulationReport,
    format: OutputFormat,
) -> Result<String, PanelError> {
    match format {
        OutputFormat::Pretty => Ok(format_simulation_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns `PanelError::Parse` if serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, PanelError> {
    match format {
        OutputFormat::Pretty => format_config_pretty(config),
        OutputFormat::Json => to_json(config),
    }
}
