//! Config command implementation.

use colored::Colorize;
use tracing::info;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PanelError;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read, parsed or written.
pub fn config(
    paths: &Paths,
    cmd: &ConfigCommands,
    format: OutputFormat,
) -> Result<String, PanelError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            format_config(&config, format)
        }

        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "config_file": paths.config_file,
                "exists": paths.config_file.exists(),
            })),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },

        ConfigCommands::Init { force } => init(paths, *force, format),
    }
}

/// Write a default config file.
fn init(paths: &Paths, force: bool, format: OutputFormat) -> Result<String, PanelError> {
    if paths.config_file.exists() && !force {
        return Err(PanelError::Config(format!(
            "Config file already exists: {}. Use --force to overwrite.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    info!(path = %paths.config_file.display(), "wrote default config");

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "config_file": paths.config_file,
            "written": true,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Wrote default config to".green(),
            paths.config_file.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("pomo"));

        config(&paths, &ConfigCommands::Init { force: false }, OutputFormat::Pretty).unwrap();

        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "timer:\n  total_sessions: 2\n").unwrap();

        let result = config(&paths, &ConfigCommands::Init { force: false }, OutputFormat::Pretty);
        assert!(matches!(result, Err(PanelError::Config(_))));

        config(&paths, &ConfigCommands::Init { force: true }, OutputFormat::Pretty).unwrap();
        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded.timer.total_sessions, 4);
    }

    #[test]
    fn test_show_json() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "notifications:\n  bell: true\n").unwrap();

        let output = config(&paths, &ConfigCommands::Show, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["notifications"]["bell"], true);
        assert_eq!(value["timer"]["work_duration_minutes"], 25);
    }
}
