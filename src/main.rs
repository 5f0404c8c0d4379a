use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pomopanel::cli::args::{Cli, Commands, OutputFormat, TimerArgs};
use pomopanel::cli::commands;
use pomopanel::config::{Config, Paths};
use pomopanel::features::pomodoro::{format_time, SessionTimer};
use pomopanel::notify::Notifiers;
use pomopanel::output::to_json;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = cli
        .config
        .clone()
        .map_or_else(Paths::default, Paths::for_config_file);
    let format = cli.output;
    let verbose_level = cli.log_level();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Tui(TimerArgs::default()));

    // The panel owns the terminal, so its logs go to a file.
    let interactive = matches!(command, Commands::Tui(_));
    let level = match (interactive, cli.verbose) {
        (false, 0) => "warn",
        _ => verbose_level,
    };
    init_logging(&paths, level, interactive)?;
    debug!(config = %paths.config_file.display(), "starting");

    let output = match command {
        Commands::Tui(args) => {
            let config = Config::load_from_path(&paths.config_file)?;
            let [work, brk, sessions] = commands::startup_settings(&config.timer, &args);
            let notifier = Notifiers::from_config(&config.notifications);
            let timer = SessionTimer::with_settings(notifier, &work, &brk, &sessions);
            pomopanel::tui::run(timer, &config.ui).context("Panel failed")?;
            String::new()
        }
        Commands::Simulate(args) => {
            let config = Config::load_from_path(&paths.config_file)?;
            commands::simulate(&config, &args, format)?
        }
        Commands::Config(args) => commands::config(&paths, &args.command, format)?,
        Commands::Format { seconds } => match format {
            OutputFormat::Pretty => format_time(seconds),
            OutputFormat::Json => to_json(&serde_json::json!({
                "seconds": seconds,
                "formatted": format_time(seconds),
            }))?,
        },
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the level chosen from the command line.
fn init_logging(paths: &Paths, level: &str, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pomopanel={level}")));

    if to_file {
        paths.ensure_dirs()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&paths.log_file)
            .with_context(|| format!("Failed to open log file {}", paths.log_file.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
