use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomopanel")]
#[command(about = "A Pomodoro work/break session timer panel for the terminal")]
#[command(long_about = "pomopanel - A Pomodoro timer panel

Runs a work/break timer across a configurable number of sessions, with a
Timer tab (countdown, progress, start/pause, reset) and a Settings tab
(work duration, break duration, number of sessions).

QUICK START:
  pomopanel                         Open the panel
  pomopanel tui --work 50 --break 10
  pomopanel simulate --sessions 2   Print the transition timeline
  pomopanel config init             Write a default config file

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Path to the config file (default: ~/.pomopanel/config.yaml)
    #[arg(long, global = true, env = "POMOPANEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter directive for the verbosity flag.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the timer panel (default)
    ///
    /// Keys:
    ///   Tab             Switch between Timer and Settings
    ///   1 / 2           Switch tabs (Timer tab; digits are input on Settings)
    ///   Space / Enter   Start or pause (Timer tab)
    ///   r               Reset (Timer tab)
    ///   Up / Down       Select a setting (Settings tab)
    ///   Left / Right    Slide the selected setting by one
    ///   0-9, Backspace  Type a value; Enter applies it, Esc cancels
    ///   q / Ctrl+C      Quit
    #[command(verbatim_doc_comment)]
    Tui(TimerArgs),

    /// Run a full cycle headless and print every transition
    ///
    /// Starts from a reset timer and ticks until all sessions complete.
    ///
    /// # Examples
    ///
    ///   pomopanel simulate
    ///   pomopanel simulate --work 50 --break 10 --sessions 3
    ///   pomopanel simulate --sessions 1 --output json
    Simulate(TimerArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Format a number of seconds as MM:SS
    Format {
        /// Seconds to format
        seconds: u32,
    },
}

/// Timer settings given on the command line.
///
/// Values are raw text and are normalized like panel input: out-of-range
/// numbers are clamped and non-numbers fall back to the default.
#[derive(Args, Debug, Default, Clone)]
pub struct TimerArgs {
    /// Work duration in minutes (1-60)
    #[arg(short, long, allow_hyphen_values = true)]
    pub work: Option<String>,

    /// Break duration in minutes (1-30)
    #[arg(short = 'b', long = "break", allow_hyphen_values = true)]
    pub brk: Option<String>,

    /// Number of sessions (1-10)
    #[arg(short, long, allow_hyphen_values = true)]
    pub sessions: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
