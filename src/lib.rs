//! pomopanel - A Pomodoro session timer panel
//!
//! This crate provides a work/break session timer built around a pure state
//! machine, hosted in a terminal panel with Timer and Settings tabs.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod notify;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PanelError;
pub use features::pomodoro::{SessionTimer, TimerState};
