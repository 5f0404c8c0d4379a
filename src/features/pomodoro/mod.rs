//! Pomodoro session timer.
//!
//! Alternates work and break phases across a configurable number of
//! sessions:
//! - Pure state machine over [`TimerState`]
//! - Raw-text settings with clamp-or-default normalization
//! - A single start/stop one-second ticker
//! - Progress and countdown formatting
//! - Headless simulation of a full run

pub mod format;
pub mod machine;
pub mod session;
pub mod simulate;
pub mod state;
pub mod ticker;

pub use format::{format_duration, format_time, progress, render_progress_bar, session_markers};
pub use machine::{apply, Event, Transition};
pub use session::SessionTimer;
pub use simulate::{simulate, SimulatedTransition, SimulationReport};
pub use state::{parse_leading_int, Phase, Setting, TimerState};
pub use ticker::{Ticker, TICK_PERIOD};
