//! Terminal User Interface (TUI) for pomopanel.
//!
//! Hosts the session timer in an interactive panel with Timer and Settings
//! tabs. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Tab};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::UiConfig;
use crate::error::PanelError;
use crate::features::pomodoro::SessionTimer;
use crate::notify::Notifier;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<N: Notifier>(timer: SessionTimer<N>, ui: &UiConfig) -> Result<(), PanelError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PanelError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PanelError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PanelError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(timer, ui);
    info!(state = ?app.timer.state(), "panel opened");
    let result = run_app(&mut terminal, &mut app, ui.tick_rate());

    // Restore terminal
    app.quit();
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    info!("panel closed");

    result
}

/// Run the main application loop.
fn run_app<B: Backend, N: Notifier>(
    terminal: &mut Terminal<B>,
    app: &mut App<N>,
    tick_rate: Duration,
) -> Result<(), PanelError> {
    while !app.should_quit {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PanelError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        let timeout = app.poll_timeout(Instant::now(), tick_rate);
        if let Some(action) = event::handle_events(app, timeout)? {
            let now = Instant::now();
            match action {
                event::Action::Quit => app.quit(),
                event::Action::Toggle => app.toggle(now),
                event::Action::Reset => {
                    app.reset(now);
                    app.info("Timer reset", now);
                }
            }
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}
