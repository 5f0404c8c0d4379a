//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PanelError;
use crate::notify::Notifier;
use crate::tui::app::{App, Tab};

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the timer.
    Toggle,
    /// Reset the timer.
    Reset,
}

/// Wait up to `timeout` for a terminal event and handle it.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<N: Notifier>(
    app: &mut App<N>,
    timeout: Duration,
) -> Result<Option<Action>, PanelError> {
    if event::poll(timeout).map_err(|e| PanelError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| PanelError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Handle a single key press.
pub fn handle_key<N: Notifier>(app: &mut App<N>, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Typing owns the keyboard until it is committed or cancelled.
    if app.is_editing() {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => app.push_input(c),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Enter => app.commit_input(),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Up => {
                app.commit_input();
                app.select_previous();
            }
            KeyCode::Down | KeyCode::Tab => {
                app.commit_input();
                app.select_next();
            }
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        // Tabs
        KeyCode::Tab | KeyCode::BackTab => app.next_tab(),
        KeyCode::Char('1') if app.tab == Tab::Timer => app.select_tab(Tab::Timer),
        KeyCode::Char('2') if app.tab == Tab::Timer => app.select_tab(Tab::Settings),

        _ => match app.tab {
            Tab::Timer => return handle_timer_key(key.code),
            Tab::Settings => handle_settings_key(app, key.code),
        },
    }

    None
}

fn handle_timer_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),
        _ => None,
    }
}

fn handle_settings_key<N: Notifier>(app: &mut App<N>, code: KeyCode) {
    match code {
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('h') | KeyCode::Left => app.slide(-1),
        KeyCode::Char('l') | KeyCode::Right => app.slide(1),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => app.push_input(c),
        KeyCode::Backspace => app.backspace(),
        _ => {}
    }
}
