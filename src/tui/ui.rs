//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph, Tabs},
    Frame,
};

use crate::features::pomodoro::{render_progress_bar, Phase, Setting};
use crate::notify::{Notifier, Severity};
use crate::tui::app::{App, Tab};

/// Render the application UI.
pub fn render<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>) {
    // Create layout: tabs, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    match app.tab {
        Tab::Timer => render_timer(frame, app, chunks[1]),
        Tab::Settings => render_settings(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

/// Render the tab bar.
fn render_tabs<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>, area: Rect) {
    let tabs = Tabs::new(Tab::TITLES)
        .select(app.tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Work => Color::Red,
        Phase::Break => Color::Green,
    }
}

/// Render the countdown, progress and controls.
fn render_timer<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>, area: Rect) {
    let state = app.timer.state();
    let phase = state.phase();
    let color = phase_color(phase);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar_width = usize::from(inner.width.saturating_sub(4)).max(4);
    let button = if state.is_running { "Pause" } else { "Start" };

    let lines = vec![
        Line::from(Span::styled(
            phase.heading(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            app.timer.display(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!(
            "Session {} of {}",
            state.current_session, state.total_sessions
        )),
        Line::from(Span::styled(
            render_progress_bar(app.timer.progress(), state.total_sessions, bar_width),
            Style::default().fg(color),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("[ {button} ]"),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("[ Reset ]", Style::default().fg(Color::Cyan)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            phase.hint(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// Render the settings form.
fn render_settings<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>, area: Rect) {
    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, setting) in Setting::ALL.iter().enumerate() {
        render_setting(frame, app, *setting, i == app.selected, rows[i]);
    }
}

/// Render one setting: label, numeric input and slider.
fn render_setting<N: Notifier>(
    frame: &mut Frame<'_>,
    app: &App<N>,
    setting: Setting,
    selected: bool,
    area: Rect,
) {
    let value = app.timer.state().setting(setting);
    let editing = selected && app.is_editing();

    let label_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let input_text = if editing {
        format!("{}_", app.input.as_deref().unwrap_or_default())
    } else {
        value.to_string()
    };
    let input_style = if editing {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let label = Line::from(vec![
        Span::styled(if selected { "> " } else { "  " }, label_style),
        Span::styled(format!("{}: ", setting.label()), label_style),
        Span::styled(format!("[{input_text:>3}]"), input_style),
    ]);
    frame.render_widget(Paragraph::new(label), parts[0]);

    let span = f64::from(setting.max() - setting.min());
    let ratio = if span > 0.0 {
        f64::from(value - setting.min()) / span
    } else {
        1.0
    };
    let slider = LineGauge::default()
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("  {}-{}", setting.min(), setting.max()))
        .style(Style::default().fg(if selected {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    frame.render_widget(slider, parts[1]);
}

/// Render the status bar.
fn render_status_bar<N: Notifier>(frame: &mut Frame<'_>, app: &App<N>, area: Rect) {
    let paragraph = if let Some(toast) = &app.toast {
        let (icon, color) = match toast.notification.severity {
            Severity::Success => ("✔", Color::Green),
            Severity::Info => ("•", Color::Cyan),
        };
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(color)),
            Span::styled(
                format!("{} ", toast.shown_at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                toast.notification.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]))
    } else {
        let help = match app.tab {
            Tab::Timer => "space:start/pause | r:reset | tab:settings | q:quit",
            Tab::Settings => "↑/↓:select | ←/→:adjust | 0-9:type | enter:apply | tab:timer | q:quit",
        };
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(paragraph, area);
}
