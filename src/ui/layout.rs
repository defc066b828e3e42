//! Layout components (header, progress bar, status bar)

use crate::state::{AppState, GROUP_COUNT, GROUP_TITLES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Split the screen into header, progress bar, form, result panel and
/// status bar areas
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress bar
            Constraint::Min(15),   // Form
            Constraint::Length(8), // Result panel
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2], chunks[3], chunks[4])
}

/// Draw the header bar with title and subtitle
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Kidney Disease Predictor",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "CLINICAL ML DIAGNOSTIC TOOL",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the step indicator and completion gauge
pub fn draw_progress(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let mut spans = Vec::new();
    for (i, title) in GROUP_TITLES.iter().enumerate() {
        let style = if i == state.active_group {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if i < state.active_group {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if i < state.active_group { "✓" } else { "" };
        spans.push(Span::styled(
            format!(" {}{} {} ", i + 1, marker, title),
            style,
        ));
        if i + 1 < GROUP_COUNT {
            spans.push(Span::styled("→", Style::default().fg(Color::DarkGray)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let ratio = (state.active_group + 1) as f64 / GROUP_COUNT as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, chunks[1]);
}

/// Draw the status bar with key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let submit_hint = if state.on_last_group() {
        "Enter: run prediction"
    } else {
        "Enter: continue"
    };

    let hints = format!(
        " Tab/↓: next field | ↑: prev field | ←/→: choose | {submit_hint} | Esc: back | Ctrl+C: quit"
    );

    let paragraph = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
