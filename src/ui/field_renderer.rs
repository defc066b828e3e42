//! Field rendering for the clinical form

use crate::state::{FieldKind, FieldSpec};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single form field (numeric entry or choice selector)
pub fn draw_field(frame: &mut Frame, area: Rect, spec: &FieldSpec, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match spec.kind {
        FieldKind::Numeric => numeric_line(spec, value, is_active, style),
        FieldKind::Choice(_) => choice_line(value, is_active, style),
    };

    let title = match spec.unit {
        Some(unit) => format!(" {} ({unit}) ", spec.label),
        None => format!(" {} ", spec.label),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn numeric_line(spec: &FieldSpec, value: &str, is_active: bool, style: Style) -> Line<'static> {
    let cursor = if is_active { "▌" } else { "" };

    if value.is_empty() && !is_active {
        let hint = spec.placeholder.unwrap_or("(empty)");
        return Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(vec![
        Span::styled(value.to_string(), style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ])
}

fn choice_line(value: &str, is_active: bool, style: Style) -> Line<'static> {
    if is_active {
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(Color::Cyan)),
            Span::styled(value.to_string(), style),
            Span::styled(" ▸", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(Span::styled(value.to_string(), style))
    }
}
