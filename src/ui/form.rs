//! Form rendering for the active display group

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::state::fields::{group_fields, group_range};
use crate::state::{AppState, GROUP_TITLES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the fields of the active group in a two-column grid, with the
/// navigation buttons underneath
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(
        " Step {} — {} ",
        state.active_group + 1,
        GROUP_TITLES[state.active_group]
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let specs = group_fields(state.active_group);
    let range = group_range(state.active_group);
    let rows = specs.len().div_ceil(2);

    let mut constraints: Vec<Constraint> = vec![Constraint::Length(3); rows];
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (offset, spec) in specs.iter().enumerate() {
        let row = offset / 2;
        let col = offset % 2;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row_areas[row]);

        let index = range.start + offset;
        let is_active = offset == state.active_field;
        draw_field(frame, cols[col], spec, state.form.value(index), is_active);
    }

    draw_buttons(frame, row_areas[rows + 1], state);
}

/// Back button on the left, continue/submit on the right
fn draw_buttons(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(22),
        ])
        .split(area);

    render_button(frame, chunks[0], "← Back", false, state.active_group > 0);

    let (label, enabled) = if !state.on_last_group() {
        ("Continue →", true)
    } else if state.in_flight {
        ("Analyzing...", false)
    } else {
        ("Run Prediction", true)
    };
    render_button(frame, chunks[2], label, state.on_last_group(), enabled);
}
