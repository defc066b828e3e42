//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod layout;
mod result_panel;

use crate::state::AppState;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let (header_area, progress_area, form_area, result_area, status_area) =
        layout::create_layout(area);

    layout::draw_header(frame, header_area);
    layout::draw_progress(frame, progress_area, state);
    form::draw(frame, form_area, state);
    result_panel::draw(frame, result_area, state);
    layout::draw_status_bar(frame, status_area, state);
}
