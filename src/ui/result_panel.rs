//! Verdict and error rendering below the form

use crate::state::{is_ckd, AppState, SubmissionResult};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const DISCLAIMER: &str = "This is an AI-assisted prediction, not a medical diagnosis.";

const CKD_ADVICE: &str = "The model indicates a high likelihood of Chronic Kidney Disease. \
    Please consult a nephrologist for further evaluation.";

const NOT_CKD_ADVICE: &str =
    "The model indicates no signs of Chronic Kidney Disease based on the provided parameters.";

/// Draw the result panel for the current submission state
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.in_flight {
        draw_panel(
            frame,
            area,
            " Prediction ",
            Color::Yellow,
            vec![Line::from("Analyzing...")],
        );
        return;
    }

    match &state.result {
        SubmissionResult::None => {
            let hint = Paragraph::new("Fill in the form and run the prediction on the last step.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, area);
        }
        SubmissionResult::Failure { message } => {
            draw_panel(
                frame,
                area,
                " Error ",
                Color::Red,
                vec![Line::from(format!("⚠ {message}"))],
            );
        }
        SubmissionResult::Success { label } => draw_verdict(frame, area, label),
    }
}

fn draw_verdict(frame: &mut Frame, area: Rect, label: &str) {
    let positive = is_ckd(label);
    let (color, verdict, advice) = if positive {
        (Color::Red, "Chronic Kidney Disease", CKD_ADVICE)
    } else {
        (Color::Green, "Not CKD", NOT_CKD_ADVICE)
    };

    let lines = vec![
        Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(advice, Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled(
            DISCLAIMER,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    draw_panel(frame, area, " Prediction Result ", color, lines);
}

fn draw_panel(frame: &mut Frame, area: Rect, title: &str, color: Color, lines: Vec<Line>) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
