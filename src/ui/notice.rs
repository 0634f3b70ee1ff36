//! Modal shown after Register is pressed.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::form::SubmissionOutcome;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};

const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 6;
const DISMISS_HINT: &str = "Press any key to continue";

pub fn render_notice(frame: &mut Frame, area: Rect, outcome: SubmissionOutcome) {
    let (title, color) = match outcome {
        SubmissionOutcome::Accepted => (" Registered ", STATUS_OK),
        SubmissionOutcome::Rejected => (" Not registered ", STATUS_ERROR),
    };

    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(outcome.message(), Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            DISMISS_HINT,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
