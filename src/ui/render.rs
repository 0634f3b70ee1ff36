use crate::form::Field;
use crate::ui::app::App;
use crate::ui::field_box::FieldBox;
use crate::ui::footer::Footer;
use crate::ui::form::Focus;
use crate::ui::header::Header;
use crate::ui::layout::{form_layout, layout_regions};
use crate::ui::notice::render_notice;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new(app.school()).widget(), header);
    frame.render_widget(Clear, body);

    let layout = form_layout(body);
    for field in Field::ALL {
        let rect = layout.fields[field.index()];
        let field_box = FieldBox::new(field, state);
        if !state.notice_visible() {
            if let Some(position) = field_box.cursor(rect) {
                frame.set_cursor_position(position);
            }
        }
        frame.render_widget(field_box, rect);
    }

    render_button(frame, layout.register, "Register", state.focus == Focus::Register);
    render_button(frame, layout.cancel, "Cancel", state.focus == Focus::Cancel);

    frame.render_widget(Footer::new().widget(footer), footer);

    if let Some(outcome) = state.notice {
        render_notice(frame, body, outcome);
    }
}

fn render_button(frame: &mut Frame<'_>, area: Rect, label: &str, focused: bool) {
    let (border, text) = if focused {
        (
            Style::default().fg(ACCENT),
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(GLOBAL_BORDER), Style::default().fg(HEADER_TEXT))
    };
    let widget = Paragraph::new(Span::styled(label.to_string(), text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(widget, area);
}
