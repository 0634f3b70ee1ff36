use crate::config::SchoolConfig;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    school: &'a SchoolConfig,
}

impl<'a> Header<'a> {
    pub fn new(school: &'a SchoolConfig) -> Self {
        Self { school }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let name_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.school.name.as_str(), name_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.school.title.as_str(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
