use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::form::{error_hint, Field, InputKind, GENDER_OPTIONS};
use crate::ui::form::{Focus, FormScreenState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER, STATUS_ERROR,
};

const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";
const NO_COURSE: &str = "None";

/// One bordered input: label on top, inline hint at the bottom when invalid.
pub struct FieldBox<'a> {
    field: Field,
    state: &'a FormScreenState,
}

impl<'a> FieldBox<'a> {
    pub fn new(field: Field, state: &'a FormScreenState) -> Self {
        Self { field, state }
    }

    fn focused(&self) -> bool {
        self.state.focus == Focus::Field(self.field)
    }

    fn invalid(&self) -> bool {
        self.state.model.errors.is_invalid(self.field)
    }

    fn value(&self) -> &'a str {
        self.state.model.values.get(self.field)
    }

    fn block(&self) -> Block<'a> {
        let border = if self.invalid() {
            STATUS_ERROR
        } else if self.focused() {
            ACCENT
        } else {
            GLOBAL_BORDER
        };
        let mut title_style = Style::default().fg(HEADER_TEXT);
        if self.focused() {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Line::from(Span::styled(
                format!(" {} ", self.field.label()),
                title_style,
            )));
        if self.invalid() {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", error_hint(self.field, self.value())),
                Style::default().fg(STATUS_ERROR),
            )));
        }
        block
    }

    fn content(&self) -> Vec<Line<'a>> {
        let value = self.value();
        match self.field.kind() {
            InputKind::Choice if self.field == Field::Gender => {
                let spans = GENDER_OPTIONS
                    .iter()
                    .flat_map(|option| {
                        let marker = if *option == value { "(•) " } else { "( ) " };
                        [
                            Span::styled(marker, Style::default().fg(ACCENT)),
                            Span::styled(capitalize(option), Style::default().fg(HEADER_TEXT)),
                            Span::raw("  "),
                        ]
                    })
                    .collect::<Vec<_>>();
                vec![Line::from(spans)]
            }
            InputKind::Choice => {
                let shown = if value.is_empty() { NO_COURSE } else { value };
                vec![Line::from(vec![
                    Span::styled("‹ ", Style::default().fg(ACCENT)),
                    Span::styled(shown, Style::default().fg(HEADER_TEXT)),
                    Span::styled(" ›", Style::default().fg(ACCENT)),
                ])]
            }
            InputKind::Date if value.is_empty() => vec![Line::from(Span::styled(
                DATE_PLACEHOLDER,
                Style::default().fg(PLACEHOLDER),
            ))],
            InputKind::Multiline => value
                .split('\n')
                .map(|line| Line::from(Span::styled(line, Style::default().fg(HEADER_TEXT))))
                .collect(),
            InputKind::Text | InputKind::Date => vec![Line::from(Span::styled(
                value,
                Style::default().fg(HEADER_TEXT),
            ))],
        }
    }

    /// Line count and display width of the last line, which is where
    /// typing happens.
    fn extent(&self) -> (u16, u16) {
        let value = self.value();
        let lines = value.split('\n').count();
        let last = value.rsplit('\n').next().unwrap_or_default();
        (cells(lines), cells(Line::raw(last).width()))
    }

    /// (rows, columns) to scroll so the end of the value stays inside `inner`.
    fn scroll(&self, inner: Rect) -> (u16, u16) {
        if self.field.kind() == InputKind::Choice || inner.width == 0 || inner.height == 0 {
            return (0, 0);
        }
        let (lines, last_width) = self.extent();
        (
            lines.saturating_sub(inner.height),
            last_width.saturating_sub(inner.width - 1),
        )
    }

    /// Terminal cursor position for the focused text field, if any.
    pub fn cursor(&self, area: Rect) -> Option<Position> {
        if !self.focused() || self.field.kind() == InputKind::Choice {
            return None;
        }
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let (lines, last_width) = self.extent();
        let (rows, columns) = self.scroll(inner);
        let row = (lines.saturating_sub(1) - rows).min(inner.height - 1);
        let col = (last_width - columns).min(inner.width - 1);
        Some(Position::new(inner.x + col, inner.y + row))
    }
}

impl Widget for FieldBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let scroll = self.scroll(block.inner(area));
        let mut paragraph = Paragraph::new(self.content()).block(block).scroll(scroll);
        if self.focused() {
            paragraph = paragraph.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        paragraph.render(area, buf);
    }
}

fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("female"), "Female");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn cursor_sits_after_text() {
        let state = FormScreenState::default();
        let state = FormScreenState {
            model: state.model.edit(Field::FirstName, "Ann", 2026),
            ..state
        };
        let cursor = FieldBox::new(Field::FirstName, &state).cursor(Rect::new(0, 0, 20, 3));
        assert_eq!(cursor, Some(Position::new(4, 1)));
        assert_eq!(
            FieldBox::new(Field::Email, &state).cursor(Rect::new(0, 0, 20, 3)),
            None
        );
    }

    fn focused_on(field: Field, value: &str) -> FormScreenState {
        let state = FormScreenState::default();
        FormScreenState {
            model: state.model.edit(field, value, 2026),
            focus: Focus::Field(field),
            ..state
        }
    }

    #[test]
    fn cursor_counts_display_width() {
        let state = focused_on(Field::FirstName, "日本");
        let cursor = FieldBox::new(Field::FirstName, &state).cursor(Rect::new(0, 0, 20, 3));
        assert_eq!(cursor, Some(Position::new(5, 1)));
    }

    #[test]
    fn long_value_scrolls_to_keep_its_end_visible() {
        let state = focused_on(Field::Email, &"a".repeat(40));
        let field_box = FieldBox::new(Field::Email, &state);
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(field_box.scroll(field_box.block().inner(area)), (0, 23));
        assert_eq!(field_box.cursor(area), Some(Position::new(18, 1)));
    }

    #[test]
    fn address_scrolls_down_past_the_box() {
        let state = focused_on(Field::Address, "one\ntwo\nthree\nfour\nfive");
        let field_box = FieldBox::new(Field::Address, &state);
        let area = Rect::new(0, 0, 20, 6);
        assert_eq!(field_box.scroll(field_box.block().inner(area)), (1, 0));
        assert_eq!(field_box.cursor(area), Some(Position::new(5, 4)));
    }

    #[test]
    fn short_value_does_not_scroll() {
        let state = focused_on(Field::FirstName, "Ann");
        let field_box = FieldBox::new(Field::FirstName, &state);
        assert_eq!(field_box.scroll(Rect::new(1, 1, 18, 1)), (0, 0));
    }
}
