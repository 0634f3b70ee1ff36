use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::form::Field;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Rect of `width` x `height` centered in `area`, clamped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Where each form element goes inside the body region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    /// Indexed by [`Field::index`].
    pub fields: [Rect; 8],
    pub register: Rect,
    pub cancel: Rect,
}

const LEFT_COLUMN: [Field; 4] = [
    Field::FirstName,
    Field::LastName,
    Field::Address,
    Field::Mobile,
];
const RIGHT_COLUMN: [Field; 4] = [Field::Email, Field::Gender, Field::Dob, Field::Course];
const BUTTON_WIDTH: u16 = 14;

/// Address gets four text lines.
pub fn field_height(field: Field) -> u16 {
    match field {
        Field::Address => 6,
        _ => 3,
    }
}

/// Two columns of field boxes with the buttons underneath.
pub fn form_layout(body: Rect) -> FormLayout {
    let column_height = LEFT_COLUMN
        .iter()
        .map(|f| field_height(*f))
        .sum::<u16>()
        .max(RIGHT_COLUMN.iter().map(|f| field_height(*f)).sum());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(column_height),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(body);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let mut fields = [Rect::default(); 8];
    for (column, members) in [(columns[0], LEFT_COLUMN), (columns[1], RIGHT_COLUMN)] {
        let mut constraints: Vec<Constraint> = members
            .iter()
            .map(|f| Constraint::Length(field_height(*f)))
            .collect();
        constraints.push(Constraint::Min(0));
        let cells = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(column);
        for (field, cell) in members.iter().zip(cells.iter()) {
            fields[field.index()] = *cell;
        }
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(2),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    FormLayout {
        fields,
        register: buttons[1],
        cancel: buttons[3],
    }
}
