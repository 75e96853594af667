//! Field rendering utilities for forms

use crate::state::TextDirection;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a rendered field box in rows
pub const FIELD_HEIGHT: u16 = 3;

/// What to draw for one bordered field box
pub struct FieldBox<'a> {
    pub label: &'a str,
    pub value: String,
    pub is_active: bool,
    /// Inline error, drawn on the bottom border
    pub error: Option<&'a str>,
    pub direction: TextDirection,
    /// Whether to show a text cursor when active
    pub show_cursor: bool,
}

pub fn alignment(direction: TextDirection) -> Alignment {
    match direction {
        TextDirection::Ltr => Alignment::Left,
        TextDirection::Rtl => Alignment::Right,
    }
}

/// Last chars of `value` that fit in `width` columns
fn visible_tail(value: &str, width: usize) -> &str {
    let len = value.chars().count();
    if len <= width {
        return value;
    }
    match value.char_indices().nth(len - width) {
        Some((start, _)) => &value[start..],
        None => "",
    }
}

/// Draw a labeled field box with its value and error
pub fn draw_field_box(frame: &mut Frame, area: Rect, field: FieldBox<'_>) {
    let style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let align = alignment(field.direction);
    let cursor = if field.is_active && field.show_cursor {
        "▌"
    } else {
        ""
    };

    // Scroll to keep the end of the value and the cursor inside the borders
    let room = usize::from(area.width.saturating_sub(2)).saturating_sub(cursor.chars().count());
    let value = visible_tail(&field.value, room);

    let content = Paragraph::new(Line::from(vec![
        Span::styled(value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .alignment(align);

    let mut block = Block::default()
        .title(Line::from(format!(" {} ", field.label)).alignment(align))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(error) = field.error {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {error} "),
                Style::default().fg(Color::Red),
            ))
            .alignment(align),
        );
    }

    frame.render_widget(content.block(block), area);
}
