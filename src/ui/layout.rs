//! Layout helpers and the status bar

use crate::app::App;
use crate::state::FormPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Feedback goes first so narrow terminals still show it
    if let Some(msg) = &app.error_message {
        spans.push(Span::styled(format!(" {msg} "), Style::default().fg(Color::Red)));
        spans.push(Span::raw("|"));
    } else if app.form.phase() == FormPhase::Submitted {
        let msg = app.locale.submitted_message();
        spans.push(Span::styled(format!(" {msg} "), Style::default().fg(Color::Green)));
        spans.push(Span::raw("|"));
    }

    spans.push(Span::styled(
        " Tab next · Enter register · ←→ choose · Ctrl+U clear · Esc quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
