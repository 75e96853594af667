//! Registration form panel

use super::controls::{FormControl, SelectInput, TextInput};
use super::field_renderer::FIELD_HEIGHT;
use crate::app::App;
use crate::state::{FieldName, TextDirection};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Panel width, wide enough for the longest error message
pub const PANEL_WIDTH: u16 = 52;

/// Borders, heading, spacer, five fields, spacer and the button
pub const PANEL_HEIGHT: u16 =
    2 + 1 + 1 + FIELD_HEIGHT * FieldName::ALL.len() as u16 + 1 + BUTTON_HEIGHT;

/// Controls in display order, configured for the app's locale
pub fn build_controls(app: &App) -> Vec<Box<dyn FormControl>> {
    let locale = app.locale;
    let direction = locale.direction();

    FieldName::ALL
        .into_iter()
        .map(|field| -> Box<dyn FormControl> {
            if field.is_select() {
                Box::new(
                    SelectInput::new(field, locale.label(field), locale.gender_options())
                        .direction(direction),
                )
            } else if field.is_password() {
                // Passwords are latin/numeric input and always flow left to right
                Box::new(
                    TextInput::new(field, locale.label(field))
                        .direction(TextDirection::Ltr)
                        .masked(app.mask_passwords),
                )
            } else {
                Box::new(TextInput::new(field, locale.label(field)).direction(direction))
            }
        })
        .collect()
}

/// Draw the form panel centered in `area`
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let panel = centered_rect(area, PANEL_WIDTH, PANEL_HEIGHT);
    frame.render_widget(Clear, panel);

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(panel).inner(Margin::new(1, 0));
    frame.render_widget(block, panel);

    let mut constraints = vec![
        Constraint::Length(1), // Heading
        Constraint::Length(1), // Spacer
    ];
    constraints.extend(FieldName::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(1)); // Spacer
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let heading = Paragraph::new(Line::from(app.locale.heading()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    for (control, field_area) in build_controls(app).iter().zip(chunks[2..].iter()) {
        let controller = app.form.controller(control.field());
        control.draw(frame, *field_area, &controller);
    }

    let button_area = chunks[chunks.len() - 1];
    render_button(
        frame,
        button_area,
        app.locale.submit_label(),
        app.form.is_submit_active(),
    );
}
