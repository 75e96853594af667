//! Controlled input widgets
//!
//! A control only knows which field it is bound to and how to draw it. The
//! value and error always come from the form store through a
//! [`FieldController`].

use super::field_renderer::{draw_field_box, FieldBox};
use crate::state::{FieldController, FieldName, TextDirection};
use ratatui::{layout::Rect, Frame};

/// Shared capability of inputs bound to a form field
pub trait FormControl {
    /// Field path this control is bound to
    fn field(&self) -> FieldName;

    /// Draw the control for the current binding
    fn draw(&self, frame: &mut Frame, area: Rect, controller: &FieldController<'_>);
}

/// Single-line text box
#[derive(Debug, Clone)]
pub struct TextInput {
    field: FieldName,
    label: String,
    direction: TextDirection,
    masked: bool,
}

impl TextInput {
    pub fn new(field: FieldName, label: impl Into<String>) -> Self {
        Self {
            field,
            label: label.into(),
            direction: TextDirection::default(),
            masked: false,
        }
    }

    pub fn direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Render every character as a bullet
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn display_value(&self, value: &str) -> String {
        if self.masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

impl FormControl for TextInput {
    fn field(&self) -> FieldName {
        self.field
    }

    fn draw(&self, frame: &mut Frame, area: Rect, controller: &FieldController<'_>) {
        draw_field_box(
            frame,
            area,
            FieldBox {
                label: &self.label,
                value: self.display_value(controller.value),
                is_active: controller.is_active,
                error: controller.error.map(|e| e.message.as_str()),
                direction: self.direction,
                show_cursor: true,
            },
        );
    }
}

/// One entry of a select: stored value and what the user sees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Enumerated dropdown, cycled with the arrow keys
#[derive(Debug, Clone)]
pub struct SelectInput {
    field: FieldName,
    label: String,
    options: Vec<SelectOption>,
    direction: TextDirection,
}

impl SelectInput {
    pub fn new<V, L>(field: FieldName, label: impl Into<String>, options: Vec<(V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self {
            field,
            label: label.into(),
            options: options
                .into_iter()
                .map(|(value, label)| SelectOption {
                    value: value.into(),
                    label: label.into(),
                })
                .collect(),
            direction: TextDirection::default(),
        }
    }

    pub fn direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Label of the option holding `value`; unknown values show as-is
    fn display_value<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }
}

impl FormControl for SelectInput {
    fn field(&self) -> FieldName {
        self.field
    }

    fn draw(&self, frame: &mut Frame, area: Rect, controller: &FieldController<'_>) {
        let shown = self.display_value(controller.value);
        let value = if controller.is_active {
            format!("‹ {shown} ›")
        } else {
            shown.to_string()
        };

        draw_field_box(
            frame,
            area,
            FieldBox {
                label: &self.label,
                value,
                is_active: controller.is_active,
                error: controller.error.map(|e| e.message.as_str()),
                direction: self.direction,
                show_cursor: false,
            },
        );
    }
}
