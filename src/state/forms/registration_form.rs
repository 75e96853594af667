//! Form store: values, derived errors, focus and phase for one session

use super::field::FieldName;
use super::form_state::{FormState, Gender};
use super::phase::{FormEvent, FormPhase};
use super::schema::{FieldError, FieldErrors, Registration, RegistrationSchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Index of the submit button in the focus cycle
pub const SUBMIT_BUTTON_INDEX: usize = FieldName::ALL.len();

/// When errors are recomputed after the form has shown one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevalidateMode {
    /// Only on blur and submit
    #[default]
    OnBlur,
    /// Also on every keystroke once an error is visible
    OnChange,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Valid(Registration),
    Invalid(FieldErrors),
}

/// Common focus handling for forms
pub trait Form {
    fn control_count(&self) -> usize;
    fn active_control(&self) -> usize;
    fn set_active_control(&mut self, index: usize);
    fn next_control(&mut self) {
        let count = self.control_count();
        let current = self.active_control();
        self.set_active_control((current + 1) % count);
    }
    fn prev_control(&mut self) {
        let count = self.control_count();
        let current = self.active_control();
        if current == 0 {
            self.set_active_control(count - 1);
        } else {
            self.set_active_control(current - 1);
        }
    }
}

/// What a control needs to render one bound field
#[derive(Debug, Clone, Copy)]
pub struct FieldController<'a> {
    pub value: &'a str,
    pub error: Option<&'a FieldError>,
    pub is_active: bool,
}

/// The registration form store
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    schema: RegistrationSchema,
    revalidate_mode: RevalidateMode,
    values: FormState,
    /// Errors from the last full validation
    errors: FieldErrors,
    touched: BTreeSet<FieldName>,
    phase: FormPhase,
    active_control_index: usize,
    submit_count: usize,
}

impl RegistrationForm {
    pub fn new(schema: RegistrationSchema, revalidate_mode: RevalidateMode) -> Self {
        Self {
            schema,
            revalidate_mode,
            values: FormState::default(),
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            phase: FormPhase::Pristine,
            active_control_index: 0,
            submit_count: 0,
        }
    }

    #[cfg(test)]
    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// Field under focus, `None` when the submit button has focus
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_control_index)
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_control_index == SUBMIT_BUTTON_INDEX
    }

    /// Error displayed next to `field`, if any
    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Errors currently displayed, in form order
    pub fn errors(&self) -> FieldErrors {
        let mut shown = FieldErrors::new();
        for (field, error) in self.errors.iter() {
            if self.is_touched(field) {
                shown.insert(field, error.clone());
            }
        }
        shown
    }

    /// Bind a control to `field`
    pub fn controller(&self, field: FieldName) -> FieldController<'_> {
        FieldController {
            value: self.values.get(field),
            error: self.error(field),
            is_active: self.active_field() == Some(field),
        }
    }

    /// Replace the value of `field`
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
        self.on_change();
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_text_field() {
            self.values.get_mut(field).push(c);
            self.on_change();
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_text_field() {
            if self.values.get_mut(field).pop().is_some() {
                self.on_change();
            }
        }
    }

    /// Empty the focused text field
    pub fn clear_field(&mut self) {
        if let Some(field) = self.active_text_field() {
            let value = self.values.get_mut(field);
            if !value.is_empty() {
                value.clear();
                self.on_change();
            }
        }
    }

    /// Select the next gender option, wrapping around
    pub fn next_option(&mut self) {
        self.step_option(1);
    }

    /// Select the previous gender option, wrapping around
    pub fn prev_option(&mut self) {
        self.step_option(Gender::ALL.len() - 1);
    }

    fn step_option(&mut self, step: usize) {
        if self.active_field() != Some(FieldName::Gender) {
            return;
        }
        let count = Gender::ALL.len();
        // An unknown value restarts the cycle at the first option
        let next = match Gender::parse(&self.values.gender) {
            Some(current) => {
                let index = Gender::ALL.iter().position(|g| *g == current).unwrap_or(0);
                Gender::ALL[(index + step) % count]
            }
            None => Gender::ALL[0],
        };
        self.set_value(FieldName::Gender, next.as_str());
    }

    /// Leave the focused field: mark it touched and validate
    pub fn blur(&mut self) {
        if let Some(field) = self.active_field() {
            self.touched.insert(field);
            self.validate().ok();
        }
    }

    /// Validate for a submit attempt.
    ///
    /// Every field becomes touched so all errors show. On failure focus moves
    /// to the first invalid field.
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        self.submit_count += 1;
        self.touched.extend(FieldName::ALL);

        match self.validate() {
            Ok(registration) => SubmitOutcome::Valid(registration),
            Err(errors) => {
                if let Some(field) = errors.first() {
                    self.active_control_index = field.index();
                }
                tracing::debug!(
                    "Submit attempt {} blocked by {} invalid field(s)",
                    self.submit_count,
                    errors.len()
                );
                SubmitOutcome::Invalid(errors)
            }
        }
    }

    /// Record that the submit handler accepted the data
    pub fn mark_submitted(&mut self) {
        self.phase = self.phase.transition(FormEvent::Submitted);
    }

    /// Run the full schema and store the derived errors
    fn validate(&mut self) -> Result<Registration, FieldErrors> {
        self.phase = self.phase.transition(FormEvent::ValidationStarted);
        let result = self.schema.validate(&self.values);
        match &result {
            Ok(_) => {
                self.errors = FieldErrors::new();
                self.phase = self.phase.transition(FormEvent::ValidationPassed);
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.phase = self.phase.transition(FormEvent::ValidationFailed);
            }
        }
        result
    }

    fn on_change(&mut self) {
        self.phase = self.phase.transition(FormEvent::Changed);
        if self.revalidate_mode == RevalidateMode::OnChange && !self.errors().is_empty() {
            self.validate().ok();
        }
    }

    fn active_text_field(&self) -> Option<FieldName> {
        self.active_field().filter(|field| !field.is_select())
    }
}

impl Form for RegistrationForm {
    fn control_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1 // five fields, submit button
    }
    fn active_control(&self) -> usize {
        self.active_control_index
    }
    /// Move focus to a control, blurring the one that had it
    fn set_active_control(&mut self, index: usize) {
        let index = index.min(SUBMIT_BUTTON_INDEX);
        if index != self.active_control_index {
            self.blur();
            self.active_control_index = index;
        }
    }
}
