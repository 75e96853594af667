//! Form domain layer
//!
//! Type-safe form handling for the registration form: the raw field record,
//! the validation schema, the form phase machine and the store that ties
//! them together.

mod field;
mod form_state;
mod phase;
mod registration_form;
mod schema;

pub use field::FieldName;
pub use form_state::Gender;
pub use phase::FormPhase;
pub use registration_form::{FieldController, Form, RegistrationForm, RevalidateMode, SubmitOutcome};
pub use schema::{Registration, RegistrationSchema, ValidationErrorKind};

#[cfg(test)]
pub use registration_form::SUBMIT_BUTTON_INDEX;
