//! Validation schema for the registration form
//!
//! Each field rule is checked independently and reports at most one error on
//! its own path. The password confirmation rule spans two fields; it only
//! runs once every field rule has passed and reports on `passwordConfirm`.

use super::field::FieldName;
use super::form_state::{FormState, Gender};
use crate::state::Locale;
use serde::Serialize;
use std::collections::BTreeMap;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 30;
pub const PASSWORD_MIN_LEN: usize = 4;

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("shorter than {min} characters")]
    TooShort { min: usize },
    #[error("longer than {max} characters")]
    TooLong { max: usize },
    #[error("does not match")]
    Mismatch,
    #[error("not one of the allowed values")]
    InvalidEnum,
}

/// An error attached to one field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

/// Field path to error, iterated in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the path already has one
    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Topmost invalid field
    pub fn first(&self) -> Option<FieldName> {
        self.0.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}

/// A form that passed every rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
    pub gender: Gender,
}

/// Validates `FormState` snapshots, producing localized messages
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationSchema {
    locale: Locale,
}

impl RegistrationSchema {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Run every rule against `values`
    pub fn validate(&self, values: &FormState) -> Result<Registration, FieldErrors> {
        let mut errors = FieldErrors::new();

        let rules = [
            (FieldName::FirstName, NAME_MIN_LEN, Some(NAME_MAX_LEN)),
            (FieldName::LastName, NAME_MIN_LEN, Some(NAME_MAX_LEN)),
            (FieldName::Password, PASSWORD_MIN_LEN, None),
            (FieldName::PasswordConfirm, PASSWORD_MIN_LEN, None),
        ];
        for (field, min, max) in rules {
            if let Err(kind) = check_length(values.get(field), min, max) {
                errors.insert(field, self.error(field, kind));
            }
        }

        let gender = Gender::parse(&values.gender);
        if gender.is_none() {
            errors.insert(
                FieldName::Gender,
                self.error(FieldName::Gender, ValidationErrorKind::InvalidEnum),
            );
        }

        let gender = match gender {
            Some(gender) if errors.is_empty() => gender,
            _ => return Err(errors),
        };

        if values.password != values.password_confirm {
            errors.insert(
                FieldName::PasswordConfirm,
                self.error(FieldName::PasswordConfirm, ValidationErrorKind::Mismatch),
            );
            return Err(errors);
        }

        Ok(Registration {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            password: values.password.clone(),
            password_confirm: values.password_confirm.clone(),
            gender,
        })
    }

    fn error(&self, field: FieldName, kind: ValidationErrorKind) -> FieldError {
        FieldError {
            kind,
            message: self.locale.error_message(field, kind),
        }
    }
}

/// Length check counted in chars
fn check_length(value: &str, min: usize, max: Option<usize>) -> Result<(), ValidationErrorKind> {
    let len = value.chars().count();
    if len < min {
        return Err(ValidationErrorKind::TooShort { min });
    }
    match max {
        Some(max) if len > max => Err(ValidationErrorKind::TooLong { max }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_values() -> FormState {
        FormState {
            first_name: "Ali".to_string(),
            last_name: "Rezai".to_string(),
            password: "1234".to_string(),
            password_confirm: "1234".to_string(),
            gender: "male".to_string(),
        }
    }

    fn schema() -> RegistrationSchema {
        RegistrationSchema::new(Locale::En)
    }

    mod field_rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_first_name_length_bounds() {
            let just_over = "a".repeat(31);
            let far_over = "a".repeat(45);
            for name in ["", "A", just_over.as_str(), far_over.as_str()] {
                let values = FormState {
                    first_name: name.to_string(),
                    ..valid_values()
                };
                let errors = schema().validate(&values).unwrap_err();
                let expected = if name.len() < NAME_MIN_LEN {
                    ValidationErrorKind::TooShort { min: 2 }
                } else {
                    ValidationErrorKind::TooLong { max: 30 }
                };
                assert_eq!(errors.get(FieldName::FirstName).unwrap().kind, expected);
                assert_eq!(errors.len(), 1);
            }
        }

        #[test]
        fn test_last_name_length_bounds() {
            let short = FormState {
                last_name: "R".to_string(),
                ..valid_values()
            };
            let errors = schema().validate(&short).unwrap_err();
            assert_eq!(
                errors.get(FieldName::LastName).unwrap().kind,
                ValidationErrorKind::TooShort { min: 2 }
            );

            let long = FormState {
                last_name: "R".repeat(31),
                ..valid_values()
            };
            let errors = schema().validate(&long).unwrap_err();
            assert_eq!(
                errors.get(FieldName::LastName).unwrap().kind,
                ValidationErrorKind::TooLong { max: 30 }
            );
            assert!(errors.get(FieldName::FirstName).is_none());
        }

        #[test]
        fn test_name_boundaries_are_inclusive() {
            let values = FormState {
                first_name: "Al".to_string(),
                last_name: "R".repeat(30),
                ..valid_values()
            };
            assert!(schema().validate(&values).is_ok());
        }

        #[test]
        fn test_length_counts_chars_not_bytes() {
            // Two Persian letters are four bytes but two chars
            let values = FormState {
                first_name: "عل".to_string(),
                last_name: "ر".repeat(30),
                ..valid_values()
            };
            assert!(schema().validate(&values).is_ok());
        }

        #[test]
        fn test_short_passwords_fail_on_their_own_paths() {
            let values = FormState {
                password: "123".to_string(),
                password_confirm: "12".to_string(),
                ..valid_values()
            };
            let errors = schema().validate(&values).unwrap_err();
            assert_eq!(
                errors.get(FieldName::Password).unwrap().kind,
                ValidationErrorKind::TooShort { min: 4 }
            );
            assert_eq!(
                errors.get(FieldName::PasswordConfirm).unwrap().kind,
                ValidationErrorKind::TooShort { min: 4 }
            );
        }

        #[test]
        fn test_gender_outside_enum_is_rejected() {
            for gender in ["", "other", "Male", "FEMALE"] {
                let values = FormState {
                    gender: gender.to_string(),
                    ..valid_values()
                };
                let errors = schema().validate(&values).unwrap_err();
                assert_eq!(
                    errors.get(FieldName::Gender).unwrap().kind,
                    ValidationErrorKind::InvalidEnum
                );
            }
        }

        #[test]
        fn test_errors_are_additive() {
            let errors = schema().validate(&FormState::default()).unwrap_err();
            let fields: Vec<FieldName> = errors.fields().collect();
            assert_eq!(
                fields,
                vec![
                    FieldName::FirstName,
                    FieldName::LastName,
                    FieldName::Password,
                    FieldName::PasswordConfirm,
                ]
            );
            assert_eq!(errors.first(), Some(FieldName::FirstName));
        }
    }

    mod refinement {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_mismatch_reports_only_on_confirm() {
            let values = FormState {
                password_confirm: "4321".to_string(),
                ..valid_values()
            };
            let errors = schema().validate(&values).unwrap_err();
            assert_eq!(errors.len(), 1);
            let error = errors.get(FieldName::PasswordConfirm).unwrap();
            assert_eq!(error.kind, ValidationErrorKind::Mismatch);
            assert_eq!(error.message, "Passwords do not match");
        }

        #[test]
        fn test_mismatch_skipped_while_other_rules_fail() {
            let values = FormState {
                first_name: "A".to_string(),
                password_confirm: "4321".to_string(),
                ..valid_values()
            };
            let errors = schema().validate(&values).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert!(errors.get(FieldName::FirstName).is_some());
            assert!(errors.get(FieldName::PasswordConfirm).is_none());
        }

        #[test]
        fn test_short_confirm_reports_length_not_mismatch() {
            let values = FormState {
                password_confirm: "12".to_string(),
                ..valid_values()
            };
            let errors = schema().validate(&values).unwrap_err();
            assert_eq!(
                errors.get(FieldName::PasswordConfirm).unwrap().kind,
                ValidationErrorKind::TooShort { min: 4 }
            );
        }
    }

    mod success {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_produces_typed_registration() {
            let registration = schema().validate(&valid_values()).unwrap();
            assert_eq!(
                registration,
                Registration {
                    first_name: "Ali".to_string(),
                    last_name: "Rezai".to_string(),
                    password: "1234".to_string(),
                    password_confirm: "1234".to_string(),
                    gender: Gender::Male,
                }
            );
        }

        #[test]
        fn test_validation_is_idempotent() {
            let values = valid_values();
            let first = schema().validate(&values);
            let second = schema().validate(&values);
            assert_eq!(first, second);
            assert!(first.is_ok());
        }

        #[test]
        fn test_registration_serializes_like_the_form() {
            let registration = schema().validate(&valid_values()).unwrap();
            let json = serde_json::to_value(&registration).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "firstName": "Ali",
                    "lastName": "Rezai",
                    "password": "1234",
                    "passwordConfirm": "1234",
                    "gender": "male",
                })
            );
        }
    }

    #[test]
    fn test_messages_follow_locale() {
        let values = FormState {
            password_confirm: "4321".to_string(),
            ..valid_values()
        };
        let errors = RegistrationSchema::new(Locale::Fa)
            .validate(&values)
            .unwrap_err();
        assert_eq!(
            errors.get(FieldName::PasswordConfirm).unwrap().message,
            "رمز عبور مطابقت ندارد"
        );
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(
            ValidationErrorKind::TooShort { min: 4 }.to_string(),
            "shorter than 4 characters"
        );
        assert_eq!(ValidationErrorKind::Mismatch.to_string(), "does not match");
    }
}
