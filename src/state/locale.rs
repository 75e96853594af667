//! User-facing strings and text direction per locale

use super::forms::{FieldName, Gender, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Horizontal flow of text in a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    /// Persian, laid out right to left
    Fa,
}

impl Locale {
    /// Direction of the panel as a whole
    pub fn direction(&self) -> TextDirection {
        match self {
            Self::En => TextDirection::Ltr,
            Self::Fa => TextDirection::Rtl,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::En => "Registration Form",
            Self::Fa => "فرم ثبت نام",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::En => "Register",
            Self::Fa => "ثبت",
        }
    }

    pub fn submitted_message(&self) -> &'static str {
        match self {
            Self::En => "Registered!",
            Self::Fa => "ثبت نام انجام شد",
        }
    }

    pub fn label(&self, field: FieldName) -> &'static str {
        match (self, field) {
            (Self::En, FieldName::FirstName) => "First name",
            (Self::En, FieldName::LastName) => "Last name",
            (Self::En, FieldName::Password) => "Password",
            (Self::En, FieldName::PasswordConfirm) => "Confirm password",
            (Self::En, FieldName::Gender) => "Gender",
            (Self::Fa, FieldName::FirstName) => "نام",
            (Self::Fa, FieldName::LastName) => "نام خانوادگی",
            (Self::Fa, FieldName::Password) => "رمز عبور",
            (Self::Fa, FieldName::PasswordConfirm) => "تکرار رمز عبور",
            (Self::Fa, FieldName::Gender) => "جنسیت",
        }
    }

    pub fn gender_label(&self, gender: Gender) -> &'static str {
        match (self, gender) {
            (Self::En, Gender::Male) => "Male",
            (Self::En, Gender::Female) => "Female",
            (Self::Fa, Gender::Male) => "مرد",
            (Self::Fa, Gender::Female) => "زن",
        }
    }

    /// `(value, display label)` pairs for the gender select
    pub fn gender_options(&self) -> Vec<(&'static str, &'static str)> {
        Gender::ALL
            .into_iter()
            .map(|g| (g.as_str(), self.gender_label(g)))
            .collect()
    }

    /// Message shown next to `field` when it fails with `kind`
    pub fn error_message(&self, field: FieldName, kind: ValidationErrorKind) -> String {
        use super::forms::ValidationErrorKind::{InvalidEnum, Mismatch, TooLong, TooShort};

        match self {
            Self::En => match (field, kind) {
                (FieldName::FirstName, TooShort { min }) => {
                    format!("First name must be at least {min} characters")
                }
                (FieldName::FirstName, TooLong { max }) => {
                    format!("First name must be at most {max} characters")
                }
                (FieldName::LastName, TooShort { min }) => {
                    format!("Last name must be at least {min} characters")
                }
                (FieldName::LastName, TooLong { max }) => {
                    format!("Last name must be at most {max} characters")
                }
                (_, TooShort { min }) => format!("Password must be at least {min} characters"),
                (_, TooLong { max }) => format!("Must be at most {max} characters"),
                (_, Mismatch) => "Passwords do not match".to_string(),
                (_, InvalidEnum) => {
                    let expected: Vec<String> =
                        Gender::ALL.iter().map(|g| format!("'{}'", g.as_str())).collect();
                    format!("Invalid value. Expected {}", expected.join(" | "))
                }
            },
            Self::Fa => match (field, kind) {
                (FieldName::FirstName, TooShort { min }) => {
                    format!("نام نمیتواند کمتر از {} حرف باشد", persian_digits(min))
                }
                (FieldName::FirstName, TooLong { max }) => {
                    format!("نام نمیتواند بیشتر از {} حرف باشد", persian_digits(max))
                }
                (FieldName::LastName, TooShort { min }) => {
                    format!("نام خانوادگی نمیتواند کمتر از {} حرف باشد", persian_digits(min))
                }
                (FieldName::LastName, TooLong { max }) => {
                    format!("نام خانوادگی نمیتواند بیشتر از {} حرف باشد", persian_digits(max))
                }
                (_, TooShort { min }) => {
                    format!("رمز عبور باید حداقل {} حرف باشد", persian_digits(min))
                }
                (_, TooLong { max }) => format!("حداکثر {} حرف مجاز است", persian_digits(max)),
                (_, Mismatch) => "رمز عبور مطابقت ندارد".to_string(),
                (_, InvalidEnum) => "مقدار انتخاب شده معتبر نیست".to_string(),
            },
        }
    }
}

/// Render a number with Extended Arabic-Indic digits
fn persian_digits(n: usize) -> String {
    n.to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x06F0 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
