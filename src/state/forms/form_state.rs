//! The in-memory record behind the registration form

use super::field::FieldName;
use serde::{Deserialize, Serialize};

/// Allowed values of the gender field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Parse an exact option value. Matching is case sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

/// Raw field values for one registration attempt.
///
/// Values are unvalidated; `gender` stays a string so that anything outside
/// the enum can reach the schema and be rejected there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
    pub gender: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            password: String::new(),
            password_confirm: String::new(),
            gender: Gender::default().as_str().to_string(),
        }
    }
}

impl FormState {
    /// Current value at a field path
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Password => &self.password,
            FieldName::PasswordConfirm => &self.password_confirm,
            FieldName::Gender => &self.gender,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Password => &mut self.password,
            FieldName::PasswordConfirm => &mut self.password_confirm,
            FieldName::Gender => &mut self.gender,
        }
    }
}
