//! Form field paths

use serde::{Deserialize, Serialize};

/// A named path into the registration form.
///
/// Variants are declared in display order, so ordered collections keyed by
/// `FieldName` iterate the fields top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Password,
    PasswordConfirm,
    Gender,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Password,
        FieldName::PasswordConfirm,
        FieldName::Gender,
    ];

    /// Path used in error maps and serialized output
    pub fn path(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Password => "password",
            Self::PasswordConfirm => "passwordConfirm",
            Self::Gender => "gender",
        }
    }

    /// Position of the field on the form
    pub fn index(&self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Password => 2,
            Self::PasswordConfirm => 3,
            Self::Gender => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether the field is bound to a select control instead of a text box
    pub fn is_select(&self) -> bool {
        matches!(self, Self::Gender)
    }

    /// Whether the field holds a secret
    pub fn is_password(&self) -> bool {
        matches!(self, Self::Password | Self::PasswordConfirm)
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
