//! Provider record model.
//!
//! A record is five string fields. Field identity is the [`Field`] enum;
//! the snake_case names double as the serialized keys in the stored blob.

use serde::{Deserialize, Serialize};

/// One provider entry in the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub specialty: String,
    pub practice_name: String,
}

impl ProviderRecord {
    /// Read a field by key.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::EmailAddress => &self.email_address,
            Field::Specialty => &self.specialty,
            Field::PracticeName => &self.practice_name,
        }
    }

    /// Overwrite a field by key.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::EmailAddress => self.email_address = value,
            Field::Specialty => self.specialty = value,
            Field::PracticeName => self.practice_name = value,
        }
    }
}

/// Field key for a [`ProviderRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    EmailAddress,
    Specialty,
    PracticeName,
}

impl Field {
    /// All fields in display order (form top-to-bottom, table left-to-right).
    pub const ALL: [Field; 5] = [
        Field::LastName,
        Field::FirstName,
        Field::EmailAddress,
        Field::Specialty,
        Field::PracticeName,
    ];

    /// The snake_case key, as used in the stored blob.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::EmailAddress => "email_address",
            Field::Specialty => "specialty",
            Field::PracticeName => "practice_name",
        }
    }
}

impl std::str::FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" => Ok(Field::FirstName),
            "last_name" => Ok(Field::LastName),
            "email_address" => Ok(Field::EmailAddress),
            "specialty" => Ok(Field::Specialty),
            "practice_name" => Ok(Field::PracticeName),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field key that is not part of the provider record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider field: {0}")]
pub struct UnknownField(pub String);
