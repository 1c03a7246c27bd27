//! PersonName value object.

use super::errors::ValidationError;
use super::MAX_FIELD_CHARS;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("Failed to compile name regex")
});

/// A contact's display name.
///
/// Only ASCII letters, the Spanish accented vowels, `ñ`/`Ñ` and whitespace are
/// accepted.
///
/// # Example
///
/// ```
/// use contact_manager::domain::PersonName;
///
/// assert!(PersonName::new("José Núñez").is_ok());
/// assert!(PersonName::new("R2D2").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is empty, longer than
    /// [`MAX_FIELD_CHARS`], or contains digits, punctuation or other symbols.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }
        Ok(Self(name))
    }

    /// Validate name characters.
    pub fn is_valid(name: &str) -> bool {
        name.chars().count() <= MAX_FIELD_CHARS && NAME_REGEX.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
