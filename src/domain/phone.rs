//! PhoneNumber value object.

use super::errors::ValidationError;
use super::MAX_FIELD_CHARS;
use serde::{Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers are free-form but restricted to digits and the usual
/// formatting characters.
///
/// # Example
///
/// ```
/// use contact_manager::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("123-456 (78)").unwrap();
/// assert_eq!(phone.as_str(), "123-456 (78)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - Can contain: digits, whitespace, hyphens, parentheses
    /// - At most [`MAX_FIELD_CHARS`] characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    pub fn is_valid(phone: &str) -> bool {
        if phone.is_empty() || phone.chars().count() > MAX_FIELD_CHARS {
            return false;
        }

        phone
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == '-' || c == '(' || c == ')')
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
