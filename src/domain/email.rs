//! EmailAddress value object.

use super::errors::ValidationError;
use super::MAX_FIELD_CHARS;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// `local@domain.tld`, no whitespace and a single `@`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// This ensures that email addresses are validated at construction time.
/// The validation is deliberately shallow: it accepts anything shaped like
/// `local@domain.tld` without whitespace.
///
/// # Example
///
/// ```
/// use contact_manager::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - Must contain exactly one '@' with a non-empty local part
    /// - The domain part must contain a '.' with text on both sides
    /// - No whitespace anywhere
    /// - At most [`MAX_FIELD_CHARS`] characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Validate email format.
    pub fn is_valid(email: &str) -> bool {
        email.chars().count() <= MAX_FIELD_CHARS && EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
