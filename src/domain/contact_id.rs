//! ContactId value object.

use super::errors::ValidationError;
use std::fmt;

/// A type-safe wrapper for store-assigned contact IDs.
///
/// IDs come from an auto-increment column, so only positive values are valid.
///
/// # Example
///
/// ```
/// use contact_manager::domain::ContactId;
///
/// let id = ContactId::new(42).unwrap();
/// assert_eq!(id.get(), 42);
/// assert!(ContactId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(i64);

impl ContactId {
    /// Create a new ContactId, validating that it is positive.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if the value is zero or negative.
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// Get the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
