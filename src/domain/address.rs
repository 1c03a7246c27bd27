//! Address value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Characters never allowed in a postal address.
pub const FORBIDDEN_ADDRESS_CHARS: [char; 9] = ['<', '>', '$', '#', '{', '}', '[', ']', '\\'];

/// Longest address accepted, in characters. A `TEXT` column holds 65535
/// bytes, i.e. this many four-byte characters.
pub const MAX_ADDRESS_CHARS: usize = 16_383;

/// A free-form postal address.
///
/// Anything goes except the markup and template symbols in
/// [`FORBIDDEN_ADDRESS_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Create a new Address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the address is empty, too
    /// long or contains a forbidden symbol.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        if !Self::is_valid(&address) {
            return Err(ValidationError::InvalidAddress(address));
        }
        Ok(Self(address))
    }

    pub fn is_valid(address: &str) -> bool {
        !address.is_empty()
            && address.chars().count() <= MAX_ADDRESS_CHARS
            && !address.contains(FORBIDDEN_ADDRESS_CHARS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
