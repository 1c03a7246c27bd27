//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is not a positive integer.
    InvalidId(String),

    /// The provided name is empty or contains characters other than letters and whitespace.
    InvalidName(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided address contains a forbidden symbol.
    InvalidAddress(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "Invalid contact id: {}", id),
            Self::InvalidName(name) => write!(f, "Invalid name: {}", name),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidAddress(address) => write!(f, "Invalid address: {}", address),
        }
    }
}

impl std::error::Error for ValidationError {}
