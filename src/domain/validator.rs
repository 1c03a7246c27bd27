//! Field-level validation of contact drafts.
//!
//! Every field is checked independently and failures accumulate, so a caller
//! can flag all offending inputs at once rather than stopping at the first.
//! Validation is purely local and never consults the store; email uniqueness
//! is only detectable at insert time.

use super::{Address, EmailAddress, PersonName, PhoneNumber};
use crate::models::{ContactDraft, NewContact};
use serde::Serialize;
use std::fmt;

/// A validated input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Address,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
        }
    }
}

/// Per-field error flags produced by [`validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
    pub address: bool,
}

impl FieldErrors {
    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        !(self.name || self.email || self.phone || self.address)
    }

    /// Whether the given field failed.
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone,
            Field::Address => self.address,
        }
    }

    /// Failing fields, in form order.
    pub fn fields(&self) -> Vec<Field> {
        [Field::Name, Field::Email, Field::Phone, Field::Address]
            .into_iter()
            .filter(|f| self.has(*f))
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields().into_iter().map(Field::as_str).collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

/// Validate a draft and build the record to persist.
///
/// Inputs are trimmed first. `name` and `email` are required; `phone` and
/// `address` are only checked when non-empty and become `None` otherwise.
///
/// # Errors
///
/// Returns the set of failing fields when any predicate rejects its input.
pub fn validate(draft: &ContactDraft) -> Result<NewContact, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = PersonName::new(trimmed(&draft.name).unwrap_or_default());
    errors.name = name.is_err();

    let email = EmailAddress::new(trimmed(&draft.email).unwrap_or_default());
    errors.email = email.is_err();

    let phone = trimmed(&draft.phone).map(PhoneNumber::new).transpose();
    errors.phone = phone.is_err();

    let address = trimmed(&draft.address).map(Address::new).transpose();
    errors.address = address.is_err();

    match (name, email, phone, address) {
        (Ok(name), Ok(email), Ok(phone), Ok(address)) => Ok(NewContact {
            name,
            email,
            phone,
            address,
        }),
        _ => Err(errors),
    }
}

/// Trimmed, non-empty field value.
fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
