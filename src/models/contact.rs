//! Contact model: the single persisted entity.

use crate::domain::{Address, EmailAddress, FieldErrors, PersonName, PhoneNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact, as returned by the list endpoint.
///
/// `id` and `created_at` are assigned by the store; every other field was
/// validated at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Contact {
    /// Store-assigned identifier
    pub id: i64,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// Insert timestamp (store default)
    pub created_at: DateTime<Utc>,
}

/// Untrusted input for contact creation.
///
/// Every field is optional at the wire level so that a missing `name` or
/// `email` can be reported as a request error rather than a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ContactDraft {
    /// Create a draft with the two required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: None,
            address: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Flags `name` and `email` when absent or blank. Empty when both are set.
    pub fn missing_required(&self) -> FieldErrors {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        FieldErrors {
            name: blank(&self.name),
            email: blank(&self.email),
            ..Default::default()
        }
    }
}

/// A validated contact ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewContact {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub address: Option<Address>,
}

impl NewContact {
    pub fn phone_str(&self) -> Option<&str> {
        self.phone.as_ref().map(PhoneNumber::as_str)
    }

    pub fn address_str(&self) -> Option<&str> {
        self.address.as_ref().map(Address::as_str)
    }
}
