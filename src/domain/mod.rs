//! Domain value objects and validation.
//!
//! This module contains type-safe wrappers for the contact fields. Each value
//! object validates at construction time, so an invalid name, email, phone or
//! address can never reach the persistence layer. [`validator`] combines them
//! into the per-field check applied to incoming drafts.

pub mod address;
pub mod contact_id;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod validator;

/// Longest name, email or phone accepted, in characters.
///
/// Matches the `VARCHAR` width of those columns.
pub const MAX_FIELD_CHARS: usize = 255;

pub use address::{Address, MAX_ADDRESS_CHARS};
pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::PersonName;
pub use phone::PhoneNumber;
pub use validator::{validate, Field, FieldErrors};
