//! Data models for the contact book.
//!
//! This module contains the stored contact record, the untrusted creation
//! draft, and the JSON bodies exchanged with the HTTP API.

pub mod contact;
pub mod responses;

pub use contact::{Contact, ContactDraft, NewContact};
pub use responses::{CreatedResponse, ErrorResponse, MessageResponse};
