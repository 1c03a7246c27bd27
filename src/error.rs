//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::FieldErrors;
use thiserror::Error;

/// Errors produced by the contact API and its persistence gateway.
///
/// Each variant maps to exactly one HTTP status; see `server::handlers`.
#[derive(Error, Debug)]
pub enum ContactError {
    /// `name` or `email` absent from a create request; flags the absent ones
    #[error("Name and email are required")]
    MissingRequiredFields(FieldErrors),

    /// Request body or path could not be interpreted
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// One or more fields failed validation
    #[error("Invalid contact data ({0})")]
    Validation(FieldErrors),

    /// Email already used by another contact
    #[error("A contact with this email already exists")]
    DuplicateEmail,

    /// Delete of an unknown id
    #[error("Contact not found: {0}")]
    NotFound(i64),

    /// Unclassified store or connectivity failure
    #[error("Store error: {0}")]
    Store(String),
}

/// Errors that can occur when calling the contact API over HTTP.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Draft rejected locally, nothing was sent
    #[error("Please correct the errors in the form ({0})")]
    Validation(FieldErrors),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Server rejected the request (400)
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned another error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
