//! Mapping of [`ContactError`] onto HTTP responses.

use crate::error::ContactError;
use crate::models::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Message returned for every unclassified failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl ContactError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::MissingRequiredFields(_)
            | ContactError::InvalidRequest(_)
            | ContactError::Validation(_)
            | ContactError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ContactError::NotFound(_) => StatusCode::NOT_FOUND,
            ContactError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the caller. Store details never leave the server.
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            ContactError::MissingRequiredFields(missing) => {
                ErrorResponse::with_fields(self.to_string(), &missing.fields())
            }
            ContactError::Validation(errors) => {
                ErrorResponse::with_fields("Invalid contact data", &errors.fields())
            }
            ContactError::NotFound(_) => ErrorResponse::new("Contact not found"),
            ContactError::Store(_) => ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
            other => ErrorResponse::new(other.to_string()),
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        if let ContactError::Store(detail) = &self {
            tracing::error!("Store error: {}", detail);
        }
        (self.status_code(), Json(self.to_error_response())).into_response()
    }
}
