//! JSON bodies returned by the contact API.

use crate::domain::Field;
use serde::{Deserialize, Serialize};

/// Body of a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,

    /// Failing fields, only present for validation errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_fields(error: impl Into<String>, fields: &[Field]) -> Self {
        Self {
            error: error.into(),
            fields: fields.iter().map(|f| f.as_str().to_string()).collect(),
        }
    }
}
