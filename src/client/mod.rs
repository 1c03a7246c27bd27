//! HTTP client for the contact API.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking` (see [`AsyncContactsClient`]).
//! Drafts are validated locally before submission; an invalid draft never
//! reaches the network.

mod async_wrapper;
mod board;

pub use async_wrapper::{AsyncContactsClient, AsyncContactsClientImpl};
pub use board::{
    Banner, BannerKind, ContactBoard, DELETED_MESSAGE, FORM_ERROR_MESSAGE, LOAD_ERROR_MESSAGE,
    SAVED_MESSAGE,
};

use crate::config::Config;
use crate::domain;
use crate::error::{ClientError, ClientResult};
use crate::models::{Contact, ContactDraft, CreatedResponse, ErrorResponse, MessageResponse};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the contact API.
///
/// This client uses `ureq` for synchronous HTTP requests.
#[derive(Clone)]
pub struct ContactsClient {
    /// API root, e.g. `http://localhost:3000/api`
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl ContactsClient {
    /// Create a new ContactsClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a ContactsClient with a custom base URL (useful for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url.into(), Duration::from_secs(10))
    }

    fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Fetch all contacts, newest first.
    pub fn list_contacts(&self) -> ClientResult<Vec<Contact>> {
        let url = self.build_url("contacts");
        tracing::debug!("GET {}", url);

        let response = self.agent.get(&url).call().map_err(map_error)?;
        read_json(response)
    }

    /// Validate `draft` locally, then submit it.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` without sending anything when a field
    /// is invalid. Server-side rejections (missing fields, duplicate email)
    /// come back as `ClientError::Rejected`.
    pub fn create_contact(&self, draft: &ContactDraft) -> ClientResult<CreatedResponse> {
        domain::validate(draft).map_err(ClientError::Validation)?;

        let url = self.build_url("contacts");
        tracing::debug!("POST {}", url);

        let body = serde_json::to_value(trimmed(draft))?;
        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(map_error)?;
        read_json(response)
    }

    /// Delete a contact by id.
    pub fn delete_contact(&self, id: i64) -> ClientResult<MessageResponse> {
        let url = self.build_url(&format!("contacts/{}", id));
        tracing::debug!("DELETE {}", url);

        let response = self.agent.delete(&url).call().map_err(map_error)?;
        read_json(response)
    }
}

/// The form trims every field before submission.
fn trimmed(draft: &ContactDraft) -> ContactDraft {
    let trim = |v: &Option<String>| v.as_deref().map(|s| s.trim().to_string());
    ContactDraft {
        name: trim(&draft.name),
        email: trim(&draft.email),
        phone: trim(&draft.phone),
        address: trim(&draft.address),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(response: ureq::Response) -> ClientResult<T> {
    let text = response
        .into_string()
        .map_err(|e| ClientError::HttpError(format!("Failed to read response: {}", e)))?;
    Ok(serde_json::from_str(&text)?)
}

/// Map a ureq error to a ClientError, keeping the server's `error` message.
fn map_error(error: ureq::Error) -> ClientError {
    match error {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);

            match code {
                400 => ClientError::Rejected(message),
                404 => ClientError::NotFound(message),
                _ => ClientError::ApiError {
                    status: code,
                    message,
                },
            }
        }
        ureq::Error::Transport(transport) => ClientError::HttpError(transport.to_string()),
    }
}
