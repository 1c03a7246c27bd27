//! Client-side contact board.
//!
//! Holds what the page shows (the rendered list, per-field error flags) and
//! runs user operations against the API, reporting each outcome as a
//! [`Banner`]. A failed operation leaves the current view untouched.

use super::AsyncContactsClient;
use crate::domain::FieldErrors;
use crate::error::ClientError;
use crate::models::ContactDraft;
use crate::render::{Confirm, ContactListView, ViewAction};
use std::sync::Arc;

pub const SAVED_MESSAGE: &str = "Contact saved successfully";
pub const DELETED_MESSAGE: &str = "Contact deleted";
pub const FORM_ERROR_MESSAGE: &str = "Please correct the errors in the form";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading contacts";
const UNREACHABLE_MESSAGE: &str = "Could not reach the server";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Transient message summarizing the last operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

/// The contact form and list, driven through the API client.
pub struct ContactBoard {
    client: Arc<dyn AsyncContactsClient>,
    view: ContactListView,
    field_errors: FieldErrors,
}

impl ContactBoard {
    pub fn new(client: Arc<dyn AsyncContactsClient>) -> Self {
        Self {
            client,
            view: ContactListView::build(&[]),
            field_errors: FieldErrors::default(),
        }
    }

    /// Current list view.
    pub fn view(&self) -> &ContactListView {
        &self.view
    }

    /// Field flags from the last submit.
    pub fn field_errors(&self) -> FieldErrors {
        self.field_errors
    }

    /// Reload the list from the API.
    ///
    /// # Errors
    ///
    /// Returns an error banner when the list cannot be fetched; the previous
    /// view is kept.
    pub async fn refresh(&mut self) -> Result<(), Banner> {
        match self.client.list_contacts().await {
            Ok(contacts) => {
                self.view = ContactListView::build(&contacts);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load contacts: {}", e);
                Err(Banner::error(LOAD_ERROR_MESSAGE))
            }
        }
    }

    /// Submit the form. Field flags are reset first and set again only for
    /// fields the local validator rejects.
    pub async fn submit(&mut self, draft: &ContactDraft) -> Banner {
        self.field_errors = FieldErrors::default();

        match self.client.create_contact(draft).await {
            Ok(created) => {
                tracing::debug!("Saved contact {}", created.id);
                if let Err(banner) = self.refresh().await {
                    return banner;
                }
                Banner::success(SAVED_MESSAGE)
            }
            Err(ClientError::Validation(errors)) => {
                self.field_errors = errors;
                Banner::error(FORM_ERROR_MESSAGE)
            }
            Err(e) => Banner::error(user_message(e)),
        }
    }

    /// Run a view action. Returns `None` when the user declines confirmation,
    /// in which case no request is made.
    pub async fn dispatch(&mut self, action: ViewAction, confirm: &dyn Confirm) -> Option<Banner> {
        if !confirm.confirm(action.confirmation()) {
            return None;
        }

        match action {
            ViewAction::Delete { id } => match self.client.delete_contact(id).await {
                Ok(_) => {
                    if let Err(banner) = self.refresh().await {
                        return Some(banner);
                    }
                    Some(Banner::success(DELETED_MESSAGE))
                }
                Err(e) => Some(Banner::error(user_message(e))),
            },
        }
    }
}

/// Text shown to the user for a failed request.
fn user_message(error: ClientError) -> String {
    match error {
        ClientError::Rejected(message)
        | ClientError::NotFound(message)
        | ClientError::ApiError { message, .. } => message,
        ClientError::Validation(_) => FORM_ERROR_MESSAGE.to_string(),
        ClientError::HttpError(detail) => {
            tracing::error!("Request failed: {}", detail);
            UNREACHABLE_MESSAGE.to_string()
        }
        ClientError::JsonError(e) => {
            tracing::error!("Unexpected response: {}", e);
            UNREACHABLE_MESSAGE.to_string()
        }
    }
}
