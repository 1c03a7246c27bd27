//! HTTP handlers for the contact API.
//!
//! Handlers only translate between HTTP and the service layer; every rule
//! lives in [`ContactService`].

use crate::domain::ContactId;
use crate::error::ContactError;
use crate::models::{Contact, ContactDraft, CreatedResponse, MessageResponse};
use crate::render::{render_page, ContactListView};
use crate::services::ContactService;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{delete, get};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state.
///
/// Holds the service built once at startup; there is no other shared state.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactService>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>) -> Self {
        Self { contacts }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/contacts", get(list_contacts).post(create_contact))
        .route("/api/contacts/{id}", delete(delete_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /`: entry page with the current list rendered in.
async fn index(State(state): State<AppState>) -> Result<Html<String>, ContactError> {
    let contacts = state.contacts.list_contacts().await?;
    Ok(Html(render_page(&ContactListView::build(&contacts))))
}

/// `GET /api/contacts`
async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ContactError> {
    let contacts = state.contacts.list_contacts().await?;
    Ok(Json(contacts))
}

/// `POST /api/contacts`
async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ContactError> {
    let Json(draft) = payload.map_err(|rejection| {
        tracing::debug!("Rejected create body: {}", rejection.body_text());
        ContactError::InvalidRequest(rejection.body_text())
    })?;

    let id = state.contacts.create_contact(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Contact created successfully".to_string(),
            id: id.get(),
        }),
    ))
}

/// `DELETE /api/contacts/{id}`
async fn delete_contact(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Json<MessageResponse>, ContactError> {
    let raw_id: i64 = segment
        .trim()
        .parse()
        .map_err(|_| ContactError::InvalidRequest(format!("invalid contact id: {}", segment)))?;
    // Ids start at 1, so nothing can match a non-positive one.
    let id = ContactId::new(raw_id).map_err(|_| ContactError::NotFound(raw_id))?;

    state.contacts.delete_contact(id).await?;

    Ok(Json(MessageResponse {
        message: "Contact deleted successfully".to_string(),
    }))
}
