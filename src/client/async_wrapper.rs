//! Async wrapper around the synchronous ContactsClient.
//!
//! This module provides an async interface to [`ContactsClient`] by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread
//! pool, preventing blocking of the async runtime.

use crate::client::ContactsClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{Contact, ContactDraft, CreatedResponse, MessageResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Async contact API operations.
#[async_trait]
pub trait AsyncContactsClient: Send + Sync {
    async fn list_contacts(&self) -> ClientResult<Vec<Contact>>;
    async fn create_contact(&self, draft: &ContactDraft) -> ClientResult<CreatedResponse>;
    async fn delete_contact(&self, id: i64) -> ClientResult<MessageResponse>;
}

/// Async wrapper around synchronous ContactsClient.
#[derive(Clone)]
pub struct AsyncContactsClientImpl {
    client: Arc<ContactsClient>,
}

impl AsyncContactsClientImpl {
    pub fn new(client: ContactsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> ClientError {
    ClientError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncContactsClient for AsyncContactsClientImpl {
    async fn list_contacts(&self) -> ClientResult<Vec<Contact>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_contacts())
            .await
            .map_err(join_error)?
    }

    async fn create_contact(&self, draft: &ContactDraft) -> ClientResult<CreatedResponse> {
        let client = self.client.clone();
        let draft = draft.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&draft))
            .await
            .map_err(join_error)?
    }

    async fn delete_contact(&self, id: i64) -> ClientResult<MessageResponse> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.delete_contact(id))
            .await
            .map_err(join_error)?
    }
}
