//! Contact service layer.
//!
//! Business rules for the three contact operations. Each call is independent:
//! there is no shared transaction and no retry.

use crate::domain::{self, ContactId};
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactDraft};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts, newest first.
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>>;

    /// Validate and insert a draft, returning the new id.
    ///
    /// The draft is validated here regardless of any client-side check.
    async fn create_contact(&self, draft: ContactDraft) -> ContactResult<ContactId>;

    /// Delete a contact by id.
    async fn delete_contact(&self, id: ContactId) -> ContactResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ContactResult<Vec<Contact>> {
        let contacts = self.repository.list().await?;
        tracing::debug!("Listed {} contacts", contacts.len());
        Ok(contacts)
    }

    async fn create_contact(&self, draft: ContactDraft) -> ContactResult<ContactId> {
        let missing = draft.missing_required();
        if !missing.is_empty() {
            return Err(ContactError::MissingRequiredFields(missing));
        }

        let contact = domain::validate(&draft).map_err(ContactError::Validation)?;

        let id = self.repository.create(&contact).await?;
        tracing::info!("Created contact {}", id);
        Ok(id)
    }

    async fn delete_contact(&self, id: ContactId) -> ContactResult<()> {
        self.repository.delete(id).await?;
        tracing::info!("Deleted contact {}", id);
        Ok(())
    }
}
