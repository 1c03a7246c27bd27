use crate::domain::ContactId;
use crate::error::ContactResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;

/// Persistence gateway for contacts.
///
/// Implementations run parameterized statements against a relational store
/// and translate store failures into [`ContactError`](crate::error::ContactError):
/// a uniqueness violation on email becomes `DuplicateEmail`, a delete that
/// matches no row becomes `NotFound`, anything else becomes `Store`.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All contacts, newest first (ties broken by descending id).
    async fn list(&self) -> ContactResult<Vec<Contact>>;

    /// Insert a validated contact and return the store-assigned id.
    async fn create(&self, contact: &NewContact) -> ContactResult<ContactId>;

    /// Delete a contact by id.
    async fn delete(&self, id: ContactId) -> ContactResult<()>;
}
