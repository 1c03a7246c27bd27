use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use contact_manager::domain::ContactId;
use contact_manager::error::{ContactError, ContactResult};
use contact_manager::models::{Contact, NewContact};
use contact_manager::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository with the same
/// observable rules as the SQL gateways (unique email, newest first, NotFound
/// on unknown delete) and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    next_id: Arc<Mutex<i64>>,
    fail_with: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
            fail_with: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Timestamp the mock assigns to the contact with this id.
    ///
    /// One second apart so insertion order equals creation order.
    pub fn created_at_for(id: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(id)
    }

    /// Make every subsequent call fail with a store error.
    pub fn fail_with_store_error(&self, detail: &str) {
        *self.fail_with.lock().unwrap() = Some(detail.to_string());
    }

    /// Snapshot of stored contacts in insertion order.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> ContactResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.fail_with.lock().unwrap().as_ref() {
            Some(detail) => Err(ContactError::Store(detail.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list(&self) -> ContactResult<Vec<Contact>> {
        self.track_call("list")?;

        let mut contacts = self.contacts.lock().unwrap().clone();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(contacts)
    }

    async fn create(&self, contact: &NewContact) -> ContactResult<ContactId> {
        self.track_call("create")?;

        let mut contacts = self.contacts.lock().unwrap();

        if contacts.iter().any(|c| c.email == contact.email.as_str()) {
            return Err(ContactError::DuplicateEmail);
        }

        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        contacts.push(Contact {
            id,
            name: contact.name.as_str().to_string(),
            email: contact.email.as_str().to_string(),
            phone: contact.phone_str().map(str::to_string),
            address: contact.address_str().map(str::to_string),
            created_at: Self::created_at_for(id),
        });

        Ok(ContactId::new(id).unwrap())
    }

    async fn delete(&self, id: ContactId) -> ContactResult<()> {
        self.track_call("delete")?;

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id != id.get());

        if contacts.len() == before {
            return Err(ContactError::NotFound(id.get()));
        }
        Ok(())
    }
}
