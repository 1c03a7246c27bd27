//! End-to-end test utilities.
//!
//! Each test gets its own server on an ephemeral port, backed by a private
//! in-memory SQLite database, and a client pointed at it.

use contact_manager::server::{router, AppState};
use contact_manager::{Contact, ContactsClient, ContactServiceImpl, SqliteContactRepository};
use std::sync::Arc;
use tokio::net::TcpListener;

pub mod fixtures;

/// A running server and its API root.
pub struct TestServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a server over a fresh database.
    ///
    /// # Panics
    /// Panics if the database or the listener cannot be set up.
    pub async fn start() -> Self {
        let repo = SqliteContactRepository::in_memory()
            .await
            .expect("in-memory SQLite should open");
        let service = Arc::new(ContactServiceImpl::new(Arc::new(repo)));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port should bind");
        let addr = listener.local_addr().expect("listener has an address");

        let app = router(AppState::new(service));
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}/api", addr),
            handle,
        }
    }

    /// Root URL of the server, without the `/api` suffix.
    #[allow(dead_code)]
    pub fn root_url(&self) -> String {
        self.base_url.trim_end_matches("/api").to_string()
    }

    pub fn client(&self) -> ContactsClient {
        ContactsClient::with_base_url(self.base_url.clone())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Assert that a contact has valid required fields.
#[allow(dead_code)]
pub fn assert_contact_valid(contact: &Contact) {
    assert!(contact.id > 0, "Contact ID should be positive");
    assert!(!contact.name.is_empty(), "Contact name should not be empty");
    assert!(!contact.email.is_empty(), "Contact email should not be empty");
}
