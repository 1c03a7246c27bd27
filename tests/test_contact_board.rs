//! Client-side board flows against a scripted API client.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use contact_manager::client::{
    AsyncContactsClient, ContactBoard, DELETED_MESSAGE, FORM_ERROR_MESSAGE, LOAD_ERROR_MESSAGE,
    SAVED_MESSAGE,
};
use contact_manager::domain;
use contact_manager::error::{ClientError, ClientResult};
use contact_manager::models::{Contact, ContactDraft, CreatedResponse, MessageResponse};
use contact_manager::render::{ContactListView, ViewAction, DELETE_CONFIRMATION};
use std::sync::{Arc, Mutex};

/// In-memory API double. Validates drafts like the real client and records
/// every request that would have gone over the wire.
#[derive(Default)]
struct FakeApi {
    contacts: Mutex<Vec<Contact>>,
    requests: Mutex<Vec<String>>,
    offline: Mutex<bool>,
}

impl FakeApi {
    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn go_offline(&self) {
        *self.offline.lock().unwrap() = true;
    }

    fn record(&self, request: String) -> ClientResult<()> {
        self.requests.lock().unwrap().push(request);
        if *self.offline.lock().unwrap() {
            return Err(ClientError::HttpError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AsyncContactsClient for FakeApi {
    async fn list_contacts(&self) -> ClientResult<Vec<Contact>> {
        self.record("GET".to_string())?;
        let mut contacts = self.contacts.lock().unwrap().clone();
        contacts.reverse();
        Ok(contacts)
    }

    async fn create_contact(&self, draft: &ContactDraft) -> ClientResult<CreatedResponse> {
        let new = domain::validate(draft).map_err(ClientError::Validation)?;
        self.record("POST".to_string())?;

        let mut contacts = self.contacts.lock().unwrap();
        if contacts.iter().any(|c| c.email == new.email.as_str()) {
            return Err(ClientError::Rejected(
                "A contact with this email already exists".to_string(),
            ));
        }
        let id = contacts.len() as i64 + 1;
        contacts.push(Contact {
            id,
            name: new.name.as_str().to_string(),
            email: new.email.as_str().to_string(),
            phone: new.phone_str().map(str::to_string),
            address: new.address_str().map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, id as u32).unwrap(),
        });
        Ok(CreatedResponse {
            message: "Contact created successfully".to_string(),
            id,
        })
    }

    async fn delete_contact(&self, id: i64) -> ClientResult<MessageResponse> {
        self.record(format!("DELETE {}", id))?;

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        if contacts.len() == before {
            return Err(ClientError::NotFound("Contact not found".to_string()));
        }
        Ok(MessageResponse {
            message: "Contact deleted successfully".to_string(),
        })
    }
}

fn board() -> (ContactBoard, Arc<FakeApi>) {
    let api = Arc::new(FakeApi::default());
    (ContactBoard::new(api.clone()), api)
}

#[tokio::test]
async fn test_new_board_shows_placeholder() {
    let (mut board, _api) = board();
    board.refresh().await.unwrap();
    assert!(matches!(board.view(), ContactListView::Empty { .. }));
}

#[tokio::test]
async fn test_submit_saves_and_refreshes() {
    let (mut board, _api) = board();

    let banner = board.submit(&ContactDraft::new("Ana", "ana@example.com")).await;

    assert!(!banner.is_error());
    assert_eq!(banner.message, SAVED_MESSAGE);
    assert_eq!(board.view().len(), 1);
    assert!(board.field_errors().is_empty());
}

#[tokio::test]
async fn test_invalid_submit_flags_fields_and_sends_nothing() {
    let (mut board, api) = board();

    let draft = ContactDraft::new("Ana 2", "ana@example.com").with_phone("call me");
    let banner = board.submit(&draft).await;

    assert!(banner.is_error());
    assert_eq!(banner.message, FORM_ERROR_MESSAGE);
    let errors = board.field_errors();
    assert!(errors.name);
    assert!(!errors.email);
    assert!(errors.phone);
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_field_flags_clear_on_next_submit() {
    let (mut board, _api) = board();
    board.submit(&ContactDraft::new("Ana", "bad")).await;
    assert!(board.field_errors().email);

    board.submit(&ContactDraft::new("Ana", "ana@example.com")).await;
    assert!(board.field_errors().is_empty());
}

#[tokio::test]
async fn test_duplicate_email_shows_server_message() {
    let (mut board, _api) = board();
    board.submit(&ContactDraft::new("Ana", "dup@example.com")).await;

    let banner = board.submit(&ContactDraft::new("Eva", "dup@example.com")).await;

    assert!(banner.is_error());
    assert_eq!(banner.message, "A contact with this email already exists");
    assert_eq!(board.view().len(), 1);
}

#[tokio::test]
async fn test_declined_delete_makes_no_request() {
    let (mut board, api) = board();
    board.submit(&ContactDraft::new("Ana", "ana@example.com")).await;
    let before = api.requests().len();

    let action = board.view().actions()[0];
    let prompts = Mutex::new(Vec::new());
    let decline = |prompt: &str| {
        prompts.lock().unwrap().push(prompt.to_string());
        false
    };
    let banner = board.dispatch(action, &decline).await;

    assert!(banner.is_none());
    assert_eq!(api.requests().len(), before);
    assert_eq!(board.view().len(), 1);
    assert_eq!(*prompts.lock().unwrap(), vec![DELETE_CONFIRMATION.to_string()]);
}

#[tokio::test]
async fn test_confirmed_delete_removes_contact() {
    let (mut board, api) = board();
    board.submit(&ContactDraft::new("Ana", "ana@example.com")).await;

    let action = board.view().actions()[0];
    assert_eq!(action, ViewAction::Delete { id: 1 });
    let banner = board.dispatch(action, &|_: &str| true).await.unwrap();

    assert_eq!(banner.message, DELETED_MESSAGE);
    assert!(board.view().is_empty());
    assert!(api.requests().contains(&"DELETE 1".to_string()));
}

#[tokio::test]
async fn test_delete_of_vanished_contact_reports_not_found() {
    let (mut board, _api) = board();
    let banner = board
        .dispatch(ViewAction::Delete { id: 42 }, &|_: &str| true)
        .await
        .unwrap();

    assert!(banner.is_error());
    assert_eq!(banner.message, "Contact not found");
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_view() {
    let (mut board, api) = board();
    board.submit(&ContactDraft::new("Ana", "ana@example.com")).await;
    let before = board.view().clone();

    api.go_offline();
    let banner = board.refresh().await.unwrap_err();

    assert_eq!(banner.message, LOAD_ERROR_MESSAGE);
    assert_eq!(board.view(), &before);
}

#[tokio::test]
async fn test_unreachable_server_on_submit() {
    let (mut board, api) = board();
    api.go_offline();

    let banner = board.submit(&ContactDraft::new("Ana", "ana@example.com")).await;

    assert!(banner.is_error());
    assert_eq!(banner.message, "Could not reach the server");
    assert!(board.view().is_empty());
}
