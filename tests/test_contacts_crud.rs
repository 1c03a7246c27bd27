//! End-to-end tests for the contact lifecycle.
//!
//! These tests run the real router, SQL gateway and HTTP client together.
//! The blocking client is driven through `AsyncContactsClientImpl`, so the
//! runtime needs worker threads.

mod e2e;
use e2e::{fixtures::*, *};

use contact_manager::client::{AsyncContactsClient, ContactBoard, DELETED_MESSAGE, SAVED_MESSAGE};
use contact_manager::error::ClientError;
use contact_manager::AsyncContactsClientImpl;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_contact_crud_lifecycle() {
    let server = TestServer::start().await;
    let client = AsyncContactsClientImpl::new(server.client());

    // CREATE
    let created = client
        .create_contact(&sample_draft("Ana Pérez", "ana@example.com"))
        .await
        .unwrap();
    assert_eq!(created.message, "Contact created successfully");

    // READ
    let contacts = client.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_contact_valid(&contacts[0]);
    assert_eq!(contacts[0].id, created.id);
    assert_eq!(contacts[0].name, "Ana Pérez");
    assert_eq!(contacts[0].phone.as_deref(), Some("(555) 010-0100"));

    // DELETE
    let deleted = client.delete_contact(created.id).await.unwrap();
    assert_eq!(deleted.message, "Contact deleted successfully");
    assert!(client.list_contacts().await.unwrap().is_empty());

    // DELETE again
    let result = client.delete_contact(created.id).await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_newest_contact_listed_first() {
    let server = TestServer::start().await;
    let client = AsyncContactsClientImpl::new(server.client());

    for (name, email) in [("Ana", "ana@example.com"), ("Luis", "luis@example.com")] {
        client
            .create_contact(&minimal_draft(name, email))
            .await
            .unwrap();
    }

    let contacts = client.list_contacts().await.unwrap();
    assert_eq!(contacts[0].name, "Luis");
    assert_eq!(contacts[1].name, "Ana");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_duplicate_email_rejected_over_http() {
    let server = TestServer::start().await;
    let client = AsyncContactsClientImpl::new(server.client());

    client
        .create_contact(&minimal_draft("Ana", "dup@example.com"))
        .await
        .unwrap();
    let result = client
        .create_contact(&minimal_draft("Eva", "dup@example.com"))
        .await;

    match result {
        Err(ClientError::Rejected(message)) => {
            assert_eq!(message, "A contact with this email already exists")
        }
        other => panic!("Expected Rejected error, got: {:?}", other),
    }
    assert_eq!(client.list_contacts().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_board_against_live_server() {
    let server = TestServer::start().await;
    let mut board = ContactBoard::new(Arc::new(AsyncContactsClientImpl::new(server.client())));

    let banner = board
        .submit(&sample_draft("José Núñez", "jose@example.com"))
        .await;
    assert_eq!(banner.message, SAVED_MESSAGE);
    assert_eq!(board.view().len(), 1);

    let action = board.view().actions()[0];
    let banner = board.dispatch(action, &|_: &str| true).await.unwrap();
    assert_eq!(banner.message, DELETED_MESSAGE);
    assert!(board.view().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_entry_page_served() {
    let server = TestServer::start().await;
    let client = AsyncContactsClientImpl::new(server.client());
    client
        .create_contact(&minimal_draft("Ana", "ana@example.com"))
        .await
        .unwrap();

    let url = format!("{}/", server.root_url());
    let html = tokio::task::spawn_blocking(move || {
        ureq::get(&url).call().unwrap().into_string().unwrap()
    })
    .await
    .unwrap();

    assert!(html.contains("<h3>Ana</h3>"));
    assert!(html.contains(r#"data-action="delete""#));
}
