//! Contact Manager - a small contact book served over a JSON REST API.
//!
//! Contacts (name, email, optional phone and address) are validated, stored
//! in a relational table, listed newest first and deleted by id.
//!
//! # Architecture
//!
//! - **domain**: Value objects and the field validator
//! - **models**: Stored contact, creation draft and API bodies
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Persistence gateway over MySQL or SQLite
//! - **services**: Contact business rules
//! - **server**: axum HTTP API
//! - **render**: View-model, HTML escaping and markup
//! - **client**: HTTP client and client-side board for the API

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod render;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::{AsyncContactsClient, AsyncContactsClientImpl, ContactBoard, ContactsClient};
pub use config::Config;
pub use error::{ClientError, ConfigError, ContactError};
pub use models::{Contact, ContactDraft, NewContact};
pub use repositories::{ContactRepository, MySqlContactRepository, SqliteContactRepository};
pub use server::AppState;
pub use services::{ContactService, ContactServiceImpl};
