//! Persistence gateway.
//!
//! The [`ContactRepository`] trait is the seam between the service layer and
//! the relational store. MySQL is the production store; SQLite serves
//! embedded deployments and tests.

mod mysql_contact_repository;
mod sqlite_contact_repository;
mod traits;

pub use mysql_contact_repository::MySqlContactRepository;
pub use sqlite_contact_repository::SqliteContactRepository;
pub use traits::ContactRepository;

use crate::config::Config;
use crate::error::{ContactError, ContactResult};
use std::sync::Arc;

/// Translate a driver error into the contact error taxonomy.
pub(crate) fn map_store_error(err: sqlx::Error) -> ContactError {
    match &err {
        // email is the only unique column written by clients
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ContactError::DuplicateEmail
        }
        _ => ContactError::Store(err.to_string()),
    }
}

/// Open the store selected by the configuration.
pub async fn connect(config: &Config) -> ContactResult<Arc<dyn ContactRepository>> {
    let url = config.store_url();
    if config.uses_sqlite() {
        tracing::info!("Using SQLite store at {}", url);
        let repo = SqliteContactRepository::connect(&url, config.db_max_connections).await?;
        Ok(Arc::new(repo))
    } else {
        tracing::info!(
            "Using MySQL store at {}:{}/{}",
            config.db_host,
            config.db_port,
            config.db_name
        );
        let repo = MySqlContactRepository::connect(&url, config.db_max_connections).await?;
        Ok(Arc::new(repo))
    }
}
