use super::{map_store_error, ContactRepository};
use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, NewContact};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

// created_at is RFC 3339 text with millisecond precision so it sorts and
// decodes as a UTC timestamp.
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone TEXT NULL,
    address TEXT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)";

const SELECT_ALL: &str = "SELECT id, name, email, phone, address, created_at
    FROM contacts ORDER BY created_at DESC, id DESC";

const INSERT: &str = "INSERT INTO contacts (name, email, phone, address) VALUES (?, ?, ?, ?)";

const DELETE: &str = "DELETE FROM contacts WHERE id = ?";

/// Contact repository backed by an embedded SQLite database.
///
/// Used for single-binary deployments (`DATABASE_URL=sqlite:contacts.db`)
/// and for exercising the SQL statements in tests.
#[derive(Clone)]
pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database at `url` and ensure the schema.
    ///
    /// An in-memory database is private to its connection, so the pool is
    /// capped at one connection in that case.
    pub async fn connect(url: &str, max_connections: u32) -> ContactResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(map_store_error)?
            .create_if_missing(true);

        let max_connections = if url.contains(":memory:") {
            1
        } else {
            max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(map_store_error)?;

        let repo = Self::new(pool);
        repo.ensure_schema().await?;
        Ok(repo)
    }

    /// Fresh private in-memory database.
    pub async fn in_memory() -> ContactResult<Self> {
        Self::connect("sqlite::memory:", 1).await
    }

    pub async fn ensure_schema(&self) -> ContactResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(map_store_error)?;
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn list(&self) -> ContactResult<Vec<Contact>> {
        sqlx::query_as::<_, Contact>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(map_store_error)
    }

    async fn create(&self, contact: &NewContact) -> ContactResult<ContactId> {
        let result = sqlx::query(INSERT)
            .bind(contact.name.as_str())
            .bind(contact.email.as_str())
            .bind(contact.phone_str())
            .bind(contact.address_str())
            .execute(&self.pool)
            .await
            .map_err(map_store_error)?;

        ContactId::new(result.last_insert_rowid()).map_err(|e| ContactError::Store(e.to_string()))
    }

    async fn delete(&self, id: ContactId) -> ContactResult<()> {
        let result = sqlx::query(DELETE)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(map_store_error)?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(id.get()));
        }
        Ok(())
    }
}
