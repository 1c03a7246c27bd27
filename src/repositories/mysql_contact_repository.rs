use super::{map_store_error, ContactRepository};
use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, NewContact};
use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

// Column widths match the validator limits, so any valid draft fits.
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    phone VARCHAR(255) NULL,
    address TEXT NULL,
    created_at TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6)
) DEFAULT CHARSET = utf8mb4";

const SELECT_ALL: &str = "SELECT id, name, email, phone, address, created_at
    FROM contacts ORDER BY created_at DESC, id DESC";

const INSERT: &str = "INSERT INTO contacts (name, email, phone, address) VALUES (?, ?, ?, ?)";

const DELETE: &str = "DELETE FROM contacts WHERE id = ?";

/// Contact repository backed by a MySQL connection pool.
///
/// The pool is created once at startup and shared by every request.
#[derive(Clone)]
pub struct MySqlContactRepository {
    pool: MySqlPool,
}

impl MySqlContactRepository {
    /// Wrap an existing pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `url` and make sure the `contacts` table exists.
    pub async fn connect(url: &str, max_connections: u32) -> ContactResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(map_store_error)?;

        let repo = Self::new(pool);
        repo.ensure_schema().await?;
        Ok(repo)
    }

    /// Create the `contacts` table if it is missing.
    pub async fn ensure_schema(&self) -> ContactResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(map_store_error)?;
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for MySqlContactRepository {
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

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| ContactError::Store("insert id out of range".to_string()))?;
        ContactId::new(id).map_err(|e| ContactError::Store(e.to_string()))
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
