//! Configuration management for the contact manager.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact manager server and its store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store host (default: "localhost")
    pub db_host: String,

    /// Store port (default: 3306)
    pub db_port: u16,

    /// Store user (default: "root")
    pub db_user: String,

    /// Store password (default: empty)
    pub db_password: String,

    /// Database name
    pub db_name: String,

    /// Full connection URL, overriding the fields above when set
    pub database_url: Option<String>,

    /// Maximum pooled store connections (default: 5)
    pub db_max_connections: u32,

    /// Interface to bind (default: "0.0.0.0")
    pub host: String,

    /// Listening port (default: 3000)
    pub port: u16,

    /// Base URL the client uses to reach the API (default: "http://localhost:{port}/api")
    pub api_base_url: String,

    /// Client HTTP timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables (unless `DATABASE_URL` is set):
    /// - `DB_NAME`: Database holding the `contacts` table
    ///
    /// Optional environment variables:
    /// - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`: MySQL credentials
    /// - `DATABASE_URL`: Full store URL (`mysql://...` or `sqlite:...`)
    /// - `DB_MAX_CONNECTIONS`: Pool size (default: 5)
    /// - `HOST`, `PORT`: Listening address (default: 0.0.0.0:3000)
    /// - `API_BASE_URL`: API root for the client (default: http://localhost:PORT/api)
    /// - `REQUEST_TIMEOUT`: Client timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        if let Some(url) = &database_url {
            if !url.starts_with("mysql://") && !url.starts_with("sqlite:") {
                return Err(ConfigError::InvalidValue {
                    var: "DATABASE_URL".to_string(),
                    reason: "Must start with mysql:// or sqlite:".to_string(),
                });
            }
        }

        let db_name = match env::var("DB_NAME") {
            Ok(name) if !name.trim().is_empty() => name,
            _ if database_url.is_some() => String::new(),
            _ => return Err(ConfigError::MissingVar("DB_NAME".to_string())),
        };

        let db_port = Self::parse_env_u16("DB_PORT", 3306)?;
        let port = Self::parse_env_u16("PORT", 3000)?;
        let db_max_connections = Self::parse_env_u32("DB_MAX_CONNECTIONS", 5)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}/api", port));
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if db_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DB_MAX_CONNECTIONS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        Ok(Config {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_port,
            db_user: env::var("DB_USER").unwrap_or_else(|_| "root".to_string()),
            db_password: env::var("DB_PASSWORD").unwrap_or_default(),
            db_name,
            database_url,
            db_max_connections,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            api_base_url,
            request_timeout,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Store URL: `DATABASE_URL` when set, otherwise assembled for MySQL.
    pub fn store_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None if self.db_password.is_empty() => format!(
                "mysql://{}@{}:{}/{}",
                self.db_user, self.db_host, self.db_port, self.db_name
            ),
            None => format!(
                "mysql://{}:{}@{}:{}/{}",
                self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
            ),
        }
    }

    /// True when the store URL selects the embedded SQLite gateway.
    pub fn uses_sqlite(&self) -> bool {
        self.database_url
            .as_deref()
            .is_some_and(|url| url.starts_with("sqlite:"))
    }

    /// Socket address to bind, e.g. "0.0.0.0:3000".
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_host: "localhost".to_string(),
            db_port: 3306,
            db_user: "root".to_string(),
            db_password: String::new(),
            db_name: String::new(),
            database_url: None,
            db_max_connections: 5,
            host: "0.0.0.0".to_string(),
            port: 3000,
            api_base_url: "http://localhost:3000/api".to_string(),
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
