//! Form Tools Database Layer
//!
//! Provides `SQLite` access for the core tables that modules share: the
//! settings table and the navigation menu. Uses `SQLx` with embedded,
//! versioned migrations.
//!
//! # Architecture
//!
//! - **Connection**: [`connection::connect`] builds the pool; `:memory:` is a single connection
//! - **Migrations**: SQL files under `migrations/`, applied with `sqlx::migrate!`
//! - **Settings**: module-scoped name/value storage ([`settings`])
//! - **Menu items**: navigation entries keyed by page identifier ([`menu_items`])
//!
//! Module-owned tables (such as the Pages module's) are created by the
//! module's own install step, not by these migrations.
//!
//! # Example
//!
//! ```ignore
//! use formtools_db::Database;
//!
//! let db = Database::new("formtools.db", 5).await?;
//! db.run_migrations().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod connection;
pub mod error;
pub mod menu_items;
pub mod migrations;
pub mod settings;

// Re-export commonly used types
pub use error::{DatabaseError, Result};
pub use menu_items::MenuItem;

use formtools_core::DatabaseConfig;
use sqlx::{Pool, Sqlite};
use std::path::Path;

/// High-level database handle.
#[derive(Debug, Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open the database at `path` (or `:memory:`).
    ///
    /// # Errors
    /// Returns `DatabaseError::Open` if the database cannot be opened.
    pub async fn new(path: impl AsRef<Path>, max_connections: u32) -> Result<Self> {
        let pool = connection::connect(path, max_connections).await?;
        Ok(Self { pool })
    }

    /// Open the database described by the `[database]` config section.
    ///
    /// # Errors
    /// Returns `DatabaseError::Open` if the database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Self::new(&config.path, config.max_connections).await
    }

    /// Wrap an existing pool.
    #[must_use]
    pub fn from_pool(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Run all pending database migrations.
    ///
    /// # Errors
    /// Returns `DatabaseError::Migration` if any migration fails.
    pub async fn run_migrations(&self) -> Result<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Version of the newest applied migration.
    ///
    /// # Errors
    /// Returns `DatabaseError` if the version cannot be queried.
    pub async fn get_schema_version(&self) -> Result<i64> {
        migrations::get_schema_version(&self.pool).await
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Close every connection.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_from_config() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config = DatabaseConfig {
            path: temp_dir.path().join("forms.db"),
            max_connections: 2,
        };

        let db = Database::from_config(&config).await.expect("open database");
        db.run_migrations().await.expect("run migrations");
        assert!(db.get_schema_version().await.expect("get version") > 0);
        db.close().await;

        assert!(config.path.exists());
    }

    #[tokio::test]
    async fn test_from_pool_shares_connection() {
        let db = Database::new(PathBuf::from(":memory:"), 1)
            .await
            .expect("open database");
        db.run_migrations().await.expect("run migrations");

        let other = Database::from_pool(db.pool().clone());
        settings::set_setting(other.pool(), "core", "k", "v")
            .await
            .expect("set setting");
        let value = settings::get_setting(db.pool(), "core", "k")
            .await
            .expect("get setting");
        assert_eq!(value.as_deref(), Some("v"));
    }
}
