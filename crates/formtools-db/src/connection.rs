//! `SQLite` connection pool setup.

use crate::error::{DatabaseError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Path value that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Open a connection pool for the database at `path`, creating the file if needed.
///
/// An in-memory database lives inside a single connection, so `:memory:`
/// always gets a one-connection pool that never recycles it.
///
/// # Errors
/// Returns `DatabaseError::Open` if the path is not UTF-8 or the database
/// cannot be opened.
pub async fn connect(path: impl AsRef<Path>, max_connections: u32) -> Result<Pool<Sqlite>> {
    let path = path.as_ref();
    let path_str = path
        .to_str()
        .ok_or_else(|| DatabaseError::open(path, "path is not valid UTF-8"))?;

    let in_memory = path_str == IN_MEMORY;
    let connect_options = if in_memory {
        SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DatabaseError::open(path, e))?
    } else {
        SqliteConnectOptions::new()
            .filename(path_str)
            .journal_mode(SqliteJournalMode::Wal)
    }
    .foreign_keys(true)
    .create_if_missing(true);

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = pool_options
        .connect_with(connect_options)
        .await
        .map_err(|e| DatabaseError::open(path, e))?;

    info!(path = %path_str, "database pool created");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_connect_in_memory() {
        let pool = connect(IN_MEMORY, 5).await.expect("connect in memory");
        let one: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("select 1");
        assert_eq!(one, 1);
        assert_eq!(pool.options().get_max_connections(), 1);
    }

    #[tokio::test]
    async fn test_connect_creates_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("formtools.db");

        let pool = connect(&path, 3).await.expect("connect to file");
        sqlx::query("CREATE TABLE t (x INTEGER)")
            .execute(&pool)
            .await
            .expect("create table");
        pool.close().await;

        assert!(path.exists());
    }
}
