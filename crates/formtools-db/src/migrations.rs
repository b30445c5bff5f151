//! Embedded schema migrations.
//!
//! Embeds the SQL files under `migrations/` and applies them with `SQLx`'s
//! migrator, which records applied versions in `_sqlx_migrations`.

use crate::error::Result;
use sqlx::{Pool, Sqlite};

/// Apply every pending migration.
///
/// # Errors
/// Returns `DatabaseError::Migration` if any migration fails to execute.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<()> {
    tracing::info!("running database migrations");

    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("database migrations completed");
    Ok(())
}

/// Version of the newest successfully applied migration, or 0 before the
/// first run.
pub async fn get_schema_version(pool: &Pool<Sqlite>) -> Result<i64> {
    let tracked: Option<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_optional(pool)
    .await?;
    if tracked.is_none() {
        return Ok(0);
    }

    let newest: Option<i64> =
        sqlx::query_scalar("SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1")
            .fetch_one(pool)
            .await?;
    Ok(newest.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{connect, IN_MEMORY};

    const LATEST_VERSION: i64 = 20_170_930_000_002;

    #[tokio::test]
    async fn test_run_migrations_creates_core_tables() {
        let pool = connect(IN_MEMORY, 1).await.expect("connect");
        run_migrations(&pool).await.expect("run migrations");

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .expect("query tables");

        assert_eq!(tables, vec!["menu_items", "settings"]);
    }

    #[tokio::test]
    async fn test_schema_version() {
        let pool = connect(IN_MEMORY, 1).await.expect("connect");
        assert_eq!(get_schema_version(&pool).await.expect("get version"), 0);

        run_migrations(&pool).await.expect("first run");
        run_migrations(&pool)
            .await
            .expect("second run should be idempotent");

        assert_eq!(
            get_schema_version(&pool).await.expect("get version"),
            LATEST_VERSION
        );
    }
}
