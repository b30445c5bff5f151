//! Settings storage.
//!
//! Settings are name/value strings scoped by module; the core's own settings
//! use [`CORE_MODULE`]. Every function takes any `SQLite` executor so it can
//! run on the pool or inside a caller's transaction.

use crate::error::Result;
use sqlx::SqliteExecutor;
use std::collections::HashMap;

/// Module name of the core's own settings.
pub const CORE_MODULE: &str = "core";

/// Insert or replace a setting.
pub async fn set_setting<'e>(
    executor: impl SqliteExecutor<'e>,
    module: &str,
    name: &str,
    value: &str,
) -> Result<()> {
    sqlx::query(
        r"
        INSERT INTO settings (setting_name, setting_value, module)
        VALUES (?, ?, ?)
        ON CONFLICT(setting_name, module) DO UPDATE SET
            setting_value = excluded.setting_value
        ",
    )
    .bind(name)
    .bind(value)
    .bind(module)
    .execute(executor)
    .await?;

    Ok(())
}

/// Get one setting.
pub async fn get_setting<'e>(
    executor: impl SqliteExecutor<'e>,
    module: &str,
    name: &str,
) -> Result<Option<String>> {
    let value = sqlx::query_scalar::<_, String>(
        r"
        SELECT setting_value
        FROM settings
        WHERE module = ? AND setting_name = ?
        ",
    )
    .bind(module)
    .bind(name)
    .fetch_optional(executor)
    .await?;

    Ok(value)
}

/// Get every setting of a module by name.
pub async fn get_settings<'e>(
    executor: impl SqliteExecutor<'e>,
    module: &str,
) -> Result<HashMap<String, String>> {
    let rows: Vec<(String, String)> = sqlx::query_as(
        r"
        SELECT setting_name, setting_value
        FROM settings
        WHERE module = ?
        ",
    )
    .bind(module)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().collect())
}

/// Delete every setting of a module, returning how many were removed.
pub async fn delete_module_settings<'e>(
    executor: impl SqliteExecutor<'e>,
    module: &str,
) -> Result<u64> {
    let result = sqlx::query("DELETE FROM settings WHERE module = ?")
        .bind(module)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn create_test_db() -> Database {
        let db = Database::new(":memory:", 1)
            .await
            .expect("create test database");
        db.run_migrations().await.expect("run migrations");
        db
    }

    #[tokio::test]
    async fn test_set_and_get_setting() {
        let db = create_test_db().await;
        let pool = db.pool();

        set_setting(pool, "pages", "num_pages_per_page", "10")
            .await
            .expect("set setting");
        let value = get_setting(pool, "pages", "num_pages_per_page")
            .await
            .expect("get setting");
        assert_eq!(value.as_deref(), Some("10"));

        // same name, different module
        let value = get_setting(pool, CORE_MODULE, "num_pages_per_page")
            .await
            .expect("get setting");
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_set_setting_upserts() {
        let db = create_test_db().await;
        let pool = db.pool();

        set_setting(pool, CORE_MODULE, "program_name", "Form Tools")
            .await
            .expect("set setting");
        set_setting(pool, CORE_MODULE, "program_name", "Forms")
            .await
            .expect("replace setting");

        let settings = get_settings(pool, CORE_MODULE).await.expect("get settings");
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("program_name").map(String::as_str), Some("Forms"));
    }

    #[tokio::test]
    async fn test_delete_module_settings() {
        let db = create_test_db().await;
        let pool = db.pool();

        set_setting(pool, "pages", "a", "1").await.expect("set a");
        set_setting(pool, "pages", "b", "2").await.expect("set b");
        set_setting(pool, CORE_MODULE, "a", "3").await.expect("set core a");

        let removed = delete_module_settings(pool, "pages")
            .await
            .expect("delete settings");
        assert_eq!(removed, 2);
        assert!(get_settings(pool, "pages")
            .await
            .expect("get settings")
            .is_empty());
        assert_eq!(
            get_setting(pool, CORE_MODULE, "a")
                .await
                .expect("get setting")
                .as_deref(),
            Some("3")
        );
    }

    #[tokio::test]
    async fn test_settings_in_transaction_roll_back() {
        let db = create_test_db().await;

        let mut tx = db.pool().begin().await.expect("begin");
        set_setting(&mut *tx, "pages", "x", "1")
            .await
            .expect("set in transaction");
        tx.rollback().await.expect("rollback");

        let value = get_setting(db.pool(), "pages", "x").await.expect("get setting");
        assert_eq!(value, None);
    }
}
