//! Navigation menu item storage.
//!
//! Modules link their pages into menus by `page_identifier`; removing a page
//! must also remove the menu items that point at it.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqliteExecutor};

/// A navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Row id, 0 before insertion
    pub menu_item_id: i64,
    /// Menu the item belongs to
    pub menu_id: i64,
    /// Link text
    pub display_text: String,
    /// What the item links to (e.g. `page_4` for a Pages module page)
    pub page_identifier: String,
    /// Extra options, interpreted per identifier
    pub custom_options: String,
    /// Target URL, if it differs from the identifier's default
    pub url: Option<String>,
    /// Whether the item is nested under the previous one
    pub is_submenu: bool,
    /// Whether the item starts a new sort group
    pub is_new_sort_group: bool,
    /// Position within the menu
    pub list_order: i64,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Insert a menu item, returning its new id.
pub async fn add_menu_item<'e>(executor: impl SqliteExecutor<'e>, item: &MenuItem) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO menu_items (menu_id, display_text, page_identifier, custom_options,
                                 url, is_submenu, is_new_sort_group, list_order)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(item.menu_id)
    .bind(&item.display_text)
    .bind(&item.page_identifier)
    .bind(&item.custom_options)
    .bind(&item.url)
    .bind(yes_no(item.is_submenu))
    .bind(yes_no(item.is_new_sort_group))
    .bind(item.list_order)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Items of one menu, in display order.
pub async fn get_menu_items<'e>(
    executor: impl SqliteExecutor<'e>,
    menu_id: i64,
) -> Result<Vec<MenuItem>> {
    let rows = sqlx::query(
        "SELECT menu_item_id, menu_id, display_text, page_identifier, custom_options,
                url, is_submenu, is_new_sort_group, list_order
         FROM menu_items
         WHERE menu_id = ?
         ORDER BY list_order, menu_item_id",
    )
    .bind(menu_id)
    .fetch_all(executor)
    .await?;

    let items = rows
        .into_iter()
        .map(|row| {
            Ok(MenuItem {
                menu_item_id: row.try_get("menu_item_id")?,
                menu_id: row.try_get("menu_id")?,
                display_text: row.try_get("display_text")?,
                page_identifier: row.try_get("page_identifier")?,
                custom_options: row.try_get("custom_options")?,
                url: row.try_get("url")?,
                is_submenu: row.try_get::<String, _>("is_submenu")? == "yes",
                is_new_sort_group: row.try_get::<String, _>("is_new_sort_group")? == "yes",
                list_order: row.try_get("list_order")?,
            })
        })
        .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?;

    Ok(items)
}

/// Delete every item linking to `page_identifier`, returning how many were removed.
pub async fn delete_menu_items_by_page<'e>(
    executor: impl SqliteExecutor<'e>,
    page_identifier: &str,
) -> Result<u64> {
    let result = sqlx::query("DELETE FROM menu_items WHERE page_identifier = ?")
        .bind(page_identifier)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn item(menu_id: i64, page_identifier: &str, list_order: i64) -> MenuItem {
        MenuItem {
            menu_item_id: 0,
            menu_id,
            display_text: format!("Link to {page_identifier}"),
            page_identifier: page_identifier.to_string(),
            custom_options: String::new(),
            url: None,
            is_submenu: false,
            is_new_sort_group: true,
            list_order,
        }
    }

    async fn create_test_db() -> Database {
        let db = Database::new(":memory:", 1)
            .await
            .expect("create test database");
        db.run_migrations().await.expect("run migrations");
        db
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let db = create_test_db().await;
        let pool = db.pool();

        add_menu_item(pool, &item(1, "page_2", 2)).await.expect("add item");
        let first = add_menu_item(pool, &MenuItem {
            is_submenu: true,
            url: Some("/admin/forms/".to_string()),
            ..item(1, "forms", 1)
        })
        .await
        .expect("add item");
        add_menu_item(pool, &item(2, "page_2", 1)).await.expect("add item");

        let items = get_menu_items(pool, 1).await.expect("list items");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].menu_item_id, first);
        assert!(items[0].is_submenu);
        assert_eq!(items[0].url.as_deref(), Some("/admin/forms/"));
        assert_eq!(items[1].page_identifier, "page_2");
    }

    #[tokio::test]
    async fn test_delete_by_page() {
        let db = create_test_db().await;
        let pool = db.pool();

        add_menu_item(pool, &item(1, "page_2", 1)).await.expect("add item");
        add_menu_item(pool, &item(2, "page_2", 1)).await.expect("add item");
        add_menu_item(pool, &item(1, "page_21", 2)).await.expect("add item");

        let removed = delete_menu_items_by_page(pool, "page_2")
            .await
            .expect("delete items");
        assert_eq!(removed, 2);

        let remaining = get_menu_items(pool, 1).await.expect("list items");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].page_identifier, "page_21");
    }
}
