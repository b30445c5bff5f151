//! Install, settings and page CRUD for the Pages module.

use crate::error::{Notice, PagesError, Result};
use crate::page::{
    page_identifier, AccessType, ContentType, Page, PageDetails, PageInput, PageList, PageSize,
};
use formtools_core::{limit_offset, ClientId, PageId, PagesConfig};
use formtools_db::{menu_items, settings, DatabaseError};
use formtools_locale::{interpolate, LanguagePack};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use tracing::{info, warn};

/// Settings module name and table prefix of this module.
pub const MODULE_ID: &str = "pages";

/// Setting holding the page list size.
pub const NUM_PAGES_PER_PAGE: &str = "num_pages_per_page";

const BUNDLED_EN_US: &str = include_str!("../lang/en_us.toml");

const CREATE_PAGES_TABLE: &str = r"
    CREATE TABLE module_pages (
        page_id INTEGER PRIMARY KEY AUTOINCREMENT,
        page_name TEXT NOT NULL,
        access_type TEXT NOT NULL DEFAULT 'admin'
            CHECK (access_type IN ('admin', 'public', 'private')),
        content_type TEXT NOT NULL DEFAULT 'html'
            CHECK (content_type IN ('html', 'php', 'smarty')),
        use_wysiwyg TEXT NOT NULL DEFAULT 'yes' CHECK (use_wysiwyg IN ('yes', 'no')),
        heading TEXT,
        content TEXT
    )
";

const CREATE_PAGE_CLIENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS module_pages_clients (
        page_id INTEGER NOT NULL,
        client_id INTEGER NOT NULL,
        PRIMARY KEY (page_id, client_id)
    )
";

const PAGE_COLUMNS: &str =
    "page_id, page_name, access_type, content_type, use_wysiwyg, heading, content";

/// The module's bundled English strings.
#[must_use]
pub fn module_language_pack() -> LanguagePack {
    toml::from_str(BUNDLED_EN_US).expect("bundled pages pack is valid TOML")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn decode_error(column: &str, message: String) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: message.into(),
    }
}

fn page_from_row(row: &SqliteRow) -> std::result::Result<Page, sqlx::Error> {
    let page_id = PageId::new(row.try_get("page_id")?)
        .map_err(|e| decode_error("page_id", e.to_string()))?;
    let access_type = row
        .try_get::<String, _>("access_type")?
        .parse::<AccessType>()
        .map_err(|e| decode_error("access_type", e))?;
    let content_type = row
        .try_get::<String, _>("content_type")?
        .parse::<ContentType>()
        .map_err(|e| decode_error("content_type", e))?;

    Ok(Page {
        page_id,
        page_name: row.try_get("page_name")?,
        access_type,
        content_type,
        use_wysiwyg: row.try_get::<String, _>("use_wysiwyg")? == "yes",
        heading: row.try_get("heading")?,
        content: row.try_get("content")?,
    })
}

/// The Pages module.
///
/// Every operation that writes more than one statement runs in its own
/// transaction and rolls back on failure.
#[derive(Debug, Clone)]
pub struct PagesModule {
    pool: SqlitePool,
    lang: LanguagePack,
    default_per_page: u32,
}

impl PagesModule {
    /// Create the module over a pool, with messages from `lang`.
    ///
    /// `lang` is layered over the module's bundled English strings, so a
    /// language pack without Pages translations still yields English
    /// messages.
    #[must_use]
    pub fn new(pool: SqlitePool, lang: &LanguagePack) -> Self {
        let mut messages = module_language_pack();
        messages.merge(lang);
        messages.id.clone_from(&lang.id);
        messages.name.clone_from(&lang.name);
        messages
            .special_language
            .clone_from(&lang.special_language);

        Self {
            pool,
            lang: messages,
            default_per_page: PagesConfig::default().num_pages_per_page,
        }
    }

    /// Use the `[pages]` config section for defaults.
    #[must_use]
    pub fn with_config(mut self, config: &PagesConfig) -> Self {
        self.default_per_page = config.num_pages_per_page;
        self
    }

    /// The strings messages are drawn from.
    #[must_use]
    pub fn language(&self) -> &LanguagePack {
        &self.lang
    }

    fn message(&self, key: &str) -> String {
        self.lang.message(key).to_string()
    }

    async fn begin(&self, failure_key: &str) -> Result<Transaction<'static, Sqlite>> {
        self.pool
            .begin()
            .await
            .map_err(|e| PagesError::database(self.message(failure_key), e))
    }

    /// Create the module's tables and default settings.
    ///
    /// # Errors
    /// Returns a `Database` error whose message includes the failure; nothing
    /// is left behind.
    pub async fn install(&self) -> Result<Notice<()>> {
        let result: std::result::Result<(), DatabaseError> = async {
            let mut tx = self.pool.begin().await?;
            sqlx::query(CREATE_PAGES_TABLE).execute(&mut *tx).await?;
            sqlx::query(CREATE_PAGE_CLIENTS_TABLE)
                .execute(&mut *tx)
                .await?;
            settings::set_setting(
                &mut *tx,
                MODULE_ID,
                NUM_PAGES_PER_PAGE,
                &self.default_per_page.to_string(),
            )
            .await?;
            tx.commit().await?;
            Ok::<(), DatabaseError>(())
        }
        .await;

        match result {
            Ok(()) => {
                info!(module = MODULE_ID, "module installed");
                Ok(Notice::new((), String::new()))
            }
            Err(e) => {
                warn!(module = MODULE_ID, error = %e, "module install failed");
                let message = interpolate(
                    self.lang.message("notify_problem_installing"),
                    &[("error", e.to_string().as_str())],
                );
                Err(PagesError::database(message, e))
            }
        }
    }

    /// Remove the module's tables, settings and every menu link to a page.
    ///
    /// # Errors
    /// Returns a `Database` error carrying the database's own message; the
    /// removal is rolled back.
    pub async fn uninstall(&self) -> Result<Notice<()>> {
        let result: std::result::Result<usize, DatabaseError> = async {
            let mut tx = self.pool.begin().await?;

            let page_ids: Vec<i64> = sqlx::query_scalar("SELECT page_id FROM module_pages")
                .fetch_all(&mut *tx)
                .await?;
            for &page_id in &page_ids {
                menu_items::delete_menu_items_by_page(&mut *tx, &format!("page_{page_id}"))
                    .await?;
            }

            sqlx::query("DROP TABLE module_pages")
                .execute(&mut *tx)
                .await?;
            sqlx::query("DROP TABLE module_pages_clients")
                .execute(&mut *tx)
                .await?;
            settings::delete_module_settings(&mut *tx, MODULE_ID).await?;

            tx.commit().await?;
            Ok::<usize, DatabaseError>(page_ids.len())
        }
        .await;

        match result {
            Ok(pages) => {
                info!(module = MODULE_ID, pages, "module uninstalled");
                Ok(Notice::new((), self.message("notify_module_uninstalled")))
            }
            Err(e) => {
                warn!(module = MODULE_ID, error = %e, "module uninstall failed");
                Err(PagesError::database(e.to_string(), e))
            }
        }
    }

    /// The configured page list size.
    ///
    /// Falls back to the configured default when the setting is missing or
    /// unreadable.
    ///
    /// # Errors
    /// Returns a `Database` error if the settings table can't be read.
    pub async fn num_pages_per_page(&self) -> Result<u32> {
        let stored = settings::get_setting(&self.pool, MODULE_ID, NUM_PAGES_PER_PAGE)
            .await
            .map_err(|e| {
                let message = e.to_string();
                PagesError::database(message, e)
            })?;

        let Some(stored) = stored else {
            return Ok(self.default_per_page);
        };

        match stored.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => {
                warn!(value = %stored, "ignoring invalid num_pages_per_page setting");
                Ok(self.default_per_page)
            }
        }
    }

    /// Store the page list size.
    ///
    /// # Errors
    /// Returns `InvalidInput` for 0, or a `Database` error.
    pub async fn update_settings(&self, num_pages_per_page: u32) -> Result<Notice<()>> {
        if num_pages_per_page == 0 {
            return Err(PagesError::invalid_input(
                self.message("validation_num_pages_per_page"),
            ));
        }

        settings::set_setting(
            &self.pool,
            MODULE_ID,
            NUM_PAGES_PER_PAGE,
            &num_pages_per_page.to_string(),
        )
        .await
        .map_err(|e| {
            let message = e.to_string();
            PagesError::database(message, e)
        })?;

        info!(num_pages_per_page, "pages settings updated");
        Ok(Notice::new((), self.message("notify_settings_updated")))
    }

    async fn insert_clients(
        tx: &mut Transaction<'static, Sqlite>,
        page_id: i64,
        client_ids: &[ClientId],
    ) -> std::result::Result<(), sqlx::Error> {
        for client_id in client_ids {
            sqlx::query("INSERT INTO module_pages_clients (page_id, client_id) VALUES (?, ?)")
                .bind(page_id)
                .bind(client_id.get())
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    /// Add a page, granting the selected clients access if it is private.
    ///
    /// # Errors
    /// Returns a `Database` error; nothing is stored.
    pub async fn add_page(&self, input: &PageInput) -> Result<Notice<PageId>> {
        let failure = "notify_page_not_added";
        let mut tx = self.begin(failure).await?;

        let result: std::result::Result<i64, sqlx::Error> = async {
            let inserted = sqlx::query(
                "INSERT INTO module_pages (page_name, content_type, access_type, use_wysiwyg, heading, content)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(&input.page_name)
            .bind(input.content_type.as_str())
            .bind(input.access_type.as_str())
            .bind(yes_no(input.use_wysiwyg))
            .bind(&input.heading)
            .bind(input.content())
            .execute(&mut *tx)
            .await?;

            let page_id = inserted.last_insert_rowid();
            Self::insert_clients(&mut tx, page_id, input.client_ids()).await?;
            Ok::<i64, sqlx::Error>(page_id)
        }
        .await;

        let page_id = match result {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "failed to add page");
                return Err(PagesError::database(self.message(failure), e));
            }
        };

        tx.commit()
            .await
            .map_err(|e| PagesError::database(self.message(failure), e))?;

        let page_id = PageId::new(page_id).map_err(|e| {
            PagesError::database(self.message(failure), decode_error("page_id", e.to_string()))
        })?;

        info!(page_id = %page_id, clients = input.client_ids().len(), "page added");
        Ok(Notice::new(page_id, self.message("notify_page_added")))
    }

    /// Replace a page's fields and client list.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown page or a `Database` error; nothing
    /// is changed in either case.
    pub async fn update_page(&self, page_id: PageId, input: &PageInput) -> Result<Notice<()>> {
        let failure = "notify_page_not_updated";
        let mut tx = self.begin(failure).await?;

        let result: std::result::Result<bool, sqlx::Error> = async {
            let updated = sqlx::query(
                "UPDATE module_pages
                 SET page_name = ?, content_type = ?, access_type = ?,
                     use_wysiwyg = ?, heading = ?, content = ?
                 WHERE page_id = ?",
            )
            .bind(&input.page_name)
            .bind(input.content_type.as_str())
            .bind(input.access_type.as_str())
            .bind(yes_no(input.use_wysiwyg))
            .bind(&input.heading)
            .bind(input.content())
            .bind(page_id.get())
            .execute(&mut *tx)
            .await?;

            if updated.rows_affected() == 0 {
                return Ok(false);
            }

            sqlx::query("DELETE FROM module_pages_clients WHERE page_id = ?")
                .bind(page_id.get())
                .execute(&mut *tx)
                .await?;
            Self::insert_clients(&mut tx, page_id.get(), input.client_ids()).await?;
            Ok::<bool, sqlx::Error>(true)
        }
        .await;

        match result {
            Ok(true) => {}
            Ok(false) => {
                return Err(PagesError::not_found(
                    self.message("notify_page_not_found"),
                ));
            }
            Err(e) => {
                warn!(page_id = %page_id, error = %e, "failed to update page");
                return Err(PagesError::database(self.message(failure), e));
            }
        }

        tx.commit()
            .await
            .map_err(|e| PagesError::database(self.message(failure), e))?;

        info!(page_id = %page_id, "page updated");
        Ok(Notice::new((), self.message("notify_page_updated")))
    }

    /// Delete a page, its client list and any menu items linking to it.
    ///
    /// Deleting a page that doesn't exist succeeds.
    ///
    /// # Errors
    /// Returns `InvalidInput` with an empty message for a non-positive id,
    /// or a `Database` error.
    pub async fn delete_page(&self, page_id: i64) -> Result<Notice<()>> {
        let Ok(page_id) = PageId::new(page_id) else {
            return Err(PagesError::invalid_input(String::new()));
        };

        let failure = "notify_page_not_deleted";
        let mut tx = self.begin(failure).await?;

        let result: std::result::Result<u64, DatabaseError> = async {
            sqlx::query("DELETE FROM module_pages WHERE page_id = ?")
                .bind(page_id.get())
                .execute(&mut *tx)
                .await?;
            sqlx::query("DELETE FROM module_pages_clients WHERE page_id = ?")
                .bind(page_id.get())
                .execute(&mut *tx)
                .await?;
            menu_items::delete_menu_items_by_page(&mut *tx, &page_identifier(page_id)).await
        }
        .await;

        let menu_items_removed = match result {
            Ok(n) => n,
            Err(e) => {
                warn!(page_id = %page_id, error = %e, "failed to delete page");
                return Err(PagesError::database(self.message(failure), e));
            }
        };

        tx.commit()
            .await
            .map_err(|e| PagesError::database(self.message(failure), e))?;

        info!(page_id = %page_id, menu_items_removed, "page deleted");
        Ok(Notice::new((), self.message("notify_delete_page")))
    }

    /// A page and the clients allowed to view it.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown page or a `Database` error.
    pub async fn get_page(&self, page_id: PageId) -> Result<PageDetails> {
        let failure = |e: sqlx::Error| {
            let message = e.to_string();
            PagesError::database(message, e)
        };

        let row = sqlx::query(&format!(
            "SELECT {PAGE_COLUMNS} FROM module_pages WHERE page_id = ?"
        ))
        .bind(page_id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(failure)?;

        let Some(row) = row else {
            return Err(PagesError::not_found(self.message("notify_page_not_found")));
        };
        let page = page_from_row(&row).map_err(failure)?;

        let client_ids = sqlx::query_scalar::<_, i64>(
            "SELECT client_id FROM module_pages_clients WHERE page_id = ? ORDER BY client_id",
        )
        .bind(page_id.get())
        .fetch_all(&self.pool)
        .await
        .map_err(failure)?
        .into_iter()
        .filter_map(|id| ClientId::new(id).ok())
        .collect();

        Ok(PageDetails { page, client_ids })
    }

    /// One page of the page list, ordered by heading.
    ///
    /// `page_num` is 1-based; anything below 1 is treated as 1.
    ///
    /// # Errors
    /// Returns a `Database` error.
    pub async fn get_pages(&self, size: PageSize, page_num: u64) -> Result<PageList> {
        let failure = |e: sqlx::Error| {
            let message = interpolate(
                self.lang.message("notify_problem_loading_pages"),
                &[("error", e.to_string().as_str())],
            );
            PagesError::database(message, e)
        };

        let rows = match size {
            PageSize::All => {
                sqlx::query(&format!(
                    "SELECT {PAGE_COLUMNS} FROM module_pages ORDER BY heading, page_id"
                ))
                .fetch_all(&self.pool)
                .await
            }
            PageSize::PerPage(per_page) => {
                let (limit, offset) = limit_offset(page_num, u64::from(per_page));
                sqlx::query(&format!(
                    "SELECT {PAGE_COLUMNS} FROM module_pages ORDER BY heading, page_id LIMIT ? OFFSET ?"
                ))
                .bind(i64::try_from(limit).unwrap_or(i64::MAX))
                .bind(i64::try_from(offset).unwrap_or(i64::MAX))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(failure)?;

        let results = rows
            .iter()
            .map(page_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(failure)?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM module_pages")
            .fetch_one(&self.pool)
            .await
            .map_err(failure)?;

        Ok(PageList {
            results,
            num_results: u64::try_from(count).unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE_KEYS: [&str; 13] = [
        "notify_problem_installing",
        "notify_module_uninstalled",
        "notify_settings_updated",
        "notify_page_added",
        "notify_page_not_added",
        "notify_page_updated",
        "notify_page_not_updated",
        "notify_delete_page",
        "notify_page_not_deleted",
        "notify_page_not_found",
        "notify_problem_loading_pages",
        "validation_num_pages_per_page",
        "module_name",
    ];

    #[test]
    fn test_bundled_pack_parses() {
        let pack = module_language_pack();
        assert_eq!(pack.id, "en_us");
        assert!(pack.is_baseline());
        pack.validate(Some("en_us")).expect("valid pack metadata");

        for key in MESSAGE_KEYS {
            assert!(
                pack.get(key).is_some_and(|value| !value.is_empty()),
                "missing {key}"
            );
        }
        assert!(pack
            .get("notify_problem_installing")
            .is_some_and(|value| value.contains("{$error}")));
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
