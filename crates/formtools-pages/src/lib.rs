//! Form Tools Pages module.
//!
//! Lets the administrator define custom pages (help pages, client splash
//! pages, public notices) and link them from the navigation menus. Pages are
//! visible to the administrator only, to everyone, or to the administrator
//! plus a chosen set of clients.
//!
//! # Architecture
//!
//! - **Records** ([`page`]): pages, the add/edit input and list paging
//! - **Operations** ([`module`]): install, uninstall, settings and CRUD on `module_pages`
//! - **Outcomes** ([`error`]): [`Notice`] on success, [`PagesError`] with a
//!   [`PagesErrorKind`] on failure; both carry a localized message
//!
//! # Example
//!
//! ```ignore
//! use formtools_locale::LanguagePack;
//! use formtools_pages::{PageInput, PagesModule};
//!
//! let pages = PagesModule::new(db.pool().clone(), &LanguagePack::english());
//! pages.install().await?;
//! let added = pages.add_page(&PageInput { page_name: "Help".into(), ..Default::default() }).await?;
//! println!("{}", added.message);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod module;
pub mod page;

pub use error::{Notice, PagesError, PagesErrorKind, Result};
pub use module::{module_language_pack, PagesModule, MODULE_ID, NUM_PAGES_PER_PAGE};
pub use page::{
    page_identifier, AccessType, ContentType, Page, PageDetails, PageInput, PageList, PageSize,
};
