//! Form Tools Locale - language packs and localized formatting.
//!
//! This crate loads language packs from TOML files, derives the calendar
//! names needed to localize dates, and formats canonical datetimes with the
//! PHP `date()` pattern language that Form Tools users configure.
//!
//! # Architecture
//!
//! - **Language packs** ([`pack`]): id, display name, baseline flag and the string table
//! - **Loader** ([`loader`]): TOML file loading from a `lang/` directory
//! - **Registry** ([`registry`]): In-memory cache of loaded packs
//! - **Calendar names** ([`calendar`]): validated weekday/month/meridiem names for one locale
//! - **Pattern formatter** ([`php_date`]): the non-localized `date()` directive set
//! - **Localized dates** ([`date`]): the locale-aware formatter built on top of it
//! - **Interpolation** ([`interpolate`]): `{$name}` substitution in messages
//!
//! # Example
//!
//! ```rust
//! use formtools_locale::{format_date, LocaleCalendarNames};
//!
//! let english = LocaleCalendarNames::english();
//! let out = format_date(0, "2024-03-05 14:30:00", "D, F j, Y", &english);
//! assert_eq!(out, "Tue, March 5, 2024");
//!
//! // malformed input is "no data", not an error
//! assert_eq!(format_date(0, "yesterday", "Y", &english), "");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod calendar;
pub mod date;
pub mod error;
pub mod interpolate;
pub mod loader;
pub mod messages;
pub mod pack;
pub mod php_date;
pub mod registry;

// Re-export commonly used types
pub use calendar::{DirectiveKind, LocaleCalendarNames};
pub use date::{format_date, DateFormatter};
pub use error::{LocaleError, Result};
pub use interpolate::{interpolate, interpolate_with};
pub use loader::LanguageLoader;
pub use messages::{custom_page_message, js_messages, CustomMessage};
pub use pack::LanguagePack;
pub use registry::LanguageRegistry;
