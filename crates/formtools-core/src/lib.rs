//! Form Tools Core - Foundation crate shared by every Form Tools crate.
//!
//! This crate provides the central error types, TOML configuration, typed
//! identifiers and the small general-purpose helpers (text trimming, canonical
//! datetimes, pagination arithmetic, password generation) the rest of the
//! workspace builds on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with platform paths and env overrides
//! - [`types`] - Identifier newtypes (`FormId`, `SubmissionId`, `PageId`, ...)
//! - [`datetime`] - Canonical `YYYY-MM-DD HH:MM:SS` datetime helpers
//! - [`text`] - String helpers (trimming, slugs, validation)
//! - [`pagination`] - Page navigation arithmetic
//! - [`password`] - Random password generation
//!
//! # Example
//!
//! ```rust
//! use formtools_core::{AppConfig, PageNav};
//!
//! let config = AppConfig::default();
//! let nav = PageNav::new(95, 10, 3, config.general.max_nav_pages);
//! assert_eq!(nav.range_start, 21);
//! assert_eq!(nav.total_pages, 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod datetime;
pub mod error;
pub mod pagination;
pub mod password;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, DatabaseConfig, GeneralConfig, LocaleConfig, PagesConfig};
pub use error::{ConfigError, ConfigResult, FormToolsError, Result};
pub use pagination::{limit_offset, PageNav};
pub use types::{AccountId, ClientId, FieldId, FieldTypeId, FormId, PageId, SubmissionId};
