//! Outcome and error types for Pages operations.

use formtools_db::DatabaseError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// What went wrong, for callers that branch on the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PagesErrorKind {
    /// The caller passed something unusable
    InvalidInput,
    /// The page doesn't exist
    NotFound,
    /// A query failed; the operation was rolled back
    Database,
}

impl fmt::Display for PagesErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::NotFound => write!(f, "not found"),
            Self::Database => write!(f, "database error"),
        }
    }
}

/// A failed Pages operation.
///
/// `message` is localized and ready to show to the user.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PagesError {
    /// Failure category
    pub kind: PagesErrorKind,
    /// Localized message
    pub message: String,
    /// Underlying database error, if any
    #[source]
    pub source: Option<DatabaseError>,
}

impl PagesError {
    /// An input error with no underlying cause.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: PagesErrorKind::InvalidInput,
            message: message.into(),
            source: None,
        }
    }

    /// A missing page.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: PagesErrorKind::NotFound,
            message: message.into(),
            source: None,
        }
    }

    /// A failed query.
    pub fn database(message: impl Into<String>, source: impl Into<DatabaseError>) -> Self {
        Self {
            kind: PagesErrorKind::Database,
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

impl From<PagesError> for formtools_core::FormToolsError {
    fn from(err: PagesError) -> Self {
        match err.kind {
            PagesErrorKind::InvalidInput | PagesErrorKind::NotFound => {
                Self::Validation(err.message)
            }
            PagesErrorKind::Database => Self::Database(err.message),
        }
    }
}

/// A successful Pages operation: its value plus a localized message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice<T> {
    /// What the operation produced
    pub value: T,
    /// Localized confirmation
    pub message: String,
}

impl<T> Notice<T> {
    /// Create a notice.
    pub fn new(value: T, message: impl Into<String>) -> Self {
        Self {
            value,
            message: message.into(),
        }
    }

    /// Drop the message.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Result type for Pages operations.
pub type Result<T> = std::result::Result<T, PagesError>;
