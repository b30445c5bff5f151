//! Database error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the storage layer.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The database at `path` could not be opened or created.
    #[error("cannot open database {}: {reason}", path.display())]
    Open {
        /// Path as given by the caller
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// An embedded migration failed; the schema is at the last good version.
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A query failed.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    pub(crate) fn open(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Open {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<DatabaseError> for formtools_core::FormToolsError {
    fn from(err: DatabaseError) -> Self {
        Self::Database(err.to_string())
    }
}

/// Result type alias for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use formtools_core::FormToolsError;

    #[test]
    fn test_open_error_names_the_path() {
        let err = DatabaseError::open("/srv/formtools.db", "permission denied");
        assert_eq!(
            err.to_string(),
            "cannot open database /srv/formtools.db: permission denied"
        );
    }

    #[test]
    fn test_query_errors_display_unchanged() {
        let err = DatabaseError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());

        let central: FormToolsError = err.into();
        assert!(matches!(central, FormToolsError::Database(_)));
    }
}
