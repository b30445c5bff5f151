//! Error types for placeholder resolution.

use thiserror::Error;

/// Errors that can occur while resolving placeholders.
///
/// The resolver never wraps or rewrites what its collaborators return; a
/// [`RecordSource`](crate::RecordSource) or
/// [`FieldRenderer`](crate::FieldRenderer) picks the variant.
#[derive(Error, Debug)]
pub enum PlaceholderError {
    /// A record the source was asked for doesn't exist
    #[error("{kind} not found: {id}")]
    MissingRecord {
        /// Record kind (e.g. `form`, `submission`)
        kind: &'static str,
        /// Id that was looked up
        id: i64,
    },

    /// Any other failure inside a collaborator
    #[error(transparent)]
    Collaborator(Box<dyn std::error::Error + Send + Sync>),
}

impl PlaceholderError {
    /// Wrap a collaborator's own error.
    pub fn collaborator(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Collaborator(err.into())
    }
}

impl From<PlaceholderError> for formtools_core::FormToolsError {
    fn from(err: PlaceholderError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result type for placeholder operations.
pub type Result<T> = std::result::Result<T, PlaceholderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let err = PlaceholderError::collaborator(io);
        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn test_missing_record_display() {
        let err = PlaceholderError::MissingRecord {
            kind: "submission",
            id: 42,
        };
        assert_eq!(err.to_string(), "submission not found: 42");
    }
}
