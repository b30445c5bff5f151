//! Error types shared by every Form Tools crate.
//!
//! Each crate keeps its own error enum and converts into [`FormToolsError`]
//! at the application boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error.
#[derive(Error, Debug)]
pub enum FormToolsError {
    /// Bad or unreadable configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Storage failure, already rendered to text by the db layer
    #[error("database error: {0}")]
    Database(String),

    /// Missing or broken language pack
    #[error("locale error: {0}")]
    Locale(String),

    /// Rejected input
    #[error("{0}")]
    Validation(String),

    /// Anything else, e.g. a collaborator failure
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors while locating, reading or writing `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The platform has no home or config directory
    #[error("no platform config directory available")]
    NoConfigDir,

    /// The file exists but is not valid TOML for [`crate::AppConfig`]
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser diagnostic
        source: toml::de::Error,
    },

    /// The config could not be written back as TOML
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Reading or writing the file failed
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value parsed but is out of range
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Dotted key, e.g. `pages.num_pages_per_page`
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Result alias over [`FormToolsError`].
pub type Result<T> = std::result::Result<T, FormToolsError>;

/// Result alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_names_the_key() {
        let err = ConfigError::InvalidValue {
            field: "general.root_url",
            reason: "must not be empty",
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for general.root_url: must not be empty"
        );
    }

    #[test]
    fn test_config_errors_pass_through() {
        let err: FormToolsError = ConfigError::NoConfigDir.into();
        assert!(matches!(err, FormToolsError::Config(_)));
        assert_eq!(err.to_string(), "no platform config directory available");
    }

    #[test]
    fn test_validation_message_is_shown_as_is() {
        let err = FormToolsError::Validation("page id must be positive".to_string());
        assert_eq!(err.to_string(), "page id must be positive");
    }
}
