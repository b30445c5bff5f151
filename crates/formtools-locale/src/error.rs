//! Error types for the locale subsystem.

use thiserror::Error;

/// Errors that can occur while loading or validating language packs.
#[derive(Error, Debug)]
pub enum LocaleError {
    /// Language pack not found
    #[error("language pack not found: {lang_id}")]
    NotFound {
        /// The language id that was not found
        lang_id: String,
    },

    /// Failed to read a language pack file
    #[error("failed to load language pack from {path}: {source}")]
    LoadError {
        /// Path to the language file
        path: String,
        /// Underlying error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to parse language pack TOML
    #[error("failed to parse language pack TOML in {path}: {source}")]
    ParseError {
        /// Path to the language file
        path: String,
        /// TOML parse error
        #[source]
        source: toml::de::Error,
    },

    /// The pack lacks strings the date formatter requires
    #[error("language pack {lang_id} is missing required keys: {}", keys.join(", "))]
    MissingKeys {
        /// Language id being validated
        lang_id: String,
        /// Every absent or empty key
        keys: Vec<String>,
    },

    /// A pack parsed but its metadata is unusable
    #[error("invalid language pack {lang_id}: {reason}")]
    Invalid {
        /// Language id as read from the file
        lang_id: String,
        /// Why the pack was rejected
        reason: String,
    },

    /// Language pack directory not found
    #[error("language directory not found at {path}")]
    DirectoryNotFound {
        /// Expected directory path
        path: String,
    },

    /// I/O error while accessing language packs
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LocaleError> for formtools_core::FormToolsError {
    fn from(err: LocaleError) -> Self {
        Self::Locale(err.to_string())
    }
}

/// Result type for locale operations.
pub type Result<T> = std::result::Result<T, LocaleError>;
