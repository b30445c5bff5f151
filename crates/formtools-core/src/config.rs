//! Configuration management for Form Tools.
//!
//! Provides TOML-based configuration stored in the platform config directory,
//! with environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main application configuration.
///
/// This is loaded from `~/.config/formtools/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Installation-wide settings
    pub general: GeneralConfig,
    /// Database location and pool settings
    pub database: DatabaseConfig,
    /// Language pack settings
    pub locale: LocaleConfig,
    /// Pages module defaults
    pub pages: PagesConfig,
}

const QUALIFIER: (&str, &str, &str) = ("org", "formtools", "formtools");

fn project_dirs() -> ConfigResult<ProjectDirs> {
    let (qualifier, organization, application) = QUALIFIER;
    ProjectDirs::from(qualifier, organization, application).ok_or(ConfigError::NoConfigDir)
}

impl AppConfig {
    /// Load `config.toml` from the platform config directory.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// [`AppConfig::load`] followed by environment overrides.
    ///
    /// | variable | key |
    /// |---|---|
    /// | `FORMTOOLS_ROOT_URL` | `general.root_url` |
    /// | `FORMTOOLS_LANGUAGE` | `general.default_language` |
    /// | `FORMTOOLS_DATABASE_PATH` | `database.path` |
    /// | `FORMTOOLS_TIMEZONE_OFFSET` | `general.timezone_offset` |
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, normally the process environment.
    ///
    /// An offset that doesn't parse as an integer is ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(root_url) = lookup("FORMTOOLS_ROOT_URL") {
            debug!(%root_url, "root_url overridden from environment");
            self.general.root_url = root_url;
        }
        if let Some(language) = lookup("FORMTOOLS_LANGUAGE") {
            debug!(%language, "default_language overridden from environment");
            self.general.default_language = language;
        }
        if let Some(path) = lookup("FORMTOOLS_DATABASE_PATH") {
            debug!(%path, "database path overridden from environment");
            self.database.path = PathBuf::from(path);
        }
        match lookup("FORMTOOLS_TIMEZONE_OFFSET").map(|v| v.trim().parse::<i64>()) {
            Some(Ok(offset)) => {
                debug!(offset, "timezone_offset overridden from environment");
                self.general.timezone_offset = offset;
            }
            Some(Err(e)) => warn!(error = %e, "ignoring FORMTOOLS_TIMEZONE_OFFSET"),
            None => {}
        }
    }

    /// Reject values that would only fail later, at request time.
    pub fn validate(&self) -> ConfigResult<()> {
        let invalid = |field, reason| Err(ConfigError::InvalidValue { field, reason });

        if self.general.root_url.trim().is_empty() {
            return invalid("general.root_url", "must not be empty");
        }
        if self.pages.num_pages_per_page == 0 {
            return invalid("pages.num_pages_per_page", "must be at least 1");
        }
        if self.database.max_connections == 0 {
            return invalid("database.max_connections", "must be at least 1");
        }
        Ok(())
    }

    /// Write the config to [`AppConfig::config_path`], creating the directory.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the config to `path`, creating its parent directory.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// `config.toml` inside the platform config directory.
    pub fn config_path() -> ConfigResult<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Platform data directory, the default home of the database file.
    pub fn data_dir() -> ConfigResult<PathBuf> {
        Ok(project_dirs()?.data_dir().to_path_buf())
    }
}

/// Installation-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Public root URL of the installation, without a trailing slash
    pub root_url: String,
    /// Language pack id used when an account has none (e.g. `en_us`)
    pub default_language: String,
    /// Maximum number of page links shown in list navigation
    pub max_nav_pages: u32,
    /// Default hour offset applied when displaying stored datetimes
    pub timezone_offset: i64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root_url: "http://localhost/formtools".to_string(),
            default_language: "en_us".to_string(),
            max_nav_pages: 16,
            timezone_offset: 0,
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the `SQLite` database file
    pub path: PathBuf,
    /// Maximum pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("formtools.db"),
            max_connections: 5,
        }
    }
}

/// Language pack settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Directory holding `<lang_id>.toml` language packs
    pub lang_dir: PathBuf,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            lang_dir: PathBuf::from("lang"),
        }
    }
}

/// Pages module defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Pages listed per page when the module setting is absent
    pub num_pages_per_page: u32,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            num_pages_per_page: 10,
        }
    }
}
