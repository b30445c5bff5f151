//! Language pack loading from TOML files.
//!
//! Packs live flat in a `lang/` directory, one `<id>.toml` file per language.

use crate::{
    error::{LocaleError, Result},
    pack::LanguagePack,
};
use formtools_core::LocaleConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loader for language packs in one directory.
pub struct LanguageLoader {
    lang_dir: PathBuf,
}

impl LanguageLoader {
    /// Create a loader for the given directory.
    ///
    /// # Errors
    /// Returns error if the directory doesn't exist.
    pub fn new(lang_dir: impl Into<PathBuf>) -> Result<Self> {
        let lang_dir = lang_dir.into();

        if !lang_dir.is_dir() {
            return Err(LocaleError::DirectoryNotFound {
                path: lang_dir.display().to_string(),
            });
        }

        Ok(Self { lang_dir })
    }

    /// Create a loader for the `[locale]` config section's `lang_dir`.
    ///
    /// # Errors
    /// Returns error if the directory doesn't exist.
    pub fn from_config(config: &LocaleConfig) -> Result<Self> {
        Self::new(&config.lang_dir)
    }

    /// The directory packs are read from.
    #[must_use]
    pub fn lang_dir(&self) -> &Path {
        &self.lang_dir
    }

    /// Load one pack by id.
    ///
    /// # Errors
    /// Returns error if the file doesn't exist, can't be parsed, or its
    /// metadata doesn't match the file name.
    pub fn load(&self, lang_id: &str) -> Result<LanguagePack> {
        let path = self.lang_dir.join(format!("{lang_id}.toml"));
        if !path.is_file() {
            return Err(LocaleError::NotFound {
                lang_id: lang_id.to_string(),
            });
        }

        let pack = Self::load_from_path(&path)?;
        pack.validate(Some(lang_id))?;

        debug!(
            lang_id,
            name = %pack.name,
            strings = pack.strings.len(),
            "loaded language pack"
        );

        Ok(pack)
    }

    /// Load every pack in the directory.
    ///
    /// Unreadable or invalid files are logged and skipped.
    ///
    /// # Errors
    /// Returns error if the directory can't be read.
    pub fn load_all(&self) -> Result<Vec<LanguagePack>> {
        let mut packs = Vec::new();

        for entry in std::fs::read_dir(&self.lang_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str());
            let loaded =
                Self::load_from_path(&path).and_then(|pack| pack.validate(stem).map(|()| pack));

            match loaded {
                Ok(pack) => packs.push(pack),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping invalid language pack"
                    );
                }
            }
        }

        packs.sort_by(|a, b| a.id.cmp(&b.id));

        info!(
            count = packs.len(),
            dir = %self.lang_dir.display(),
            "loaded language packs"
        );

        Ok(packs)
    }

    fn load_from_path(path: &Path) -> Result<LanguagePack> {
        let contents = std::fs::read_to_string(path).map_err(|e| LocaleError::LoadError {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        toml::from_str(&contents).map_err(|e| LocaleError::ParseError {
            path: path.display().to_string(),
            source: e,
        })
    }
}
