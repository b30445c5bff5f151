//! In-memory cache of loaded language packs.

use crate::{
    calendar::LocaleCalendarNames,
    date::DateFormatter,
    error::{LocaleError, Result},
    loader::LanguageLoader,
    pack::LanguagePack,
};
use formtools_core::GeneralConfig;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Shared cache of language packs, keyed by pack id.
///
/// Packs are handed out as `Arc`s so callers can hold one across a request
/// while the registry is reloaded underneath them.
#[derive(Clone)]
pub struct LanguageRegistry {
    packs: Arc<RwLock<HashMap<String, Arc<LanguagePack>>>>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            packs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a registry and load every pack from the loader.
    ///
    /// # Errors
    /// Returns error if the language directory can't be read.
    pub fn load_from(loader: &LanguageLoader) -> Result<Self> {
        let registry = Self::new();
        registry.reload(loader)?;
        Ok(registry)
    }

    /// Replace the cache with freshly loaded packs.
    ///
    /// # Errors
    /// Returns error if the language directory can't be read.
    pub fn reload(&self, loader: &LanguageLoader) -> Result<()> {
        let packs = loader.load_all()?;

        let mut cache = self.packs.write().expect("acquire write lock on packs");
        cache.clear();
        for pack in packs {
            cache.insert(pack.id.clone(), Arc::new(pack));
        }

        info!(count = cache.len(), "reloaded language packs");

        Ok(())
    }

    /// Get a pack by id.
    ///
    /// # Errors
    /// Returns `LocaleError::NotFound` if the pack isn't cached.
    pub fn get(&self, lang_id: &str) -> Result<Arc<LanguagePack>> {
        let cache = self.packs.read().expect("acquire read lock on packs");

        cache
            .get(lang_id)
            .cloned()
            .ok_or_else(|| LocaleError::NotFound {
                lang_id: lang_id.to_string(),
            })
    }

    /// Build the validated calendar names for a cached pack.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id and `MissingKeys` for an
    /// incomplete pack.
    pub fn calendar_names(&self, lang_id: &str) -> Result<LocaleCalendarNames> {
        let pack = self.get(lang_id)?;
        LocaleCalendarNames::from_pack(&pack)
    }

    /// The installation's default pack (`general.default_language`).
    ///
    /// # Errors
    /// Returns `NotFound` if that pack isn't cached.
    pub fn default_pack(&self, config: &GeneralConfig) -> Result<Arc<LanguagePack>> {
        self.get(&config.default_language)
    }

    /// A date formatter for the default language and the configured
    /// `general.timezone_offset`.
    ///
    /// # Errors
    /// Returns `NotFound` or `MissingKeys` as [`LanguageRegistry::calendar_names`] does.
    pub fn default_formatter(&self, config: &GeneralConfig) -> Result<DateFormatter> {
        let names = self.calendar_names(&config.default_language)?;
        Ok(DateFormatter::new(Arc::new(names), config.timezone_offset))
    }

    /// Add or replace a pack.
    ///
    /// # Errors
    /// Returns error if the pack metadata is invalid.
    pub fn insert(&self, pack: LanguagePack) -> Result<()> {
        pack.validate(None)?;

        let mut cache = self.packs.write().expect("acquire write lock on packs");
        let lang_id = pack.id.clone();
        cache.insert(lang_id.clone(), Arc::new(pack));

        debug!(lang_id = %lang_id, "inserted language pack");

        Ok(())
    }

    /// Whether a pack is cached.
    #[must_use]
    pub fn contains(&self, lang_id: &str) -> bool {
        let cache = self.packs.read().expect("acquire read lock on packs");
        cache.contains_key(lang_id)
    }

    /// Number of cached packs.
    #[must_use]
    pub fn count(&self) -> usize {
        let cache = self.packs.read().expect("acquire read lock on packs");
        cache.len()
    }

    /// Ids of every cached pack, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        let cache = self.packs.read().expect("acquire read lock on packs");
        let mut ids: Vec<String> = cache.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
