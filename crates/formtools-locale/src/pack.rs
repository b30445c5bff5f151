//! Language pack type.
//!
//! A language pack is a flat table of UI strings plus a little metadata. The
//! same shape is used for the core packs and for module packs.

use crate::error::{LocaleError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// `special_language` value that marks a pack as the English baseline.
pub const BASELINE_LANGUAGE: &str = "English";

const BUNDLED_EN_US: &str = include_str!("../lang/en_us.toml");

/// A language pack loaded from `lang/<id>.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePack {
    /// Pack id, also the file stem (e.g. `en_us`)
    pub id: String,
    /// Display name (e.g. `English (US)`)
    pub name: String,
    /// Language family; `English` for every English variant
    #[serde(default)]
    pub special_language: String,
    /// The string table
    #[serde(default)]
    pub strings: HashMap<String, String>,
}

impl LanguagePack {
    /// The bundled US English pack.
    #[must_use]
    pub fn english() -> Self {
        toml::from_str(BUNDLED_EN_US).expect("bundled en_us pack is valid TOML")
    }

    /// Check the metadata a loaded pack must carry.
    ///
    /// `expected_id` is the file stem the pack was loaded from, if any.
    pub fn validate(&self, expected_id: Option<&str>) -> Result<()> {
        if self.id.is_empty() {
            return Err(LocaleError::Invalid {
                lang_id: self.id.clone(),
                reason: "pack id cannot be empty".to_string(),
            });
        }

        if self.name.is_empty() {
            return Err(LocaleError::Invalid {
                lang_id: self.id.clone(),
                reason: "pack name cannot be empty".to_string(),
            });
        }

        if let Some(expected) = expected_id {
            if expected != self.id {
                return Err(LocaleError::Invalid {
                    lang_id: self.id.clone(),
                    reason: format!("pack id does not match file name {expected}.toml"),
                });
            }
        }

        Ok(())
    }

    /// Whether this is an English pack, which lets date formatting skip translation.
    #[must_use]
    pub fn is_baseline(&self) -> bool {
        self.special_language == BASELINE_LANGUAGE
    }

    /// Look up a string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Look up a UI message, falling back to the key itself when absent.
    #[must_use]
    pub fn message<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(message) = self.get(key) {
            message
        } else {
            warn!(lang_id = %self.id, key, "missing language string");
            key
        }
    }

    /// Overlay another pack's strings onto this one (module packs over the core pack).
    pub fn merge(&mut self, other: &LanguagePack) {
        for (key, value) in &other.strings {
            self.strings.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_english() {
        let pack = LanguagePack::english();
        assert_eq!(pack.id, "en_us");
        assert!(pack.is_baseline());
        assert_eq!(pack.get("date_Tue"), Some("Tue"));
        assert_eq!(pack.get("date_month_short_Sep"), Some("Sep"));
    }

    #[test]
    fn test_message_falls_back_to_key() {
        let pack = LanguagePack::english();
        assert_eq!(pack.message("no_such_string"), "no_such_string");
    }

    #[test]
    fn test_parse_minimal_pack() {
        let pack: LanguagePack = toml::from_str(
            r#"
id = "xx"
name = "Test"
"#,
        )
        .expect("parse pack");
        assert!(!pack.is_baseline());
        assert!(pack.strings.is_empty());
    }

    #[test]
    fn test_validate() {
        let mut pack = LanguagePack::english();
        assert!(pack.validate(Some("en_us")).is_ok());
        assert!(matches!(
            pack.validate(Some("en_gb")),
            Err(LocaleError::Invalid { .. })
        ));
        pack.name.clear();
        assert!(pack.validate(None).is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let mut core = LanguagePack::english();
        let mut module = LanguagePack {
            id: "en_us".to_string(),
            name: "English (US)".to_string(),
            special_language: BASELINE_LANGUAGE.to_string(),
            strings: HashMap::new(),
        };
        module
            .strings
            .insert("word_pages".to_string(), "Pages".to_string());
        core.merge(&module);
        assert_eq!(core.get("word_pages"), Some("Pages"));
        assert_eq!(core.get("date_Mon"), Some("Mon"));
    }
}
