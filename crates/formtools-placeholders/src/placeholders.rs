//! The resolved token-to-value mapping.

use formtools_locale::interpolate_with;
use serde::Serialize;
use std::collections::BTreeMap;

/// Placeholder values for one submission, keyed by token name (`FORMNAME`,
/// `ANSWER_email`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Placeholders(BTreeMap<String, String>);

impl Placeholders {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a token, replacing any earlier value.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.0.insert(token.into(), value.into());
    }

    /// Value of a token.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(String::as_str)
    }

    /// Whether a token is set.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no tokens are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tokens and values in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace `{$TOKEN}` markers in a template.
    ///
    /// Markers naming an unset token are left in place.
    #[must_use]
    pub fn substitute(&self, template: &str) -> String {
        interpolate_with(template, |token| self.get(token).map(str::to_string))
    }

    /// The underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<BTreeMap<String, String>> for Placeholders {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}
