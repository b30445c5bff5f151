//! Localized calendar names derived from a language pack.
//!
//! Built once per language and shared read-only; construction fails if any
//! name the date formatter may need is missing, so formatting never has to.

use crate::error::{LocaleError, Result};
use crate::pack::LanguagePack;
use std::collections::HashMap;
use tracing::warn;

const WEEKDAYS_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKDAYS_LONG: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MERIDIEM_LOWER: [&str; 2] = ["am", "pm"];
const MERIDIEM_UPPER: [&str; 2] = ["AM", "PM"];

/// The locale-sensitive `date()` directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `D` - Mon through Sun
    WeekdayShort,
    /// `l` - Monday through Sunday
    WeekdayLong,
    /// `F` - January through December
    MonthLong,
    /// `M` - Jan through Dec
    MonthShort,
    /// `a` - am or pm
    MeridiemLower,
    /// `A` - AM or PM
    MeridiemUpper,
}

impl DirectiveKind {
    /// All locale-sensitive directive kinds.
    pub const ALL: [DirectiveKind; 6] = [
        Self::WeekdayShort,
        Self::WeekdayLong,
        Self::MonthLong,
        Self::MonthShort,
        Self::MeridiemLower,
        Self::MeridiemUpper,
    ];

    /// Map a pattern character to its kind, if it is locale-sensitive.
    #[must_use]
    pub fn from_directive(c: char) -> Option<Self> {
        match c {
            'D' => Some(Self::WeekdayShort),
            'l' => Some(Self::WeekdayLong),
            'F' => Some(Self::MonthLong),
            'M' => Some(Self::MonthShort),
            'a' => Some(Self::MeridiemLower),
            'A' => Some(Self::MeridiemUpper),
            _ => None,
        }
    }

    /// The pattern character for this kind.
    #[must_use]
    pub fn directive(self) -> char {
        match self {
            Self::WeekdayShort => 'D',
            Self::WeekdayLong => 'l',
            Self::MonthLong => 'F',
            Self::MonthShort => 'M',
            Self::MeridiemLower => 'a',
            Self::MeridiemUpper => 'A',
        }
    }

    /// Every canonical English value this directive can produce.
    #[must_use]
    pub fn english_values(self) -> &'static [&'static str] {
        match self {
            Self::WeekdayShort => &WEEKDAYS_SHORT,
            Self::WeekdayLong => &WEEKDAYS_LONG,
            Self::MonthLong => &MONTHS_LONG,
            Self::MonthShort => &MONTHS_SHORT,
            Self::MeridiemLower => &MERIDIEM_LOWER,
            Self::MeridiemUpper => &MERIDIEM_UPPER,
        }
    }

    /// Language pack key holding the translation of `english`.
    #[must_use]
    pub fn lang_key(self, english: &str) -> String {
        match self {
            Self::MonthLong => format!("date_month_{english}"),
            Self::MonthShort => format!("date_month_short_{english}"),
            _ => format!("date_{english}"),
        }
    }
}

/// Validated weekday, month and meridiem names for one locale.
#[derive(Debug, Clone)]
pub struct LocaleCalendarNames {
    lang_id: String,
    baseline: bool,
    names: HashMap<(DirectiveKind, &'static str), String>,
}

impl LocaleCalendarNames {
    /// Build the table from a language pack.
    ///
    /// # Errors
    /// Returns `LocaleError::MissingKeys` listing every required key that is
    /// absent or empty.
    pub fn from_pack(pack: &LanguagePack) -> Result<Self> {
        let mut names = HashMap::new();
        let mut missing = Vec::new();

        for kind in DirectiveKind::ALL {
            for &english in kind.english_values() {
                let key = kind.lang_key(english);
                match pack.get(&key) {
                    Some(name) if !name.is_empty() => {
                        names.insert((kind, english), name.to_string());
                    }
                    _ => missing.push(key),
                }
            }
        }

        if !missing.is_empty() {
            return Err(LocaleError::MissingKeys {
                lang_id: pack.id.clone(),
                keys: missing,
            });
        }

        Ok(Self {
            lang_id: pack.id.clone(),
            baseline: pack.is_baseline(),
            names,
        })
    }

    /// The canonical English table.
    #[must_use]
    pub fn english() -> Self {
        let names = DirectiveKind::ALL
            .into_iter()
            .flat_map(|kind| {
                kind.english_values()
                    .iter()
                    .map(move |&english| ((kind, english), english.to_string()))
            })
            .collect();

        Self {
            lang_id: "en_us".to_string(),
            baseline: true,
            names,
        }
    }

    /// Id of the language pack this table was built from.
    #[must_use]
    pub fn lang_id(&self) -> &str {
        &self.lang_id
    }

    /// Whether this is an English locale.
    #[must_use]
    pub fn is_baseline(&self) -> bool {
        self.baseline
    }

    /// The localized name for a canonical English value.
    #[must_use]
    pub fn name(&self, kind: DirectiveKind, english: &str) -> Option<&str> {
        let canonical = kind
            .english_values()
            .iter()
            .copied()
            .find(|&value| value == english)?;
        self.names.get(&(kind, canonical)).map(String::as_str)
    }

    /// Translate a canonical English value, falling back to it unchanged.
    ///
    /// The fallback only triggers for values outside [`DirectiveKind::english_values`],
    /// since construction guarantees every listed value has a name.
    #[must_use]
    pub fn translate<'a>(&'a self, kind: DirectiveKind, english: &'a str) -> &'a str {
        if let Some(name) = self.name(kind, english) {
            name
        } else {
            warn!(lang_id = %self.lang_id, ?kind, english, "no localized calendar name");
            english
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french() -> LanguagePack {
        toml::from_str(include_str!("../lang/fr_fr.toml")).expect("parse fr_fr pack")
    }

    #[test]
    fn test_name_lookup_with_borrowed_value() {
        let names = LocaleCalendarNames::from_pack(&french()).expect("build names");
        let rendered = String::from("Tuesday");
        assert_eq!(names.name(DirectiveKind::WeekdayLong, &rendered), Some("mardi"));
        assert_eq!(names.name(DirectiveKind::WeekdayLong, "Tue"), None);
        assert_eq!(
            names.translate(DirectiveKind::MonthShort, &String::from("Mar")),
            "mars"
        );
    }

    #[test]
    fn test_directive_round_trip() {
        for kind in DirectiveKind::ALL {
            assert_eq!(DirectiveKind::from_directive(kind.directive()), Some(kind));
        }
        assert_eq!(DirectiveKind::from_directive('d'), None);
        assert_eq!(DirectiveKind::from_directive('S'), None);
    }

    #[test]
    fn test_lang_keys() {
        assert_eq!(DirectiveKind::WeekdayShort.lang_key("Tue"), "date_Tue");
        assert_eq!(DirectiveKind::WeekdayLong.lang_key("Tuesday"), "date_Tuesday");
        assert_eq!(DirectiveKind::MonthLong.lang_key("March"), "date_month_March");
        assert_eq!(DirectiveKind::MonthShort.lang_key("Mar"), "date_month_short_Mar");
        assert_eq!(DirectiveKind::MeridiemLower.lang_key("pm"), "date_pm");
        assert_eq!(DirectiveKind::MeridiemUpper.lang_key("PM"), "date_PM");
    }

    #[test]
    fn test_from_french_pack() {
        let names = LocaleCalendarNames::from_pack(&french()).expect("build names");
        assert!(!names.is_baseline());
        assert_eq!(names.lang_id(), "fr_fr");
        assert_eq!(names.name(DirectiveKind::WeekdayShort, "Tue"), Some("mar"));
        assert_eq!(names.name(DirectiveKind::MonthLong, "March"), Some("mars"));
        assert_eq!(names.name(DirectiveKind::MonthShort, "Feb"), Some("févr."));
    }

    #[test]
    fn test_english_matches_bundled_pack() {
        let from_pack =
            LocaleCalendarNames::from_pack(&LanguagePack::english()).expect("build names");
        let builtin = LocaleCalendarNames::english();
        assert!(from_pack.is_baseline());
        for kind in DirectiveKind::ALL {
            for &english in kind.english_values() {
                assert_eq!(from_pack.name(kind, english), builtin.name(kind, english));
                assert_eq!(builtin.name(kind, english), Some(english));
            }
        }
    }

    #[test]
    fn test_missing_keys_are_reported() {
        let mut pack = french();
        pack.strings.remove("date_Sun");
        pack.strings
            .insert("date_month_short_Dec".to_string(), String::new());

        let err = LocaleCalendarNames::from_pack(&pack).unwrap_err();
        match err {
            LocaleError::MissingKeys { lang_id, keys } => {
                assert_eq!(lang_id, "fr_fr");
                assert_eq!(keys, vec!["date_Sun", "date_month_short_Dec"]);
            }
            other => panic!("expected MissingKeys, got {other:?}"),
        }
    }

    #[test]
    fn test_translate_falls_back() {
        let names = LocaleCalendarNames::english();
        assert_eq!(names.translate(DirectiveKind::WeekdayShort, "Xyz"), "Xyz");
    }
}
