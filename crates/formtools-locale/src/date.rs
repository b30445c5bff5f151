//! Localized date formatting.

use crate::calendar::{DirectiveKind, LocaleCalendarNames};
use crate::php_date::{self, FormatToken};
use formtools_core::datetime::parse_canonical;
use std::sync::Arc;
use tracing::debug;

/// Format a canonical `YYYY-MM-DD HH:MM:SS` string with a `date()` pattern.
///
/// `offset_hours` shifts the time before formatting (the account's timezone
/// offset). Weekday, month and am/pm names come from `locale`; everything
/// else is rendered exactly as the English formatter would.
///
/// Any input that is not exactly the canonical shape yields `""`.
#[must_use]
pub fn format_date(
    offset_hours: i64,
    datetime: &str,
    pattern: &str,
    locale: &LocaleCalendarNames,
) -> String {
    let Some(dt) = parse_canonical(datetime, offset_hours) else {
        debug!(datetime, "not a canonical datetime");
        return String::new();
    };

    if locale.is_baseline() {
        return php_date::format(pattern, &dt);
    }

    let mut out = String::with_capacity(pattern.len() * 2);
    for token in php_date::tokenize(pattern) {
        match token {
            FormatToken::Literal(c) => out.push(c),
            FormatToken::Directive(c) => {
                let english = php_date::directive(c, &dt);
                match DirectiveKind::from_directive(c) {
                    Some(kind) => out.push_str(locale.translate(kind, &english)),
                    None => out.push_str(&english),
                }
            }
        }
    }
    out
}

/// A formatter bound to one locale and timezone offset.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    locale: Arc<LocaleCalendarNames>,
    offset_hours: i64,
}

impl DateFormatter {
    /// Create a formatter.
    #[must_use]
    pub fn new(locale: Arc<LocaleCalendarNames>, offset_hours: i64) -> Self {
        Self {
            locale,
            offset_hours,
        }
    }

    /// The same locale with a different offset.
    #[must_use]
    pub fn with_offset(&self, offset_hours: i64) -> Self {
        Self::new(Arc::clone(&self.locale), offset_hours)
    }

    /// The locale's calendar names.
    #[must_use]
    pub fn locale(&self) -> &LocaleCalendarNames {
        &self.locale
    }

    /// See [`format_date`].
    #[must_use]
    pub fn format(&self, datetime: &str, pattern: &str) -> String {
        format_date(self.offset_hours, datetime, pattern, &self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::LanguagePack;

    fn french() -> LocaleCalendarNames {
        let pack: LanguagePack =
            toml::from_str(include_str!("../lang/fr_fr.toml")).expect("parse fr_fr pack");
        LocaleCalendarNames::from_pack(&pack).expect("build names")
    }

    #[test]
    fn test_english_path() {
        let en = LocaleCalendarNames::english();
        assert_eq!(
            format_date(0, "2024-03-05 14:30:00", "D, F j, Y", &en),
            "Tue, March 5, 2024"
        );
        assert_eq!(format_date(0, "2024-03-05 14:30:00", "g:i A", &en), "2:30 PM");
    }

    #[test]
    fn test_translated_names_keep_positions() {
        let fr = french();
        assert_eq!(
            format_date(0, "2024-03-05 14:30:00", "D, F j, Y", &fr),
            "mar, mars 5, 2024"
        );
        assert_eq!(
            format_date(0, "2024-03-05 14:30:00", "l jS M", &fr),
            "mardi 5th mars"
        );
    }

    #[test]
    fn test_escaped_directives_stay_literal() {
        let fr = french();
        assert_eq!(
            format_date(0, "2024-03-05 14:30:00", "\\D\\F D", &fr),
            "DF mar"
        );
    }

    #[test]
    fn test_malformed_input_is_empty() {
        let en = LocaleCalendarNames::english();
        for input in [
            "",
            "2024-03-05",
            "2024-03-05T14:30:00",
            "2024-03-05 14:30:00Z",
            "24-03-05 14:30:00",
            "2024/03/05 14:30:00",
            "abcd-ef-gh ij:kl:mn",
        ] {
            assert_eq!(format_date(0, input, "Y-m-d", &en), "", "input {input:?}");
        }
    }

    #[test]
    fn test_normalization() {
        let en = LocaleCalendarNames::english();
        assert_eq!(format_date(0, "2024-00-10 00:00:00", "Y-m-d", &en), "2023-12-10");
        assert_eq!(format_date(0, "2024-03-00 00:00:00", "Y-m-d", &en), "2024-02-29");
        assert_eq!(
            format_date(2, "2023-12-31 23:00:00", "Y-m-d H:i", &en),
            "2024-01-01 01:00"
        );
        assert_eq!(
            format_date(-5, "2024-01-01 02:00:00", "Y-m-d H:i", &en),
            "2023-12-31 21:00"
        );
    }

    #[test]
    fn test_formatter_offset() {
        let formatter = DateFormatter::new(Arc::new(french()), 0);
        assert_eq!(formatter.format("2024-03-05 23:30:00", "D H"), "mar 23");
        assert_eq!(
            formatter.with_offset(1).format("2024-03-05 23:30:00", "D H"),
            "mer 00"
        );
        assert_eq!(formatter.locale().lang_id(), "fr_fr");
    }
}
