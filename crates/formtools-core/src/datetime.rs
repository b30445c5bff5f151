//! Canonical datetime helpers.
//!
//! Stored timestamps are exchanged as `YYYY-MM-DD HH:MM:SS` strings. Field
//! values are normalized the way `mktime` does it: month 0 is December of the
//! previous year, day 0 is the last day of the previous month, and hour
//! overflow rolls into adjacent days.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// `strftime` pattern of the canonical datetime representation.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The six numeric fields of a canonical datetime string, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalFields {
    /// Four-digit year
    pub year: u32,
    /// Month, `00`-`99` as written
    pub month: u32,
    /// Day of month, `00`-`99` as written
    pub day: u32,
    /// Hour, `00`-`99` as written
    pub hour: u32,
    /// Minute, `00`-`99` as written
    pub minute: u32,
    /// Second, `00`-`99` as written
    pub second: u32,
}

impl CanonicalFields {
    /// Split a canonical datetime string into its numeric fields.
    ///
    /// Returns `None` unless the input is exactly 19 bytes with digits in
    /// every numeric slot and `-`, ` `, `:` separators. Out-of-range values
    /// (month 13, day 00) are accepted here and normalized later.
    #[must_use]
    pub fn parse(datetime: &str) -> Option<Self> {
        let bytes = datetime.as_bytes();
        if bytes.len() != 19 {
            return None;
        }

        let separators = [(4, b'-'), (7, b'-'), (10, b' '), (13, b':'), (16, b':')];
        if separators.iter().any(|&(i, sep)| bytes[i] != sep) {
            return None;
        }

        let number = |start: usize, len: usize| -> Option<u32> {
            let slot = &bytes[start..start + len];
            if !slot.iter().all(u8::is_ascii_digit) {
                return None;
            }
            Some(
                slot.iter()
                    .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0')),
            )
        };

        Some(Self {
            year: number(0, 4)?,
            month: number(5, 2)?,
            day: number(8, 2)?,
            hour: number(11, 2)?,
            minute: number(14, 2)?,
            second: number(17, 2)?,
        })
    }

    /// Build the normalized calendar datetime, shifting the hour by `offset_hours`.
    ///
    /// Returns `None` only when the result falls outside chrono's supported range.
    #[must_use]
    pub fn normalize(&self, offset_hours: i64) -> Option<NaiveDateTime> {
        let months = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;
        let start = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;

        let hours = i64::from(self.hour).checked_add(offset_hours)?;
        let seconds = (i64::from(self.day) - 1)
            .checked_mul(86_400)?
            .checked_add(hours.checked_mul(3_600)?)?
            .checked_add(i64::from(self.minute) * 60 + i64::from(self.second))?;

        start.checked_add_signed(TimeDelta::try_seconds(seconds)?)
    }
}

/// Parse and normalize a canonical datetime string in one step.
#[must_use]
pub fn parse_canonical(datetime: &str, offset_hours: i64) -> Option<NaiveDateTime> {
    CanonicalFields::parse(datetime)?.normalize(offset_hours)
}

/// The current UTC time as a canonical datetime string.
#[must_use]
pub fn current_datetime() -> String {
    Utc::now().format(CANONICAL_FORMAT).to_string()
}

/// A Unix timestamp as a canonical datetime string (UTC).
#[must_use]
pub fn datetime_from_timestamp(timestamp: i64) -> Option<String> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.format(CANONICAL_FORMAT).to_string())
}

/// A canonical datetime string as a Unix timestamp (UTC), with `mktime` normalization.
#[must_use]
pub fn datetime_to_timestamp(datetime: &str) -> Option<i64> {
    parse_canonical(datetime, 0).map(|dt| dt.and_utc().timestamp())
}

/// Strict check that a string is a real canonical datetime.
///
/// Unlike [`CanonicalFields::parse`], this rejects out-of-range fields and
/// dates that don't exist in the calendar.
#[must_use]
pub fn is_valid_datetime(datetime: &str) -> bool {
    static DATETIME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = DATETIME_REGEX.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2} ([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$")
            .expect("valid regex")
    });

    regex.is_match(datetime) && NaiveDateTime::parse_from_str(datetime, CANONICAL_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(dt: NaiveDateTime) -> String {
        dt.format(CANONICAL_FORMAT).to_string()
    }

    #[test]
    fn test_parse_fields() {
        let fields = CanonicalFields::parse("2024-03-05 14:30:09").expect("parse fields");
        assert_eq!(fields.year, 2024);
        assert_eq!(fields.month, 3);
        assert_eq!(fields.day, 5);
        assert_eq!(fields.hour, 14);
        assert_eq!(fields.minute, 30);
        assert_eq!(fields.second, 9);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for input in [
            "",
            "2024-03-05",
            "2024-03-05 14:30",
            "2024-03-05 14:30:000",
            "2024-03-05T14:30:00",
            "2024/03/05 14:30:00",
            "2024-0a-05 14:30:00",
            "２０24-03-05 14:30:00",
        ] {
            assert!(CanonicalFields::parse(input).is_none(), "should reject {input:?}");
        }
    }

    #[test]
    fn test_normalize_plain() {
        let dt = parse_canonical("2024-03-05 14:30:00", 0).expect("normalize");
        assert_eq!(canonical(dt), "2024-03-05 14:30:00");
    }

    #[test]
    fn test_normalize_offset_rolls_over_year() {
        let dt = parse_canonical("2023-12-31 22:00:00", 5).expect("normalize");
        assert_eq!(canonical(dt), "2024-01-01 03:00:00");

        let dt = parse_canonical("2024-01-01 02:00:00", -3).expect("normalize");
        assert_eq!(canonical(dt), "2023-12-31 23:00:00");
    }

    #[test]
    fn test_normalize_out_of_range_fields() {
        // month 13 is January of the next year
        let dt = parse_canonical("2023-13-01 00:00:00", 0).expect("normalize");
        assert_eq!(canonical(dt), "2024-01-01 00:00:00");

        // day 0 is the last day of the previous month
        let dt = parse_canonical("2024-03-00 00:00:00", 0).expect("normalize");
        assert_eq!(canonical(dt), "2024-02-29 00:00:00");

        // month 0 is December of the previous year
        let dt = parse_canonical("2024-00-10 00:00:00", 0).expect("normalize");
        assert_eq!(canonical(dt), "2023-12-10 00:00:00");

        // February 31st overflows into March
        let dt = parse_canonical("2023-02-31 00:00:00", 0).expect("normalize");
        assert_eq!(canonical(dt), "2023-03-03 00:00:00");
    }

    #[test]
    fn test_timestamp_conversions() {
        assert_eq!(datetime_to_timestamp("1970-01-01 00:00:00"), Some(0));
        assert_eq!(datetime_to_timestamp("2001-09-09 01:46:40"), Some(1_000_000_000));
        assert_eq!(
            datetime_from_timestamp(1_000_000_000).as_deref(),
            Some("2001-09-09 01:46:40")
        );
        assert_eq!(datetime_to_timestamp("yesterday"), None);
    }

    #[test]
    fn test_current_datetime_is_canonical() {
        assert!(is_valid_datetime(&current_datetime()));
    }

    #[test]
    fn test_is_valid_datetime() {
        assert!(is_valid_datetime("2024-02-29 23:59:59"));
        assert!(!is_valid_datetime("2023-02-29 12:00:00"));
        assert!(!is_valid_datetime("2024-01-01 24:00:00"));
        assert!(!is_valid_datetime("2024-01-01 12:60:00"));
        assert!(!is_valid_datetime("2024-1-01 12:00:00"));
    }
}
