//! The PHP `date()` pattern language, rendered in English.
//!
//! Patterns are parsed into a token stream up front. The localized formatter
//! in [`crate::date`] walks the same stream and swaps the names of the
//! locale-sensitive directives, so nothing here knows about languages.
//!
//! Canonical datetimes carry no zone and are treated as UTC.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// One element of a parsed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatToken {
    /// Emitted as-is
    Literal(char),
    /// Replaced by the directive's rendering
    Directive(char),
}

const DIRECTIVES: &str = "dDjlNSwzWFmMntLoYyaABgGhHisuveIOPpTZcrU";

/// Whether `c` is a supported directive character.
#[must_use]
pub fn is_directive(c: char) -> bool {
    DIRECTIVES.contains(c)
}

/// Parse a pattern into tokens.
///
/// A backslash makes the next character literal; a trailing backslash is
/// itself literal. Characters that are not directives are literals.
#[must_use]
pub fn tokenize(pattern: &str) -> Vec<FormatToken> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            tokens.push(FormatToken::Literal(chars.next().unwrap_or('\\')));
        } else if is_directive(c) {
            tokens.push(FormatToken::Directive(c));
        } else {
            tokens.push(FormatToken::Literal(c));
        }
    }

    tokens
}

/// Render a whole pattern.
#[must_use]
pub fn format(pattern: &str, dt: &NaiveDateTime) -> String {
    tokenize(pattern)
        .into_iter()
        .fold(String::with_capacity(pattern.len() * 2), |mut out, token| {
            match token {
                FormatToken::Literal(c) => out.push(c),
                FormatToken::Directive(c) => out.push_str(&directive(c, dt)),
            }
            out
        })
}

/// Render a single directive. Unknown characters come back unchanged.
#[must_use]
pub fn directive(c: char, dt: &NaiveDateTime) -> String {
    match c {
        // day
        'd' => format!("{:02}", dt.day()),
        'D' => weekday_long(dt)[..3].to_string(),
        'j' => dt.day().to_string(),
        'l' => weekday_long(dt).to_string(),
        'N' => dt.weekday().number_from_monday().to_string(),
        'S' => ordinal_suffix(dt.day()).to_string(),
        'w' => dt.weekday().num_days_from_sunday().to_string(),
        'z' => dt.ordinal0().to_string(),

        // week
        'W' => format!("{:02}", dt.iso_week().week()),

        // month
        'F' => month_long(dt).to_string(),
        'm' => format!("{:02}", dt.month()),
        'M' => month_long(dt)[..3].to_string(),
        'n' => dt.month().to_string(),
        't' => days_in_month(dt.year(), dt.month()).to_string(),

        // year
        'L' => u8::from(is_leap_year(dt.year())).to_string(),
        'o' => dt.iso_week().year().to_string(),
        'Y' => year(dt.year()),
        'y' => format!("{:02}", dt.year().rem_euclid(100)),

        // time
        'a' => if dt.hour() < 12 { "am" } else { "pm" }.to_string(),
        'A' => if dt.hour() < 12 { "AM" } else { "PM" }.to_string(),
        'B' => swatch_beat(dt),
        'g' => hour12(dt.hour()).to_string(),
        'G' => dt.hour().to_string(),
        'h' => format!("{:02}", hour12(dt.hour())),
        'H' => format!("{:02}", dt.hour()),
        'i' => format!("{:02}", dt.minute()),
        's' => format!("{:02}", dt.second()),
        'u' => "000000".to_string(),
        'v' => "000".to_string(),

        // timezone
        'e' | 'T' => "UTC".to_string(),
        'I' | 'Z' => "0".to_string(),
        'O' => "+0000".to_string(),
        'P' => "+00:00".to_string(),
        'p' => "Z".to_string(),

        // full date/time
        'c' => format("Y-m-d\\TH:i:sP", dt),
        'r' => format("D, d M Y H:i:s O", dt),
        'U' => dt.and_utc().timestamp().to_string(),

        other => other.to_string(),
    }
}

fn weekday_long(dt: &NaiveDateTime) -> &'static str {
    const NAMES: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    NAMES[dt.weekday().num_days_from_monday() as usize]
}

fn month_long(dt: &NaiveDateTime) -> &'static str {
    const NAMES: [&str; 12] = [
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
    NAMES[dt.month0() as usize]
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{year:04}")
    }
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

// Swatch Internet Time is defined on UTC+1.
fn swatch_beat(dt: &NaiveDateTime) -> String {
    let seconds = i64::from(dt.num_seconds_from_midnight());
    let beat = ((seconds + 3_600) % 86_400) * 10 / 864;
    format!("{beat:03}")
}
