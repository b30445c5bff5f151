//! `{$name}` placeholder substitution in UI messages.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{\$([A-Za-z0-9_]+)\}").expect("valid regex"))
}

/// Replace `{$name}` markers using a list of `(name, value)` pairs.
///
/// Markers with no matching pair are left as they are.
#[must_use]
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    interpolate_with(template, |name| {
        values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string())
    })
}

/// Replace `{$name}` markers using a lookup function.
#[must_use]
pub fn interpolate_with<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate(
                "Viewing {$startnum} - {$endnum}",
                &[("startnum", "1"), ("endnum", "10")]
            ),
            "Viewing 1 - 10"
        );
    }

    #[test]
    fn test_unknown_markers_are_kept() {
        assert_eq!(
            interpolate("Error: {$error} ({$code})", &[("error", "disk full")]),
            "Error: disk full ({$code})"
        );
    }

    #[test]
    fn test_values_are_not_rescanned() {
        assert_eq!(
            interpolate("{$a}", &[("a", "{$b}"), ("b", "x")]),
            "{$b}"
        );
    }

    #[test]
    fn test_interpolate_with_closure() {
        let out = interpolate_with("{$X} and {$y}", |name| {
            (name == "X").then(|| "upper".to_string())
        });
        assert_eq!(out, "upper and {$y}");
    }
}
