//! String helpers used across the admin panel and the email templates.
//!
//! Lengths are counted in characters, not bytes, so multibyte text is never
//! cut in the middle of a code point.

use regex::Regex;
use std::sync::OnceLock;

/// Characters kept by [`strip_chars`] when no whitelist is given.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// How [`trim_string`] shortens long text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimMode {
    /// Cut at the limit and append `...`
    #[default]
    Ellipsis,
    /// Keep everything, inserting `<br />` every `length` characters
    PageBreak,
}

/// Shorten a string to `length` characters.
///
/// Strings shorter than `length` are returned unchanged.
#[must_use]
pub fn trim_string(s: &str, length: usize, mode: TrimMode) -> String {
    if s.chars().count() < length {
        return s.to_string();
    }

    match mode {
        TrimMode::Ellipsis => {
            let mut trimmed: String = s.chars().take(length).collect();
            trimmed.push_str("...");
            trimmed
        }
        TrimMode::PageBreak => mb_str_split(s, length)
            .map(|parts| parts.join("<br />"))
            .unwrap_or_else(|| s.to_string()),
    }
}

/// Split a string into chunks of `split_length` characters.
///
/// The last chunk holds the leftovers. Returns `None` if `split_length` is 0.
#[must_use]
pub fn mb_str_split(s: &str, split_length: usize) -> Option<Vec<String>> {
    if split_length < 1 {
        return None;
    }

    let chars: Vec<char> = s.chars().collect();
    Some(
        chars
            .chunks(split_length)
            .map(|chunk| chunk.iter().collect())
            .collect(),
    )
}

/// Remove every character not present in `whitelist`.
#[must_use]
pub fn strip_chars(s: &str, whitelist: &str) -> String {
    s.chars().filter(|c| whitelist.contains(*c)).collect()
}

/// Convert any string into a slug of ASCII alphanumerics and single underscores.
#[must_use]
pub fn create_slug(s: &str) -> String {
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
    static REPEATED: OnceLock<Regex> = OnceLock::new();
    let non_alnum = NON_ALNUM.get_or_init(|| Regex::new("[^a-zA-Z0-9]").expect("valid regex"));
    let repeated = REPEATED.get_or_init(|| Regex::new("_{2,}").expect("valid regex"));

    let slug = non_alnum.replace_all(s.trim(), "_");
    repeated.replace_all(&slug, "_").into_owned()
}

/// Append a query string to a URL, choosing `?` or `&` as needed.
#[must_use]
pub fn construct_url(url: &str, query: &str) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{query}")
}

/// Loose email syntax check used by the admin forms.
#[must_use]
pub fn is_valid_email(s: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9]+([_.-][a-z0-9]+)*@([a-z0-9]+([.-][a-z0-9]+)*)+\.[a-z]{2,}$")
            .expect("valid regex")
    });
    regex.is_match(s)
}

/// Case-insensitive membership test.
#[must_use]
pub fn in_array_case_insensitive<S: AsRef<str>>(value: &str, items: &[S]) -> bool {
    let value = value.to_lowercase();
    items.iter().any(|item| item.as_ref().to_lowercase() == value)
}

/// Drop blank entries. `"0"` counts as blank, matching the legacy form handling.
#[must_use]
pub fn remove_empty<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty() && *s != "0")
        .map(str::to_string)
        .collect()
}

/// Render a list of error messages as bullet lines of HTML.
#[must_use]
pub fn error_list_html<S: AsRef<str>>(errors: &[S]) -> String {
    errors
        .iter()
        .map(|e| format!("&bull;&nbsp; {}", e.as_ref()))
        .collect::<Vec<_>>()
        .join("<br />")
}

/// Quote a database identifier containing a hyphen.
#[must_use]
pub fn clean_db_entity(s: &str) -> String {
    if s.contains('-') {
        format!("`{s}`")
    } else {
        s.to_string()
    }
}

/// Find the value for `name` in serialized `(name, value)` form pairs.
///
/// Returns an empty string when the name is absent.
#[must_use]
pub fn extract_array_val<'a>(pairs: &'a [(String, String)], name: &str) -> &'a str {
    pairs
        .iter()
        .find(|(n, _)| n == name)
        .map_or("", |(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_string_short_input_untouched() {
        assert_eq!(trim_string("hello", 10, TrimMode::Ellipsis), "hello");
    }

    #[test]
    fn test_trim_string_ellipsis() {
        assert_eq!(trim_string("hello world", 5, TrimMode::Ellipsis), "hello...");
        // exactly at the limit still gets trimmed
        assert_eq!(trim_string("hello", 5, TrimMode::Ellipsis), "hello...");
    }

    #[test]
    fn test_trim_string_multibyte() {
        assert_eq!(trim_string("émigré ñandú", 6, TrimMode::Ellipsis), "émigré...");
    }

    #[test]
    fn test_trim_string_page_break() {
        assert_eq!(
            trim_string("abcdefgh", 3, TrimMode::PageBreak),
            "abc<br />def<br />gh"
        );
    }

    #[test]
    fn test_mb_str_split() {
        assert_eq!(
            mb_str_split("日本語テキスト", 3),
            Some(vec!["日本語".to_string(), "テキス".to_string(), "ト".to_string()])
        );
        assert_eq!(mb_str_split("abc", 0), None);
        assert_eq!(mb_str_split("", 2), Some(vec![]));
    }

    #[test]
    fn test_strip_chars() {
        assert_eq!(strip_chars("a-b_c 1!", ALPHANUMERIC), "abc1");
        assert_eq!(strip_chars("1,234.50", "0123456789."), "1234.50");
    }

    #[test]
    fn test_create_slug() {
        assert_eq!(create_slug("  My Form: Contact Us! "), "My_Form_Contact_Us_");
        assert_eq!(create_slug("a--b"), "a_b");
    }

    #[test]
    fn test_construct_url() {
        assert_eq!(construct_url("edit.php", ""), "edit.php");
        assert_eq!(construct_url("edit.php", "page=2"), "edit.php?page=2");
        assert_eq!(
            construct_url("edit.php?form_id=3", "page=2"),
            "edit.php?form_id=3&page=2"
        );
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ben.keen@example.org"));
        assert!(is_valid_email("First_Last@Mail.Example.COM"));
        assert!(!is_valid_email("no-at-sign.example.org"));
        assert!(!is_valid_email("trailing@dot."));
        assert!(!is_valid_email("a@b.c"));
    }

    #[test]
    fn test_in_array_case_insensitive() {
        let words = ["SELECT", "From", "where"];
        assert!(in_array_case_insensitive("select", &words));
        assert!(in_array_case_insensitive("WHERE", &words));
        assert!(!in_array_case_insensitive("order", &words));
    }

    #[test]
    fn test_remove_empty() {
        assert_eq!(remove_empty(&["a", "", "0", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_error_list_html() {
        assert_eq!(
            error_list_html(&["First", "Second"]),
            "&bull;&nbsp; First<br />&bull;&nbsp; Second"
        );
    }

    #[test]
    fn test_clean_db_entity() {
        assert_eq!(clean_db_entity("my-db"), "`my-db`");
        assert_eq!(clean_db_entity("formtools"), "formtools");
    }

    #[test]
    fn test_extract_array_val() {
        let pairs = vec![
            ("field_name".to_string(), "email".to_string()),
            ("field_title".to_string(), "Email".to_string()),
        ];
        assert_eq!(extract_array_val(&pairs, "field_title"), "Email");
        assert_eq!(extract_array_val(&pairs, "missing"), "");
    }
}
