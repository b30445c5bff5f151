//! Page-level messages built from language packs.

use crate::pack::LanguagePack;
use serde::Serialize;

/// A message shown at the top of a page after a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomMessage {
    /// Whether the message reports success
    pub success: bool,
    /// The localized text
    pub message: String,
}

/// Known `?message=` flags and the outcome each reports.
const CUSTOM_MESSAGES: [(&str, bool, &str); 6] = [
    ("no_views", false, "notify_no_views"),
    ("notify_internal_form_created", true, "notify_internal_form_created"),
    ("change_temp_password", true, "notify_change_temp_password"),
    ("new_submission", true, "notify_new_submission_created"),
    ("notify_sessions_timeout", true, "notify_sessions_timeout"),
    (
        "notify_no_views_assigned_to_client_form",
        false,
        "notify_no_views_assigned_to_client_form",
    ),
];

/// Map a `?message=` flag to its message. Unknown flags yield `None`.
#[must_use]
pub fn custom_page_message(flag: &str, pack: &LanguagePack) -> Option<CustomMessage> {
    CUSTOM_MESSAGES
        .iter()
        .find(|(known, _, _)| *known == flag)
        .map(|&(_, success, key)| CustomMessage {
            success,
            message: pack.message(key).to_string(),
        })
}

/// Build the JavaScript that exposes language strings as `g.messages`.
///
/// Keys missing from their pack are skipped. Double quotes in the strings
/// are backslash-escaped.
#[must_use]
pub fn js_messages(
    keys: &[&str],
    pack: &LanguagePack,
    module_keys: &[&str],
    module_pack: Option<&LanguagePack>,
) -> String {
    let core_rows = keys
        .iter()
        .filter_map(|key| pack.get(key).map(|value| js_row(key, value)));

    let module_rows = module_pack.into_iter().flat_map(|module_pack| {
        module_keys
            .iter()
            .filter_map(move |key| module_pack.get(key).map(|value| js_row(key, value)))
    });

    let rows: Vec<String> = core_rows.chain(module_rows).collect();

    format!(
        "if (typeof g == \"undefined\") {{\n  g = {{}};\n}}\ng.messages = [];\n{}",
        rows.join("\n")
    )
}

fn js_row(key: &str, value: &str) -> String {
    format!("g.messages[\"{key}\"] = \"{}\";", value.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_page_message() {
        let pack = LanguagePack::english();

        let message = custom_page_message("no_views", &pack).expect("known flag");
        assert!(!message.success);
        assert_eq!(message.message, pack.message("notify_no_views"));

        let message = custom_page_message("new_submission", &pack).expect("known flag");
        assert!(message.success);
        assert_eq!(message.message, pack.message("notify_new_submission_created"));

        assert_eq!(custom_page_message("bogus", &pack), None);
    }

    #[test]
    fn test_js_messages() {
        let mut pack = LanguagePack::english();
        pack.strings
            .insert("phrase_quote".to_string(), "Say \"hi\"".to_string());

        let mut module = LanguagePack::english();
        module.strings.clear();
        module
            .strings
            .insert("word_pages".to_string(), "Pages".to_string());

        let js = js_messages(
            &["phrase_quote", "missing_key"],
            &pack,
            &["word_pages"],
            Some(&module),
        );

        assert_eq!(
            js,
            "if (typeof g == \"undefined\") {\n  g = {};\n}\ng.messages = [];\n\
             g.messages[\"phrase_quote\"] = \"Say \\\"hi\\\"\";\n\
             g.messages[\"word_pages\"] = \"Pages\";"
        );
    }

    #[test]
    fn test_js_messages_empty() {
        let js = js_messages(&[], &LanguagePack::english(), &["x"], None);
        assert!(js.ends_with("g.messages = [];\n"));
    }
}
