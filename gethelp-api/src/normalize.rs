/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Turns whatever the external responder sends back into display-safe prose.
//!
//! The responder is untrusted and may answer with a JSON object, an array,
//! JSON wrapped in a string, markdown with code fences, or plain text. Two
//! entry points cover this:
//!
//! - [`normalize_any`] for an already-parsed JSON value.
//! - [`normalize_text`] for a raw body. Text that looks like JSON is parsed
//!   and handed to [`normalize_any`]; everything else goes through the
//!   cleanup passes in a fixed order.
//!
//! Each cleanup pass is a public pure function so it can be tested alone.
//! The passes are lossy heuristics and their order matters.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

/// Shown when the responder produced nothing usable.
pub const NO_SOLUTION_TEXT: &str = "No solution text returned.";

/// Object fields checked for the answer, highest priority first.
pub const PREFERRED_FIELDS: [&str; 7] = [
    "solution", "answer", "message", "result", "text", "content", "output",
];

lazy_static! {
    // A language tag only counts when a newline follows it, otherwise the
    // first word of an inline fenced answer would be eaten.
    static ref CODE_FENCE: Regex = Regex::new(r"```[a-zA-Z0-9]*\n|```").expect("valid regex");
    static ref LEADING_WRAPPERS: Regex = Regex::new(r#"^[\s"'{}\[\]]+"#).expect("valid regex");
    static ref TRAILING_WRAPPERS: Regex = Regex::new(r#"[\s"'{}\[\]]+$"#).expect("valid regex");
    static ref KEY_LABEL: Regex =
        Regex::new(r#"(^|\n)\s*"?[A-Za-z0-9_\- ]+"?\s*:\s*"#).expect("valid regex");
    static ref DISALLOWED_SYMBOLS: Regex = Regex::new(r"[*#$/]").expect("valid regex");
    static ref EXTRA_BLANK_LINES: Regex = Regex::new(r"\n{3,}").expect("valid regex");
    static ref INLINE_SPACE_RUN: Regex = Regex::new(r"[ \t]{2,}").expect("valid regex");
}

/// Normalize a parsed JSON value into plain text.
///
/// - string: normalized as text.
/// - array: elements joined with newlines (non-strings serialized first).
/// - object: the first truthy [`PREFERRED_FIELDS`] entry; else every string
///   field in document order; else the object's own serialization.
/// - anything else: its JSON rendering, normalized as text.
pub fn normalize_any(value: &Value) -> String {
    match value {
        Value::String(s) => normalize_text(s),
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(display_string)
                .collect::<Vec<_>>()
                .join("\n");
            normalize_text(&joined)
        }
        Value::Object(fields) => normalize_object(fields),
        other => normalize_text(&other.to_string()),
    }
}

fn normalize_object(fields: &Map<String, Value>) -> String {
    let preferred = PREFERRED_FIELDS
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|v| is_truthy(v));
    if let Some(value) = preferred {
        return normalize_text(&display_string(value));
    }

    let strings: Vec<&str> = fields.values().filter_map(Value::as_str).collect();
    if !strings.is_empty() {
        return normalize_text(&strings.join("\n"));
    }

    // Re-detecting JSON here would parse this same object again.
    clean_text(&Value::Object(fields.clone()).to_string())
}

/// Normalize raw response text into plain text.
///
/// Empty input yields empty output. Text whose trimmed form starts with `{`
/// or `[` is parsed as JSON first; if that fails it is cleaned as plain
/// text like everything else.
pub fn normalize_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    if looks_like_json(raw) {
        if let Ok(parsed) = serde_json::from_str::<Value>(raw) {
            return normalize_any(&parsed);
        }
    }

    clean_text(raw)
}

/// Run every cleanup pass, in order, without JSON detection.
pub fn clean_text(raw: &str) -> String {
    let text = strip_code_fences(raw);
    let text = strip_wrappers(&text);
    let text = strip_key_labels(&text);
    let text = strip_symbols(&text);
    collapse_whitespace(&text).trim().to_string()
}

pub fn looks_like_json(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

/// Remove triple-backtick fences (with an optional language tag line),
/// keeping the fenced content.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").into_owned()
}

/// Remove leading and trailing runs of whitespace, quotes, braces and brackets.
pub fn strip_wrappers(text: &str) -> String {
    let text = LEADING_WRAPPERS.replace(text, "");
    TRAILING_WRAPPERS.replace(&text, "").into_owned()
}

/// Remove `key:` style labels at the start of the text and of each line.
pub fn strip_key_labels(text: &str) -> String {
    KEY_LABEL.replace_all(text, "${1}").into_owned()
}

/// Remove `*`, `#`, `$` and `/`.
pub fn strip_symbols(text: &str) -> String {
    DISALLOWED_SYMBOLS.replace_all(text, "").into_owned()
}

/// Convert CRLF to LF, cap blank lines at one, and squeeze runs of spaces
/// and tabs to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = EXTRA_BLANK_LINES.replace_all(&text, "\n\n");
    INLINE_SPACE_RUN.replace_all(&text, " ").into_owned()
}

fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn solution_field_is_extracted_from_json_text() {
        assert_eq!(
            normalize_text(r#"{"solution":"Do X then Y"}"#),
            "Do X then Y"
        );
    }

    #[test]
    fn inline_fence_keeps_first_word() {
        assert_eq!(
            normalize_text("```Fix the config file```"),
            "Fix the config file"
        );
    }

    #[test]
    fn fence_with_language_tag_is_dropped() {
        assert_eq!(
            normalize_text("```bash\nsystemctl restart nginx\n```"),
            "systemctl restart nginx"
        );
    }

    #[test]
    fn leading_label_is_stripped() {
        assert_eq!(
            normalize_text("answer: Try restarting the service"),
            "Try restarting the service"
        );
    }

    #[test]
    fn labels_are_stripped_on_every_line() {
        assert_eq!(
            normalize_text("Step 1: Back up\nStep 2: Reinstall"),
            "Back up\nReinstall"
        );
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_any(&json!("")), "");
    }

    #[test]
    fn malformed_json_is_cleaned_as_text() {
        assert_eq!(normalize_text("[Reboot the router"), "Reboot the router");
    }

    #[test]
    fn preferred_fields_follow_priority_order() {
        let value = json!({ "message": "second", "solution": "first" });
        assert_eq!(normalize_any(&value), "first");
    }

    #[test]
    fn falsy_preferred_fields_are_skipped() {
        let value = json!({ "solution": "", "answer": null, "result": 0, "text": "Use a VPN" });
        assert_eq!(normalize_any(&value), "Use a VPN");
    }

    #[test]
    fn nested_preferred_value_is_normalized() {
        let value = json!({ "result": { "text": "Nested answer" } });
        assert_eq!(normalize_any(&value), "Nested answer");
    }

    #[test]
    fn string_fields_are_joined_in_document_order() {
        let value = json!({ "title": "Disk almost full", "count": 3, "body": "Clear tmp" });
        assert_eq!(normalize_any(&value), "Disk almost full\nClear tmp");
    }

    #[test]
    fn object_without_strings_falls_back_to_serialization() {
        assert_eq!(normalize_any(&json!({ "code": 42 })), "42");
    }

    #[test]
    fn array_elements_are_joined_with_newlines() {
        assert_eq!(normalize_any(&json!(["First", "Second"])), "First\nSecond");
        assert_eq!(normalize_any(&json!([])), "");
    }

    #[test]
    fn non_string_array_elements_are_serialized_before_joining() {
        assert_eq!(
            normalize_any(&json!(["Step one", 2, true, null])),
            "Step one\n2\ntrue\nnull"
        );
        // A lone object element serializes to JSON text, which is detected
        // and normalized as an object.
        assert_eq!(
            normalize_any(&json!([{ "answer": "Check cables" }])),
            "Check cables"
        );
        // Mixed elements join into text that starts like JSON but does not
        // parse, so it falls through to the cleanup passes.
        assert_eq!(
            normalize_any(&json!([{ "solution": "a" }, 3])),
            "\"a\"}\n3"
        );
    }

    #[test]
    fn json_inside_a_string_is_unwrapped() {
        let value = json!(r#"{"answer":"Clear the cache"}"#);
        assert_eq!(normalize_any(&value), "Clear the cache");
    }

    #[test]
    fn scalars_use_their_json_rendering() {
        assert_eq!(normalize_any(&json!(17)), "17");
        assert_eq!(normalize_any(&json!(true)), "true");
        assert_eq!(normalize_any(&Value::Null), "null");
    }

    #[test]
    fn disallowed_symbols_are_removed() {
        assert_eq!(strip_symbols("**Bold** #tag $5 a/b"), "Bold tag 5 ab");
        assert_eq!(
            normalize_text("## Heading\n**Check** the logs"),
            "Heading\nCheck the logs"
        );
    }

    #[test]
    fn wrappers_are_trimmed_from_both_ends() {
        assert_eq!(strip_wrappers(" \"{[Reset it]}\" "), "Reset it");
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(
            collapse_whitespace("a\r\n\r\n\r\n\r\nb   c\t\td"),
            "a\n\nb c d"
        );
    }

    #[test]
    fn normalizing_normal_form_is_idempotent() {
        for raw in [
            "Line one\n\nLine two",
            "answer: Try restarting the service",
            "```Fix the config file```",
            r#"{"solution":"Do X then Y"}"#,
        ] {
            let once = normalize_text(raw);
            assert_eq!(normalize_text(&once), once, "input: {raw:?}");
        }
    }
}
