//! Extraction of docx-rs values that are not publicly accessible
//!
//! Several leaf types in docx-rs (colors, sizes, justification values,
//! style names, page geometry) keep their inner fields private. Values are
//! recovered from the Debug representation instead, as a workaround for
//! private field access.

use once_cell::sync::Lazy;
use regex::Regex;

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());
static UINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// First quoted string in a Debug representation, e.g. the "FF0000" in
/// `Color { val: "FF0000" }`.
pub(crate) fn quoted_value(debug: &str) -> Option<String> {
    QUOTED
        .captures(debug)
        .map(|caps| caps[1].to_string())
}

/// First unsigned integer in a Debug representation, e.g. the 24 in
/// `Sz(24)`.
pub(crate) fn uint_value(debug: &str) -> Option<u32> {
    UINT.find(debug).and_then(|m| m.as_str().parse().ok())
}

/// Value of a named integer field, matching both `key: 123` and
/// `key: Some(123)`. The key must start at a word boundary so that e.g.
/// "header" does not match inside "page_header".
pub(crate) fn named_uint(debug: &str, key: &str) -> Option<i64> {
    let rest = find_field(debug, key)?;
    let rest = rest.strip_prefix("Some(").unwrap_or(rest);
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// First quoted string following a named field, matching both
/// `key: "value"` and `key: Wrapper("value")`.
pub(crate) fn named_quoted(debug: &str, key: &str) -> Option<String> {
    quoted_value(find_field(debug, key)?)
}

/// Identifier token of a named field, e.g. the `Paragraph` in
/// `style_type: Paragraph`.
pub(crate) fn named_ident<'a>(debug: &'a str, key: &str) -> Option<&'a str> {
    let rest = find_field(debug, key)?;
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

/// Locate `key: ` at a word boundary and return the remainder of the
/// string after it.
fn find_field<'a>(debug: &'a str, key: &str) -> Option<&'a str> {
    let marker = format!("{key}: ");
    let bytes = debug.as_bytes();
    let mut search = 0;
    while let Some(pos) = debug[search..].find(&marker) {
        let start = search + pos;
        let boundary = start == 0 || {
            let prev = bytes[start - 1];
            !prev.is_ascii_alphanumeric() && prev != b'_'
        };
        if boundary {
            return Some(&debug[start + marker.len()..]);
        }
        search = start + marker.len();
    }
    None
}
