//! Escaping shared by the line-oriented text encodings
//!
//! Every rendered record must stay on one line, so control characters in
//! values and logger names are written as escape sequences.

use crate::core::FieldValue;
use std::borrow::Cow;

/// Key written when sanitizing leaves nothing
const EMPTY_KEY: &str = "_";

/// `key=value` with the key sanitized and the value quoted when needed
pub(crate) fn pair(key: &str, value: &FieldValue) -> String {
    let formatted = match value {
        FieldValue::String(s) => escape_value(s),
        other => Cow::Owned(other.to_string()),
    };
    format!("{}={}", escape_key(key), formatted)
}

/// Strip everything but alphanumerics, `_` and `-`
pub(crate) fn escape_key(key: &str) -> Cow<'_, str> {
    if !key.is_empty() && key.chars().all(is_key_char) {
        return Cow::Borrowed(key);
    }
    let cleaned: String = key.chars().filter(|c| is_key_char(*c)).collect();
    if cleaned.is_empty() {
        Cow::Borrowed(EMPTY_KEY)
    } else {
        Cow::Owned(cleaned)
    }
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Quote only when the value is empty or contains spaces, quotes, `=` or
/// control characters
pub(crate) fn escape_value(value: &str) -> Cow<'_, str> {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c == ' ' || c == '"' || c == '=' || c.is_control());
    if needs_quotes {
        Cow::Owned(quote_value(value))
    } else {
        Cow::Borrowed(value)
    }
}

pub(crate) fn quote_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        push_escaped(&mut out, c, true);
    }
    out.push('"');
    out
}

/// Escape control characters only; used for unquoted segments
pub(crate) fn escape_control(value: &str) -> Cow<'_, str> {
    if !value.chars().any(char::is_control) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        push_escaped(&mut out, c, false);
    }
    Cow::Owned(out)
}

fn push_escaped(out: &mut String, c: char, quoted: bool) {
    match c {
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\\' if quoted => out.push_str("\\\\"),
        '"' if quoted => out.push_str("\\\""),
        c if c.is_control() => out.push_str(&format!("\\u{{{:04x}}}", c as u32)),
        c => out.push(c),
    }
}
