//! Text utilities for label markup
//!
//! - Escaping user text for HTML content and attributes
//! - Measuring strings the way the label page measures them
//! - Display upper-casing for Cyrillic and Latin text

use std::borrow::Cow;

/// Escape text for use as element content
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escape text for use inside a double-quoted attribute
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Length of a string in UTF-16 code units
///
/// This is the length the label page sees, so layout thresholds computed
/// here agree with the page.
pub fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Upper-case text for display
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}
