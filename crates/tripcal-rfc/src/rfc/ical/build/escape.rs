//! iCalendar TEXT validation and escaping (RFC 5545 §3.3.11).

use crate::error::{RfcError, RfcResult};

/// Escapes text for iCalendar TEXT values.
///
/// Escapes backslash, comma, semicolon and line breaks. `\r\n`, a lone `\r`
/// and `\n` each become a single `\n` escape.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 10);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result
}

/// Rejects characters that have no representation in a TEXT value.
///
/// TEXT admits no control characters other than horizontal tab; line breaks
/// are accepted because [`escape_text`] encodes them.
///
/// ## Errors
/// Returns [`RfcError::InvalidText`] naming the property and the offending
/// character.
pub fn validate_text(property: &str, s: &str) -> RfcResult<()> {
    match s
        .chars()
        .find(|&c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
    {
        Some(c) => Err(RfcError::InvalidText {
            property: property.to_string(),
            reason: format!("control character U+{:04X} cannot be encoded", u32::from(c)),
        }),
        None => Ok(()),
    }
}
