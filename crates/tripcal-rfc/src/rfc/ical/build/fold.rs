//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum line length in octets (not including CRLF).
pub const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to comply with the 75-octet limit and terminates it
/// with CRLF.
///
/// Continuation lines start with a single space, which counts toward their
/// 75 octets. Breaks only ever fall on UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut result = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS + 1) * 3);
    let mut used = 0;

    for c in line.chars() {
        let width = c.len_utf8();
        if used + width > MAX_LINE_OCTETS {
            result.push_str("\r\n ");
            // The leading space takes one octet of every continuation line.
            used = 1;
        }
        result.push(c);
        used += width;
    }

    result.push_str("\r\n");
    result
}
