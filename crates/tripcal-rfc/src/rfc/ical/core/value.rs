//! iCalendar TEXT and DATE-TIME values (RFC 5545 §3.3.11, §3.3.5).

use chrono::{DateTime, Utc};

/// A property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// TEXT value, stored unescaped.
    Text(String),
    /// DATE-TIME value in UTC form (`YYYYMMDDTHHMMSSZ`).
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::DateTime(_) => None,
        }
    }

    /// Returns the value as a UTC instant if it is a date-time value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            Self::Text(_) => None,
        }
    }
}

/// Formats an instant in the RFC 5545 UTC DATE-TIME form.
#[must_use]
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}
