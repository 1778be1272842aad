//! iCalendar property type (RFC 5545 §3.8).

use chrono::{DateTime, Utc};

use super::Value;

/// An iCalendar property: an uppercase name and a typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    pub value: Value,
}

impl Property {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: Value::Text(value.into()),
        }
    }

    /// Creates a property with a UTC date-time value.
    #[must_use]
    pub fn utc_datetime(name: impl Into<String>, dt: DateTime<Utc>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: Value::DateTime(dt),
        }
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns the value as a UTC instant if it is a date-time value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        self.value.as_datetime()
    }
}

/// Property names used by itinerary calendars.
pub mod names {
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";

    pub const UID: &str = "UID";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const DTSTART: &str = "DTSTART";
    pub const DTEND: &str = "DTEND";
    pub const SUMMARY: &str = "SUMMARY";
    pub const DESCRIPTION: &str = "DESCRIPTION";
}
