//! iCalendar RFC 5545 implementation.
//!
//! - `core`: Type definitions for iCalendar structures
//! - `build`: Serializers for iCalendar content
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tripcal_rfc::rfc::ical::{Component, ICalendar, Property, serialize};
//!
//! let mut ical = ICalendar::new("-//My App//EN");
//! let mut event = Component::event();
//! event.add_property(Property::text("UID", "my-event-1"));
//! event.add_property(Property::text("SUMMARY", "Walking tour"));
//! event.add_property(Property::utc_datetime(
//!     "DTSTART",
//!     Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
//! ));
//! ical.add_event(event);
//!
//! let output = serialize(&ical).unwrap();
//! assert!(output.contains("DTSTART:20240101T090000Z\r\n"));
//! ```

pub mod build;
pub mod core;

pub use self::build::serialize;
pub use self::core::{Component, ComponentKind, ICalendar, Property, Value};
