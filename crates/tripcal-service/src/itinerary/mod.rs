//! Itinerary text to calendar.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tripcal_service::clock::FixedClock;
//! use tripcal_service::itinerary::{CalendarEmitter, extract_all};
//!
//! let periods = extract_all("Day 1:\nMorning: Museum\nEvening: Dinner");
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let ics = CalendarEmitter::with_clock(FixedClock(now))
//!     .emit(&periods, Some(now))
//!     .unwrap();
//! assert!(String::from_utf8(ics).unwrap().contains("SUMMARY:Day 1 - Evening"));
//! ```

mod emit;
mod period;
mod segment;

pub use emit::{CalendarEmitter, CalendarOptions, event_window};
pub use period::{Period, PeriodBlock};
pub use segment::{DayBlock, extract_all, extract_periods, segment};
