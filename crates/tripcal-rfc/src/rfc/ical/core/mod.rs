//! iCalendar core models (RFC 5545).
//!
//! Only what an itinerary export needs: a VCALENDAR holding VEVENTs whose
//! properties are TEXT or UTC DATE-TIME values.

mod component;
mod property;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use property::{Property, names};
pub use value::{Value, format_utc};
