//! RFC 5545 building blocks for tripcal: an iCalendar component model and a
//! deterministic serializer.

pub mod error;
pub mod rfc;
