//! The `tripcal` command: ask for an itinerary, print it, save it as `.ics`.

pub mod cli;
pub mod error;
pub mod export;
pub mod zone;
