//! Itinerary processing for tripcal.
//!
//! - [`itinerary`]: splits free-text itineraries into day and period blocks
//!   and emits them as an iCalendar document
//! - [`planner`]: asks a chat-completions service to write the itinerary
//! - [`clock`]: the source of "now" used by the emitter

pub mod clock;
pub mod error;
pub mod itinerary;
pub mod planner;
