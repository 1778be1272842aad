//! The three fixed time-of-day periods of an itinerary day.

use std::fmt;

/// A named block of an itinerary day.
///
/// Declaration order is the order periods are emitted within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    /// All periods in emission order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    /// Returns the period name as authored in itinerary text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }

    /// Returns the label that introduces the period: its name and a colon.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning:",
            Self::Afternoon => "Afternoon:",
            Self::Evening => "Evening:",
        }
    }

    /// Returns the local start and end hour of the period.
    #[must_use]
    pub const fn hours(self) -> (u32, u32) {
        match self {
            Self::Morning => (9, 12),
            Self::Afternoon => (14, 17),
            Self::Evening => (18, 21),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A period extracted from one itinerary day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodBlock {
    /// Day number as written after `Day` (1-based).
    pub day: u32,
    pub period: Period,
    /// Text following the label, with surrounding whitespace removed.
    pub description: String,
}

impl PeriodBlock {
    #[must_use]
    pub fn new(day: u32, period: Period, description: impl Into<String>) -> Self {
        Self {
            day,
            period,
            description: description.into(),
        }
    }

    /// Returns the event title, e.g. `Day 2 - Evening`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Day {} - {}", self.day, self.period)
    }
}
