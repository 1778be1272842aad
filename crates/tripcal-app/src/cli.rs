use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use tripcal_core::constants::{DEFAULT_TRIP_DAYS, MAX_TRIP_DAYS, MIN_TRIP_DAYS};

/// Generate a travel itinerary and export it as an iCalendar file.
#[derive(Debug, Parser)]
#[command(name = "tripcal", version, about)]
pub struct Cli {
    /// Where the trip goes.
    #[arg(short, long, required_unless_present = "input")]
    pub destination: Option<String>,

    /// Number of days to plan.
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_TRIP_DAYS,
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_TRIP_DAYS)..=i64::from(MAX_TRIP_DAYS)),
    )]
    pub days: u8,

    /// First day of the trip (YYYY-MM-DD). Defaults to today, UTC.
    #[arg(long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Read the itinerary from a file (`-` for stdin) instead of generating it.
    #[arg(short, long, conflicts_with = "destination")]
    pub input: Option<PathBuf>,

    /// Calendar file to write. Overrides `calendar.output`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
