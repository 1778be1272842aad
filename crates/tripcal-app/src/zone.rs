//! Resolves the trip start instant from configuration and command line.

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::error::{AppError, AppResult};

/// ## Summary
/// Parses the configured IANA zone name; `None` means UTC.
///
/// ## Errors
/// Returns [`AppError::UnknownTimeZone`] if the name is not in the tz database.
pub fn resolve_zone(name: Option<&str>) -> AppResult<Tz> {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        None => Ok(Tz::UTC),
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_err| AppError::UnknownTimeZone(name.to_string())),
    }
}

/// ## Summary
/// Returns local midnight of `date` in `zone`.
///
/// ## Errors
/// Returns [`AppError::NonexistentLocalTime`] when midnight is skipped by a
/// daylight-saving transition in that zone.
pub fn start_of_day(date: NaiveDate, zone: Tz) -> AppResult<DateTime<Tz>> {
    zone.from_local_datetime(&date.and_time(chrono::NaiveTime::MIN))
        .earliest()
        .ok_or_else(|| AppError::NonexistentLocalTime(date.to_string(), zone.name().to_string()))
}
