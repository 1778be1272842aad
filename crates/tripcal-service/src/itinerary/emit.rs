//! Calendar emission: period blocks in, iCalendar bytes out.

use chrono::{DateTime, Datelike, Days, NaiveDateTime, TimeZone, Utc};
use tripcal_core::constants::DEFAULT_PRODUCT_ID;
use tripcal_core::error::CoreError;
use tripcal_rfc::rfc::ical::core::names;
use tripcal_rfc::rfc::ical::{Component, ICalendar, Property, serialize};
use uuid::Uuid;

use super::period::{Period, PeriodBlock};
use crate::clock::{Clock, SystemClock};
use crate::error::{ServiceError, ServiceResult};

/// DATE-TIME values carry a four-digit year.
const MAX_ICALENDAR_YEAR: i32 = 9999;

/// Identification metadata written into every emitted calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    pub product_id: String,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
        }
    }
}

/// Turns period blocks into an iCalendar document, one VEVENT per block.
///
/// Events keep the order of the input blocks; nothing is sorted or merged.
#[derive(Debug, Clone, Default)]
pub struct CalendarEmitter<C = SystemClock> {
    clock: C,
    options: CalendarOptions,
}

impl CalendarEmitter<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> CalendarEmitter<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            options: CalendarOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: CalendarOptions) -> Self {
        self.options = options;
        self
    }

    /// ## Summary
    /// Emits the periods as a serialized calendar, dating day 1 on
    /// `start_date` (the clock's current instant when `None`).
    ///
    /// ## Errors
    /// Returns an error if any event cannot be built or encoded; no partial
    /// document is produced.
    pub fn emit(
        &self,
        periods: &[PeriodBlock],
        start_date: Option<DateTime<Utc>>,
    ) -> ServiceResult<Vec<u8>> {
        let start = start_date.unwrap_or_else(|| self.clock.now());
        self.emit_in(periods, &start)
    }

    /// ## Summary
    /// Emits the periods as a serialized calendar, resolving the period
    /// hours as wall-clock time in `start`'s time zone.
    ///
    /// ## Errors
    /// Returns an error if any event cannot be built or encoded.
    #[tracing::instrument(skip_all, fields(periods = periods.len()))]
    pub fn emit_in<Tz: TimeZone>(
        &self,
        periods: &[PeriodBlock],
        start: &DateTime<Tz>,
    ) -> ServiceResult<Vec<u8>> {
        let calendar = self.build_calendar(periods, start, self.clock.now())?;
        let document = serialize(&calendar)?;

        tracing::debug!(
            events = periods.len(),
            bytes = document.len(),
            "Serialized itinerary calendar"
        );

        Ok(document.into_bytes())
    }

    /// ## Summary
    /// Builds the calendar document without serializing it.
    ///
    /// ## Errors
    /// Returns an error if an event's date or hours cannot be represented in
    /// `start`'s time zone.
    pub fn build_calendar<Tz: TimeZone>(
        &self,
        periods: &[PeriodBlock],
        start: &DateTime<Tz>,
        stamp: DateTime<Utc>,
    ) -> ServiceResult<ICalendar> {
        let mut calendar = ICalendar::new(self.options.product_id.clone());

        for (index, block) in periods.iter().enumerate() {
            let (dtstart, dtend) = event_window(start, block.day, block.period)?;

            let mut event = Component::event();
            event.add_property(Property::text(
                names::UID,
                event_uid(index, block, dtstart),
            ));
            event.add_property(Property::utc_datetime(names::DTSTAMP, stamp));
            event.add_property(Property::utc_datetime(names::DTSTART, dtstart));
            event.add_property(Property::utc_datetime(names::DTEND, dtend));
            event.add_property(Property::text(names::SUMMARY, block.summary()));
            event.add_property(Property::text(
                names::DESCRIPTION,
                block.description.clone(),
            ));
            calendar.add_event(event);
        }

        Ok(calendar)
    }
}

/// ## Summary
/// Computes the start and end instants of `period` on trip day `day`.
///
/// The date is `start`'s local date plus `day - 1` days; the period's hours
/// are applied as wall-clock time in `start`'s zone.
///
/// ## Errors
/// Returns an error for day 0, for dates past year 9999, and for hours
/// skipped by a daylight-saving transition.
pub fn event_window<Tz: TimeZone>(
    start: &DateTime<Tz>,
    day: u32,
    period: Period,
) -> ServiceResult<(DateTime<Utc>, DateTime<Utc>)> {
    let offset = day
        .checked_sub(1)
        .ok_or_else(|| ServiceError::Emit("day numbers start at 1".to_string()))?;
    let date = start
        .date_naive()
        .checked_add_days(Days::new(u64::from(offset)))
        .filter(|date| (0..=MAX_ICALENDAR_YEAR).contains(&date.year()))
        .ok_or_else(|| ServiceError::Emit(format!("day {day} is outside the calendar range")))?;

    let (start_hour, end_hour) = period.hours();
    let at = |hour: u32| -> ServiceResult<DateTime<Utc>> {
        let local: NaiveDateTime = date
            .and_hms_opt(hour, 0, 0)
            .ok_or(CoreError::InvariantViolation("period hours are valid times"))?;
        start
            .timezone()
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| {
                ServiceError::Emit(format!("{local} does not exist in the trip's time zone"))
            })
    };

    let window = (at(start_hour)?, at(end_hour)?);
    if window.1.year() > MAX_ICALENDAR_YEAR {
        return Err(ServiceError::Emit(format!(
            "day {day} ends past year {MAX_ICALENDAR_YEAR} in UTC"
        )));
    }
    if window.1 <= window.0 {
        return Err(CoreError::InvariantViolation("event ends after it starts").into());
    }
    Ok(window)
}

/// Derives a stable UID from the event's position and content.
fn event_uid(index: usize, block: &PeriodBlock, dtstart: DateTime<Utc>) -> String {
    let name = format!(
        "{index}/{}/{}/{}",
        block.day,
        block.period,
        dtstart.timestamp()
    );
    format!(
        "{}@tripcal",
        Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes())
    )
}
