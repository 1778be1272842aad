//! The command's pipeline: obtain itinerary text, then write it as a calendar.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::DateTime;
use chrono_tz::Tz;
use tripcal_service::clock::Clock;
use tripcal_service::itinerary::{CalendarEmitter, extract_all};
use tripcal_service::planner::{ItineraryGenerator, TripRequest};

use crate::cli::Cli;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Returns the itinerary text: read from `--input`, or written by the
/// generator that `make_generator` builds.
///
/// The generator is only built when it is needed, so reading from a file
/// works without an API key.
///
/// ## Errors
/// Returns an error if the input cannot be read, the request is invalid, or
/// generation fails.
pub async fn obtain_itinerary<G, F>(cli: &Cli, make_generator: F) -> AppResult<String>
where
    G: ItineraryGenerator,
    F: FnOnce() -> AppResult<G>,
{
    if let Some(path) = &cli.input {
        return read_itinerary(path);
    }

    let destination = cli.destination.clone().unwrap_or_default();
    let request = TripRequest::new(destination, cli.days)?;
    let generator = make_generator()?;

    tracing::info!(destination = %request.destination, days = request.days, "Generating itinerary");
    Ok(generator.generate(&request).await?)
}

/// ## Summary
/// Reads itinerary text from a file, or from stdin when the path is `-`.
///
/// ## Errors
/// Returns [`AppError::ReadInput`] on any I/O failure.
pub fn read_itinerary(path: &Path) -> AppResult<String> {
    let read_error = |source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(read_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}

/// ## Summary
/// Segments `text`, emits the calendar and writes it to `output` in one go.
/// Returns the number of events written.
///
/// Without `start` the emitter dates day 1 on its clock's current day, UTC.
///
/// ## Errors
/// Returns an error if emission fails (nothing is written then) or the file
/// cannot be written.
pub fn write_calendar<C: Clock>(
    text: &str,
    start: Option<&DateTime<Tz>>,
    emitter: &CalendarEmitter<C>,
    output: &Path,
) -> AppResult<usize> {
    let periods = extract_all(text);
    if periods.is_empty() {
        tracing::warn!("No Day/Morning/Afternoon/Evening blocks found; writing an empty calendar");
    }

    let bytes = match start {
        Some(start) => emitter.emit_in(&periods, start)?,
        None => emitter.emit(&periods, None)?,
    };

    std::fs::write(output, bytes).map_err(|source| AppError::WriteOutput {
        path: PathBuf::from(output),
        source,
    })?;

    Ok(periods.len())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use clap::Parser;
    use tripcal_service::clock::FixedClock;
    use tripcal_service::error::{ServiceError, ServiceResult};

    use super::*;
    use crate::zone::start_of_day;

    struct Canned;

    impl ItineraryGenerator for Canned {
        async fn generate(&self, request: &TripRequest) -> ServiceResult<String> {
            Ok(format!(
                "Day 1:\nMorning: Arrive in {}\nEvening: Dinner",
                request.destination
            ))
        }
    }

    fn emitter() -> CalendarEmitter<FixedClock> {
        CalendarEmitter::with_clock(FixedClock(
            Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap(),
        ))
    }

    #[tokio::test]
    async fn generates_when_no_input() {
        let cli = Cli::try_parse_from(["tripcal", "-d", "Porto", "-n", "1"]).unwrap();

        let text = obtain_itinerary(&cli, || Ok(Canned)).await.unwrap();

        assert!(text.contains("Arrive in Porto"));
    }

    #[tokio::test]
    async fn input_file_skips_generator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "Day 1:\nMorning: From file").unwrap();
        let cli = Cli::try_parse_from(["tripcal", "--input", path.to_str().unwrap()]).unwrap();

        let text = obtain_itinerary(&cli, || -> AppResult<Canned> {
            panic!("generator must not be built")
        })
        .await
        .unwrap();

        assert_eq!(text, "Day 1:\nMorning: From file");
    }

    #[tokio::test]
    async fn generator_construction_failure_surfaces() {
        let cli = Cli::try_parse_from(["tripcal", "-d", "Porto"]).unwrap();

        let result = obtain_itinerary(&cli, || -> AppResult<Canned> {
            Err(ServiceError::Generation("no key".to_string()).into())
        })
        .await;

        assert!(matches!(result, Err(AppError::ServiceError(ServiceError::Generation(_)))));
    }

    #[test]
    fn missing_input_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();

        let result = read_itinerary(&dir.path().join("does-not-exist.txt"));
        assert!(matches!(result, Err(AppError::ReadInput { .. })));
    }

    #[test_log::test]
    fn writes_calendar_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.ics");
        let start = start_of_day(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(), Tz::UTC).unwrap();

        let events = write_calendar(
            "Day 1:\nMorning: Ribeira\nAfternoon: Livraria Lello\nDay 2:\nEvening: Port tasting",
            Some(&start),
            &emitter(),
            &output,
        )
        .unwrap();

        let ics = std::fs::read_to_string(&output).unwrap();
        assert_eq!(events, 3);
        assert!(ics.contains("DTSTART:20240801T090000Z\r\n"));
        assert!(ics.contains("DTSTART:20240802T180000Z\r\n"));
    }

    #[test]
    fn default_start_uses_clock_day() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("default-start.ics");

        write_calendar("Day 1:\nEvening: Fado", None, &emitter(), &output).unwrap();

        let ics = std::fs::read_to_string(&output).unwrap();
        assert!(ics.contains("DTSTART:20240101T180000Z\r\n"));
    }

    #[test]
    fn failed_emission_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("never-written.ics");

        let result = write_calendar("Day 1:\nMorning: bad\u{7}", None, &emitter(), &output);

        assert!(matches!(result, Err(AppError::ServiceError(_))));
        assert!(!output.exists());
    }
}
