//! End-to-end tests: itinerary text through segmenter and emitter.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Europe::Paris;
use tripcal_service::clock::FixedClock;
use tripcal_service::error::{ServiceError, ServiceResult};
use tripcal_service::itinerary::{CalendarEmitter, Period, PeriodBlock, extract_all};
use tripcal_service::planner::{ItineraryGenerator, TripRequest};

fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn fixed_emitter() -> CalendarEmitter<FixedClock> {
    CalendarEmitter::with_clock(FixedClock(
        Utc.with_ymd_and_hms(2023, 12, 31, 10, 30, 0).unwrap(),
    ))
}

fn emit_text(text: &str, start: DateTime<Utc>) -> String {
    let periods = extract_all(text);
    let bytes = fixed_emitter().emit(&periods, Some(start)).unwrap();
    String::from_utf8(bytes).unwrap()
}

fn event_blocks(ics: &str) -> Vec<&str> {
    ics.split("BEGIN:VEVENT\r\n")
        .skip(1)
        .map(|rest| rest.split("END:VEVENT\r\n").next().unwrap())
        .collect()
}

#[test_log::test]
fn single_day_with_all_periods() {
    let ics = emit_text(
        "Day 1:\nMorning: Museum\nAfternoon: Park\nEvening: Dinner",
        utc(2024, 1, 1),
    );

    let events = event_blocks(&ics);
    assert_eq!(events.len(), 3);

    assert!(events[0].contains("DTSTART:20240101T090000Z\r\n"));
    assert!(events[0].contains("DTEND:20240101T120000Z\r\n"));
    assert!(events[0].contains("SUMMARY:Day 1 - Morning\r\n"));
    assert!(events[0].contains("DESCRIPTION:Museum\r\n"));

    assert!(events[1].contains("DTSTART:20240101T140000Z\r\n"));
    assert!(events[1].contains("DTEND:20240101T170000Z\r\n"));
    assert!(events[1].contains("SUMMARY:Day 1 - Afternoon\r\n"));

    assert!(events[2].contains("DTSTART:20240101T180000Z\r\n"));
    assert!(events[2].contains("DTEND:20240101T210000Z\r\n"));
    assert!(events[2].contains("DESCRIPTION:Dinner\r\n"));

    for event in events {
        assert!(event.contains("DTSTAMP:20231231T103000Z\r\n"));
        assert!(event.starts_with("UID:"));
    }
}

#[test]
fn lone_evening_on_day_two() {
    let ics = emit_text("Day 2:\nEvening: Show", utc(2024, 3, 1));

    let events = event_blocks(&ics);
    assert_eq!(events.len(), 1);
    assert!(events[0].contains("DTSTART:20240302T180000Z\r\n"));
    assert!(events[0].contains("DTEND:20240302T210000Z\r\n"));
    assert!(events[0].contains("SUMMARY:Day 2 - Evening\r\n"));
    assert!(events[0].contains("DESCRIPTION:Show\r\n"));
}

#[test]
fn out_of_order_labels_emit_in_fixed_order() {
    let ics = emit_text("Day 1:\nEvening: X\nMorning: Y", utc(2024, 1, 1));

    let events = event_blocks(&ics);
    assert_eq!(events.len(), 2);
    assert!(events[0].contains("SUMMARY:Day 1 - Morning\r\n"));
    assert!(events[0].contains("DESCRIPTION:Y\r\n"));
    assert!(events[1].contains("SUMMARY:Day 1 - Evening\r\n"));
    assert!(events[1].contains("DESCRIPTION:X\r\n"));
}

#[test]
fn empty_text_gives_empty_calendar() {
    let ics = emit_text("", utc(2024, 1, 1));

    assert_eq!(
        ics,
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//tripcal//Travel Itinerary//EN\r\n\
         END:VCALENDAR\r\n"
    );
}

#[test]
fn malformed_day_marker_gives_empty_calendar() {
    let ics = emit_text("Day one:\nMorning: X", utc(2024, 1, 1));
    assert!(event_blocks(&ics).is_empty());
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
}

#[test]
fn repeated_emission_is_byte_identical() {
    let text = "Day 1:\nMorning: Alfama, tram 28; pastéis\nDay 2:\nAfternoon: Belém\nEvening: Fado";
    let periods = extract_all(text);
    let emitter = fixed_emitter();

    let first = emitter.emit(&periods, Some(utc(2024, 5, 1))).unwrap();
    let second = emitter.emit(&periods, Some(utc(2024, 5, 1))).unwrap();

    assert_eq!(first, second);
}

#[test]
fn descriptions_are_escaped_and_folded() {
    let long = "Walk along the river, stop at the market; then climb to the castle for the view. ".repeat(3);
    let ics = emit_text(&format!("Day 1:\nMorning: {long}"), utc(2024, 1, 1));

    for line in ics.split("\r\n") {
        assert!(line.len() <= 75, "line too long: {line:?}");
    }
    let unfolded = ics.replace("\r\n ", "");
    assert!(unfolded.contains("DESCRIPTION:Walk along the river\\, stop at the market\\; then"));
}

#[test]
fn multiline_description_uses_escaped_newlines() {
    let ics = emit_text("Day 1:\nMorning:\n- Louvre\n- Tuileries\nAfternoon: Seine", utc(2024, 1, 1));
    assert!(ics.contains("DESCRIPTION:- Louvre\\n- Tuileries\r\n"));
}

#[test]
fn unencodable_description_aborts_emission() {
    let periods = vec![
        PeriodBlock::new(1, Period::Morning, "fine"),
        PeriodBlock::new(1, Period::Evening, "broken\u{1b}[0m"),
    ];

    let result = fixed_emitter().emit(&periods, Some(utc(2024, 1, 1)));

    assert!(matches!(result, Err(ServiceError::RfcError(_))));
}

#[test]
fn named_zone_start_resolves_local_hours() {
    let periods = extract_all("Day 1:\nMorning: Croissant\nDay 2:\nEvening: Opera");
    let start = Paris.with_ymd_and_hms(2024, 7, 14, 0, 0, 0).unwrap();

    let bytes = fixed_emitter().emit_in(&periods, &start).unwrap();
    let ics = String::from_utf8(bytes).unwrap();

    // CEST is UTC+2.
    assert!(ics.contains("DTSTART:20240714T070000Z\r\n"));
    assert!(ics.contains("DTSTART:20240715T160000Z\r\n"));
}

#[test]
fn periods_across_daylight_saving_change_keep_local_hours() {
    // Europe/Paris leaves summer time on 2024-10-27.
    let periods = extract_all("Day 1:\nMorning: A\nDay 2:\nMorning: B");
    let start = Paris.with_ymd_and_hms(2024, 10, 26, 0, 0, 0).unwrap();

    let ics = String::from_utf8(fixed_emitter().emit_in(&periods, &start).unwrap()).unwrap();

    assert!(ics.contains("DTSTART:20241026T070000Z\r\n"));
    assert!(ics.contains("DTSTART:20241027T080000Z\r\n"));
}

struct CannedGenerator(&'static str);

impl ItineraryGenerator for CannedGenerator {
    async fn generate(&self, _request: &TripRequest) -> ServiceResult<String> {
        Ok(self.0.to_string())
    }
}

struct FailingGenerator;

impl ItineraryGenerator for FailingGenerator {
    async fn generate(&self, _request: &TripRequest) -> ServiceResult<String> {
        Err(ServiceError::Generation("API error: 429 - Rate limit reached".to_string()))
    }
}

async fn plan<G: ItineraryGenerator>(generator: &G) -> ServiceResult<Vec<u8>> {
    let request = TripRequest::new("Kyoto", 2)?;
    let text = generator.generate(&request).await?;
    fixed_emitter().emit(&extract_all(&text), Some(utc(2024, 4, 1)))
}

#[tokio::test]
async fn generated_text_flows_into_calendar() {
    let generator = CannedGenerator(
        "Here is your plan!\n\n**Day 1:**\nMorning: Fushimi Inari\nAfternoon: Gion\nEvening: Pontocho\n\n\
         **Day 2:**\nMorning: Arashiyama\nAfternoon: Kinkaku-ji\nEvening: Kaiseki dinner\n\nEnjoy!",
    );

    let ics = String::from_utf8(plan(&generator).await.unwrap()).unwrap();

    assert_eq!(event_blocks(&ics).len(), 6);
    assert!(ics.contains("SUMMARY:Day 2 - Evening\r\n"));
    assert!(ics.contains("DTSTART:20240402T180000Z\r\n"));
}

#[tokio::test]
async fn generation_failure_propagates_unchanged() {
    let result = plan(&FailingGenerator).await;

    match result {
        Err(ServiceError::Generation(message)) => {
            assert_eq!(message, "API error: 429 - Rate limit reached");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
