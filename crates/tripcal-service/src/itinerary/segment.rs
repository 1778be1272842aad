//! Two-stage itinerary tokenizer.
//!
//! Stage one splits the text on `Day <n>:` markers. Stage two runs one
//! bounded scan per period name inside each day; every scan stops at the
//! next label of *any* period, so a description never absorbs a rival
//! period's text.
//!
//! Malformed units are skipped, never reported as errors: free text from a
//! language model is expected to deviate from the convention now and then.

use super::period::{Period, PeriodBlock};

const DAY_KEYWORD: &str = "Day ";

/// The raw content of one itinerary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBlock<'a> {
    pub number: u32,
    /// Everything between this day's marker and the next marker (or the end
    /// of the text), untrimmed.
    pub content: &'a str,
}

/// A `Day <digits>:` marker located in the text.
#[derive(Debug)]
struct DayMarker {
    start: usize,
    content_start: usize,
    /// `None` when the digits do not form a positive `u32`.
    number: Option<u32>,
}

/// A period label located in a day's content.
#[derive(Debug, Clone, Copy)]
struct LabelSpan {
    start: usize,
    end: usize,
}

/// Splits itinerary text into day blocks, in the order they appear.
///
/// Text before the first marker is ignored. Repeated day numbers produce
/// repeated blocks.
#[must_use]
pub fn segment(text: &str) -> Vec<DayBlock<'_>> {
    let markers = find_day_markers(text);
    let mut days = Vec::with_capacity(markers.len());

    for (i, marker) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
        let content = &text[marker.content_start..end];

        match marker.number {
            Some(number) => days.push(DayBlock { number, content }),
            None => tracing::debug!(
                marker = &text[marker.start..marker.content_start],
                "Skipping day marker without a usable day number"
            ),
        }
    }

    tracing::trace!(days = days.len(), "Segmented itinerary");
    days
}

/// Extracts the periods of one day in fixed Morning, Afternoon, Evening order.
///
/// A period whose label is missing yields nothing; only the first occurrence
/// of each label counts.
#[must_use]
pub fn extract_periods(day: &DayBlock<'_>) -> Vec<PeriodBlock> {
    Period::ALL
        .into_iter()
        .filter_map(|period| {
            let Some(label) = find_label(day.content, period, 0) else {
                tracing::trace!(day = day.number, %period, "Period label not found");
                return None;
            };
            let end = next_label_start(day.content, label.end).unwrap_or(day.content.len());
            Some(PeriodBlock::new(
                day.number,
                period,
                day.content[label.end..end].trim(),
            ))
        })
        .collect()
}

/// Runs both stages and flattens the result in day order.
#[must_use]
#[tracing::instrument(skip_all, fields(bytes = text.len()))]
pub fn extract_all(text: &str) -> Vec<PeriodBlock> {
    let periods: Vec<PeriodBlock> = segment(text).iter().flat_map(extract_periods).collect();
    tracing::debug!(periods = periods.len(), "Extracted itinerary periods");
    periods
}

fn find_day_markers(text: &str) -> Vec<DayMarker> {
    let mut markers = Vec::new();

    for (start, _) in text.match_indices(DAY_KEYWORD) {
        if !starts_unit(text, start) {
            continue;
        }

        let digits_start = start + DAY_KEYWORD.len();
        let rest = &text.as_bytes()[digits_start..];
        let digit_count = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        if digit_count == 0 || rest.get(digit_count) != Some(&b':') {
            continue;
        }

        let digits = &text[digits_start..digits_start + digit_count];
        markers.push(DayMarker {
            start,
            content_start: digits_start + digit_count + 1,
            number: digits.parse::<u32>().ok().filter(|&n| n > 0),
        });
    }

    markers
}

/// Finds the first label of `period` at or after byte offset `from`.
fn find_label(content: &str, period: Period, from: usize) -> Option<LabelSpan> {
    let label = period.label();
    content[from..]
        .match_indices(label)
        .map(|(offset, _)| from + offset)
        .find(|&start| starts_unit(content, start))
        .map(|start| LabelSpan {
            start,
            end: start + label.len(),
        })
}

/// Returns where the nearest label of any period begins after `from`.
fn next_label_start(content: &str, from: usize) -> Option<usize> {
    Period::ALL
        .into_iter()
        .filter_map(|period| find_label(content, period, from))
        .map(|label| label.start)
        .min()
}

/// Whether a keyword at `pos` begins a unit rather than continuing a word.
fn starts_unit(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}
