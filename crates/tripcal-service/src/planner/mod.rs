//! The itinerary writer: a chat-completions service asked to follow the
//! `Day <n>:` / `Morning:` / `Afternoon:` / `Evening:` convention.
//!
//! Whatever goes wrong here surfaces as [`ServiceError::Generation`]; the
//! segmenter only ever sees text that was actually returned.

mod client;
mod prompt;
mod types;

use tripcal_core::constants::{MAX_TRIP_DAYS, MIN_TRIP_DAYS};

pub use client::ChatCompletionsClient;
pub use prompt::{SYSTEM_PROMPT, user_prompt};
pub use types::{ChatMessage, ChatRequest, parse_completion};

use crate::error::{ServiceError, ServiceResult};

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub destination: String,
    pub days: u8,
}

impl TripRequest {
    /// ## Summary
    /// Validates and builds a trip request.
    ///
    /// ## Errors
    /// Returns [`ServiceError::InvalidRequest`] for a blank destination or a
    /// day count outside 1..=15.
    pub fn new(destination: impl Into<String>, days: u8) -> ServiceResult<Self> {
        let destination = destination.into().trim().to_string();
        if destination.is_empty() {
            return Err(ServiceError::InvalidRequest(
                "destination must not be empty".to_string(),
            ));
        }
        if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&days) {
            return Err(ServiceError::InvalidRequest(format!(
                "days must be between {MIN_TRIP_DAYS} and {MAX_TRIP_DAYS}, got {days}"
            )));
        }
        Ok(Self { destination, days })
    }
}

/// Produces itinerary text for a trip.
pub trait ItineraryGenerator {
    /// ## Summary
    /// Writes a day-by-day itinerary for the request.
    ///
    /// ## Errors
    /// Any upstream failure (network, authentication, quota, malformed
    /// response) is returned as [`ServiceError::Generation`].
    fn generate(&self, request: &TripRequest) -> impl Future<Output = ServiceResult<String>> + Send;
}
