/// Application name used in product identifiers and log messages.
pub const APP_NAME: &str = "tripcal";

/// Default `PRODID` of emitted calendars.
pub const DEFAULT_PRODUCT_ID: &str = const_str::concat!("-//", APP_NAME, "//Travel Itinerary//EN");

/// iCalendar `VERSION` property value.
pub const ICALENDAR_VERSION: &str = "2.0";

/// Media type of the emitted calendar file.
pub const ICALENDAR_MEDIA_TYPE: &str = "text/calendar";

/// Default file name of the emitted calendar.
pub const DEFAULT_OUTPUT_FILE: &str = "travel_itinerary.ics";

/// Inclusive bounds on the number of itinerary days a user may request.
pub const MIN_TRIP_DAYS: u8 = 1;
pub const MAX_TRIP_DAYS: u8 = 15;
pub const DEFAULT_TRIP_DAYS: u8 = 5;

/// Chat-completions defaults for the itinerary generator.
pub const DEFAULT_GENERATOR_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GENERATOR_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_GENERATOR_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_GENERATOR_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_GENERATOR_TIMEOUT_SECS: u32 = 60;

/// Environment variable that carries the generator API key when none is configured.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Prefix of environment variables read by the configuration loader.
pub const ENV_PREFIX: &str = "TRIPCAL";

/// Name (without extension) of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "tripcal";
