use std::path::PathBuf;

use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_GENERATOR_BASE_URL, DEFAULT_GENERATOR_MAX_TOKENS,
    DEFAULT_GENERATOR_MODEL, DEFAULT_GENERATOR_TEMPERATURE, DEFAULT_GENERATOR_TIMEOUT_SECS,
    DEFAULT_OUTPUT_FILE, DEFAULT_PRODUCT_ID, ENV_PREFIX, GROQ_API_KEY_ENV,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

/// Connection settings for the chat-completions service that writes itineraries.
#[derive(Clone, Deserialize)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub product_id: String,
    /// IANA zone name the trip start date is interpreted in. `None` means UTC.
    pub timezone: Option<String>,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with the built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be registered.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let mut builder = Config::builder()
            .set_default("generator.base_url", DEFAULT_GENERATOR_BASE_URL)?
            .set_default("generator.model", DEFAULT_GENERATOR_MODEL)?
            .set_default(
                "generator.temperature",
                f64::from(DEFAULT_GENERATOR_TEMPERATURE),
            )?
            .set_default("generator.max_tokens", i64::from(DEFAULT_GENERATOR_MAX_TOKENS))?
            .set_default(
                "generator.timeout_secs",
                i64::from(DEFAULT_GENERATOR_TIMEOUT_SECS),
            )?
            .set_default("calendar.product_id", DEFAULT_PRODUCT_ID)?
            .set_default("calendar.output", DEFAULT_OUTPUT_FILE)?
            .set_default("logging.level", "info")?;

        if let Ok(key) = std::env::var(GROQ_API_KEY_ENV)
            && !key.is_empty()
        {
            builder = builder.set_default("generator.api_key", key)?;
        }

        Ok(builder)
    }

    /// ## Summary
    /// Loads configuration from the defaults, an optional `tripcal.toml` and
    /// `TRIPCAL__*` environment variables, in increasing precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
