use std::time::Duration;

use tracing::{debug, instrument};
use tripcal_core::config::GeneratorConfig;
use tripcal_core::error::CoreError;

use super::prompt::{SYSTEM_PROMPT, user_prompt};
use super::types::{ChatMessage, ChatRequest, api_error_message, parse_completion};
use super::{ItineraryGenerator, TripRequest};
use crate::error::{ServiceError, ServiceResult};

/// Client for an OpenAI-compatible `/chat/completions` endpoint (Groq by default).
pub struct ChatCompletionsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ChatCompletionsClient {
    /// ## Summary
    /// Creates a client from the generator configuration.
    ///
    /// ## Errors
    /// Returns an error if no API key is configured or the HTTP client cannot
    /// be built.
    pub fn from_config(config: &GeneratorConfig) -> ServiceResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                CoreError::InvalidConfiguration(
                    "generator.api_key is not set (or export GROQ_API_KEY)".to_string(),
                )
            })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::Generation(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends one completion request and returns the assistant's text.
    #[instrument(skip(self, request), fields(model = %self.model, days = request.days))]
    async fn complete(&self, request: &TripRequest) -> ServiceResult<String> {
        let prompt = user_prompt(request);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(destination = %request.destination, "Requesting itinerary");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Generation(format!("request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Generation(format!("cannot read response: {e}")))?;

        if !status.is_success() {
            let message = api_error_message(&text).unwrap_or_else(|| "Unknown error".to_string());
            return Err(ServiceError::Generation(format!(
                "API error: {} - {message}",
                status.as_u16()
            )));
        }

        debug!(bytes = text.len(), "Received itinerary completion");

        parse_completion(&text)
    }
}

impl ItineraryGenerator for ChatCompletionsClient {
    async fn generate(&self, request: &TripRequest) -> ServiceResult<String> {
        self.complete(request).await
    }
}
