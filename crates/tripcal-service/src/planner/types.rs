//! Wire types of the OpenAI-compatible chat-completions API.

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// ## Summary
/// Returns the text of the first choice in a successful response body.
///
/// ## Errors
/// Returns [`ServiceError::Generation`] if the body is not a completion or
/// the first choice carries no text.
pub fn parse_completion(body: &str) -> ServiceResult<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ServiceError::Generation(format!("malformed completion response: {e}")))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| ServiceError::Generation("completion contained no text".to_string()))
}

/// Extracts the provider's error message from a failed response body.
pub(super) fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}
