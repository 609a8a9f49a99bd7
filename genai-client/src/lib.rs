//! # genai-client
//!
//! Chat completion client for the GenAI REST endpoint. One POST per call, bearer-authenticated,
//! fixed model; the reply is `choices[0].message.content` with surrounding whitespace trimmed.
//! No retry and no streaming; errors keep the raw response body for logging.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Production chat endpoint; override with [`GenAiClient::with_api_url`] (tests point this at a
/// mock server).
pub const DEFAULT_API_URL: &str = "https://genai.hkbu.edu.hk/general/rest";

/// Model identifier sent with every request.
pub const CHAT_MODEL: &str = "gpt-4-o";

/// Default system instruction for single-turn relayed conversations.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Error, Debug)]
pub enum GenAiError {
    /// Non-200 response; carries the raw body for server-side logs.
    #[error("GenAI API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, timeout, or other transport failure.
    #[error("GenAI transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response arrived but did not decode into a completion.
    #[error("GenAI response decode error: {0}")]
    Decode(String),
}

/// A single chat message, one-to-one with one element of the `messages` array.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Clone)]
pub struct GenAiClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl GenAiClient {
    /// Creates a client against the production endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(api_key, DEFAULT_API_URL.to_string())
    }

    /// Creates a client against a custom endpoint URL.
    pub fn with_api_url(api_key: String, api_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }

    /// Sends the messages as one completion request and returns the trimmed reply text.
    ///
    /// A single awaited call; no timeout is configured beyond the transport defaults.
    pub async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, GenAiError> {
        let request = ChatCompletionRequest {
            model: CHAT_MODEL,
            messages: &messages,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "GenAI API error");
            return Err(GenAiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GenAiError::Decode(format!("{}: {}", e, body)))?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenAiError::Decode("no choices in response".to_string()))?;

        Ok(choice.message.content.trim().to_string())
    }
}
