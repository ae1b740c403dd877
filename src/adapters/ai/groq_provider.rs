//! Groq Provider - Implementation of AIProvider for Groq's chat API.
//!
//! Groq serves an OpenAI-compatible `chat/completions` endpoint, so requests and
//! responses use the OpenAI wire shapes.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GroqConfig::new(api_key)
//!     .with_model("llama3-8b-8192")
//!     .with_base_url("https://api.groq.com/openai/v1");
//!
//! let provider = GroqProvider::new(config)?;
//! ```
//!
//! The provider makes exactly one attempt per call. Callers decide what to do
//! with a failure.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Default model when none is configured.
pub const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";

/// Default API root.
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Configuration for the Groq provider.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GroqConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_GROQ_MODEL.to_string(),
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Groq API provider implementation.
pub struct GroqProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqProvider {
    /// Creates a new Groq provider with the given configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the HTTP client cannot be built
    pub fn new(config: GroqConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn to_wire_request(&self, request: &CompletionRequest) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|msg| ChatMessage {
                    role: msg.role.as_str().to_string(),
                    content: Some(msg.content.clone()),
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            top_p: request.top_p,
            stream: false,
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let wire_request = self.to_wire_request(request);
        tracing::debug!(
            model = %self.config.model,
            messages = wire_request.messages.len(),
            "Sending chat completion request"
        );

        self.client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Groq returned non-success status");
            return Err(status_error(status.as_u16(), error_body));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        into_completion(chat_response)
    }
}

#[async_trait]
impl AIProvider for GroqProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("groq", &self.config.model, 8192)
    }
}

/// Maps a non-success HTTP status to an [`AIError`].
fn status_error(status: u16, error_body: String) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(parse_retry_after(&error_body)),
        400 | 404 | 422 => AIError::InvalidRequest(error_body),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

/// Extracts seconds from a "try again in Ns" hint, defaulting to 30.
fn parse_retry_after(error_body: &str) -> u32 {
    let message = serde_json::from_str::<serde_json::Value>(error_body)
        .ok()
        .and_then(|parsed| {
            parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    message
        .as_deref()
        .and_then(|s| s.find("try again in ").map(|idx| &s[idx + 13..]))
        .and_then(|rest| {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse::<u32>().ok()
        })
        .unwrap_or(30)
}

fn into_completion(chat_response: ChatResponse) -> Result<CompletionResponse, AIError> {
    let choice = chat_response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AIError::parse("No choices in response"))?;

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("length") => FinishReason::Length,
        Some("content_filter") => {
            return Err(AIError::content_filtered(
                "Response blocked by provider content filter",
            ))
        }
        _ => FinishReason::Stop,
    };

    let content = choice
        .message
        .content
        .ok_or_else(|| AIError::parse("Choice has no message content"))?;

    let usage = chat_response
        .usage
        .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content,
        usage,
        model: chat_response.model,
        finish_reason,
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
