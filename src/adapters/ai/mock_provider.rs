//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured responses
//! - Error injection for fallback testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response(r#"{"tasks":["a","b","c","d","e"],"complexity":7}"#);
//!
//! let response = provider.complete(request).await?;
//! assert!(response.content.contains("complexity"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Mock AI provider for testing.
///
/// Responses are consumed in order; once the queue is empty a fixed default
/// reply is returned.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success {
        content: String,
        finish_reason: FinishReason,
    },
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate a malformed response envelope.
    Parse { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Parse { message } => AIError::parse(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1", 8192),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Success {
            content: content.into(),
            finish_reason: FinishReason::Stop,
        })
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockResponse::Error(error))
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or_default()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn push(self, response: MockResponse) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
        self
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
                finish_reason: FinishReason::Stop,
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request);
        }

        match self.next_response() {
            MockResponse::Success {
                content,
                finish_reason,
            } => Ok(CompletionResponse {
                content,
                usage: TokenUsage::new(10, 20),
                model: self.info.model.clone(),
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MessageRole;

    fn request() -> CompletionRequest {
        CompletionRequest::new().with_message(MessageRole::User, "Hello")
    }

    #[tokio::test]
    async fn returns_configured_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("first")
            .with_response("second");

        assert_eq!(provider.complete(request()).await.unwrap().content, "first");
        assert_eq!(provider.complete(request()).await.unwrap().content, "second");
        assert_eq!(provider.complete(request()).await.unwrap().content, "Mock response");
    }

    #[tokio::test]
    async fn returns_configured_errors() {
        let provider = MockAIProvider::new().with_error(MockError::Network {
            message: "connection reset".to_string(),
        });

        let err = provider.complete(request()).await.unwrap_err();
        assert!(matches!(err, AIError::Network(_)));
    }

    #[tokio::test]
    async fn records_calls() {
        let provider = MockAIProvider::new();
        provider.complete(request()).await.unwrap();
        provider.complete(request()).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.get_calls()[0].messages[0].content, "Hello");
    }

    #[tokio::test]
    async fn clones_share_state() {
        let provider = MockAIProvider::new().with_response("shared");
        let clone = provider.clone();

        assert_eq!(clone.complete(request()).await.unwrap().content, "shared");
        assert_eq!(provider.call_count(), 1);
    }
}
