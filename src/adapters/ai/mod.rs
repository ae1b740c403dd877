//! AI provider adapters.
//!
//! - `GroqProvider` - OpenAI-compatible chat completions against Groq
//! - `MockAIProvider` - Scripted responses for tests

mod groq_provider;
mod mock_provider;

pub use groq_provider::{GroqConfig, GroqProvider, DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
