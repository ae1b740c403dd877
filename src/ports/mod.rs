//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Chat-completion text generation
//! - `GoalRepository` - Goal persistence

mod ai_provider;
mod goal_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use goal_repository::GoalRepository;
