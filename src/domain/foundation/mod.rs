//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the vocabulary
//! of the goal domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::GoalId;
pub use timestamp::Timestamp;
