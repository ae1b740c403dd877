//! Goal-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, GoalId};

/// Goal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    /// Goal was not found.
    NotFound(GoalId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl GoalError {
    pub fn not_found(id: GoalId) -> Self {
        GoalError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        GoalError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        GoalError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            GoalError::NotFound(_) => ErrorCode::GoalNotFound,
            GoalError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            GoalError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            GoalError::NotFound(id) => format!("Goal not found: {}", id),
            GoalError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            GoalError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for GoalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for GoalError {}

impl From<DomainError> for GoalError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => GoalError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => GoalError::Infrastructure(err.to_string()),
        }
    }
}
