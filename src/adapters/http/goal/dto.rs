//! Request and response types for goal endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::goal::Goal;

/// Body of `POST /api/goals`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoalRequest {
    pub text: String,
}

/// A stored goal as returned by every goal endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalResponse {
    pub id: String,
    pub text: String,
    pub tasks: Vec<String>,
    pub complexity: Option<i32>,
    pub created_at: String,
}

impl From<&Goal> for GoalResponse {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id().to_string(),
            text: goal.text().to_string(),
            tasks: goal.tasks().to_vec(),
            complexity: goal.complexity(),
            created_at: goal.created_at().as_datetime().to_rfc3339(),
        }
    }
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self::from(&goal)
    }
}

/// Liveness check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
