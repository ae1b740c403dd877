//! HTTP handlers for goal endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    CreateGoalCommand, CreateGoalHandler, GetGoalHandler, GetGoalQuery, GoalDecomposer,
    ListGoalsHandler,
};
use crate::domain::foundation::GoalId;
use crate::domain::goal::GoalError;
use crate::ports::GoalRepository;

use super::dto::{CreateGoalRequest, ErrorResponse, GoalResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for goal routes.
#[derive(Clone)]
pub struct GoalAppState {
    pub goal_repository: Arc<dyn GoalRepository>,
    pub decomposer: Arc<GoalDecomposer>,
}

impl GoalAppState {
    pub fn new(goal_repository: Arc<dyn GoalRepository>, decomposer: Arc<GoalDecomposer>) -> Self {
        Self {
            goal_repository,
            decomposer,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn create_goal_handler(&self) -> CreateGoalHandler {
        CreateGoalHandler::new(self.goal_repository.clone(), self.decomposer.clone())
    }

    pub fn get_goal_handler(&self) -> GetGoalHandler {
        GetGoalHandler::new(self.goal_repository.clone())
    }

    pub fn list_goals_handler(&self) -> ListGoalsHandler {
        ListGoalsHandler::new(self.goal_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/goals - Decompose and store a goal
pub async fn create_goal(
    State(state): State<GoalAppState>,
    Json(req): Json<CreateGoalRequest>,
) -> Response {
    let cmd = CreateGoalCommand { text: req.text };

    match state.create_goal_handler().handle(cmd).await {
        Ok(goal) => (StatusCode::CREATED, Json(GoalResponse::from(goal))).into_response(),
        Err(e) => handle_goal_error(e),
    }
}

/// GET /api/goals/:id - Get a stored goal
pub async fn get_goal(State(state): State<GoalAppState>, Path(goal_id): Path<String>) -> Response {
    let goal_id = match goal_id.parse::<GoalId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid goal ID")),
            )
                .into_response()
        }
    };

    match state.get_goal_handler().handle(GetGoalQuery { goal_id }).await {
        Ok(goal) => (StatusCode::OK, Json(GoalResponse::from(goal))).into_response(),
        Err(e) => handle_goal_error(e),
    }
}

/// GET /api/goals - List the most recent goals
pub async fn list_goals(State(state): State<GoalAppState>) -> Response {
    match state.list_goals_handler().handle().await {
        Ok(goals) => {
            let response: Vec<GoalResponse> = goals.iter().map(GoalResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_goal_error(e),
    }
}

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_goal_error(error: GoalError) -> Response {
    match error {
        GoalError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Goal", &id.to_string())),
        )
            .into_response(),
        GoalError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&field, message)),
        )
            .into_response(),
        GoalError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Goal request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_error_not_found_maps_to_404() {
        let response = handle_goal_error(GoalError::NotFound(GoalId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn goal_error_validation_failed_maps_to_400() {
        let response = handle_goal_error(GoalError::validation("text", "Goal text cannot be empty"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn goal_error_infrastructure_maps_to_500() {
        let response = handle_goal_error(GoalError::infrastructure("connection reset"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
