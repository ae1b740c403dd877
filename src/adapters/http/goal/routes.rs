//! Axum router configuration for goal endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_goal, get_goal, health, list_goals, GoalAppState};

/// Create the goal API router.
///
/// # Routes
/// - `POST /` - Decompose and store a goal
/// - `GET /` - List the most recent goals
/// - `GET /:id` - Get a goal by ID
pub fn goal_routes() -> Router<GoalAppState> {
    Router::new()
        .route("/", post(create_goal).get(list_goals))
        .route("/:id", get(get_goal))
}

/// Create the complete goal service router.
///
/// Mounts the goal routes at `/api/goals` and the liveness check at `/health`.
///
/// # Example
///
/// ```ignore
/// let state = GoalAppState::new(repository, decomposer);
/// let app = goal_router().with_state(state);
/// ```
pub fn goal_router() -> Router<GoalAppState> {
    Router::new()
        .nest("/api/goals", goal_routes())
        .route("/health", get(health))
}
