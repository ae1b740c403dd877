//! HTTP adapter for goal endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateGoalRequest, ErrorResponse, GoalResponse, HealthResponse};
pub use handlers::GoalAppState;
pub use routes::{goal_router, goal_routes};
