//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) are kept apart from query handlers (read).

mod decomposer;
pub mod handlers;

pub use decomposer::GoalDecomposer;
pub use handlers::{
    CreateGoalCommand, CreateGoalHandler, GetGoalHandler, GetGoalQuery, ListGoalsHandler,
    RECENT_GOALS_LIMIT,
};
