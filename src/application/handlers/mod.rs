//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod goal;

pub use goal::{
    CreateGoalCommand, CreateGoalHandler, GetGoalHandler, GetGoalQuery, ListGoalsHandler,
    RECENT_GOALS_LIMIT,
};
