//! Goal command and query handlers.

mod create_goal;
mod get_goal;
mod list_goals;

pub use create_goal::{CreateGoalCommand, CreateGoalHandler};
pub use get_goal::{GetGoalHandler, GetGoalQuery};
pub use list_goals::{ListGoalsHandler, RECENT_GOALS_LIMIT};
