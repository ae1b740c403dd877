//! GetGoalHandler - Query handler for retrieving a single goal.

use std::sync::Arc;

use crate::domain::foundation::GoalId;
use crate::domain::goal::{Goal, GoalError};
use crate::ports::GoalRepository;

/// Query to get a goal by ID.
#[derive(Debug, Clone)]
pub struct GetGoalQuery {
    pub goal_id: GoalId,
}

/// Handler for retrieving goals.
pub struct GetGoalHandler {
    repository: Arc<dyn GoalRepository>,
}

impl GetGoalHandler {
    pub fn new(repository: Arc<dyn GoalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetGoalQuery) -> Result<Goal, GoalError> {
        self.repository
            .find_by_id(&query.goal_id)
            .await?
            .ok_or_else(|| GoalError::not_found(query.goal_id))
    }
}
