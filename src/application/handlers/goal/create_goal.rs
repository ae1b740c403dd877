//! CreateGoalHandler - Command handler for creating goals.

use std::sync::Arc;

use crate::application::GoalDecomposer;
use crate::domain::foundation::GoalId;
use crate::domain::goal::{Goal, GoalError};
use crate::ports::GoalRepository;

/// Command to create a goal from free text.
#[derive(Debug, Clone)]
pub struct CreateGoalCommand {
    pub text: String,
}

/// Handler for creating goals.
///
/// Decomposes the text once, then persists the resulting goal.
pub struct CreateGoalHandler {
    repository: Arc<dyn GoalRepository>,
    decomposer: Arc<GoalDecomposer>,
}

impl CreateGoalHandler {
    pub fn new(repository: Arc<dyn GoalRepository>, decomposer: Arc<GoalDecomposer>) -> Self {
        Self {
            repository,
            decomposer,
        }
    }

    pub async fn handle(&self, cmd: CreateGoalCommand) -> Result<Goal, GoalError> {
        // 1. Reject blank text before spending a generator call
        Goal::validate_text(&cmd.text)?;

        // 2. Decompose (never fails)
        let decomposition = self.decomposer.decompose(&cmd.text).await;

        // 3. Build and persist the aggregate
        let goal = Goal::new(GoalId::new(), cmd.text, decomposition)?;
        self.repository.save(&goal).await?;

        tracing::info!(goal_id = %goal.id(), "Goal created");
        Ok(goal)
    }
}
