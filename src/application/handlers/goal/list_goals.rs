//! ListGoalsHandler - Query handler for the recent goals listing.

use std::sync::Arc;

use crate::domain::goal::{Goal, GoalError};
use crate::ports::GoalRepository;

/// Maximum number of goals returned by the listing.
pub const RECENT_GOALS_LIMIT: u32 = 50;

/// Handler for listing the most recently created goals.
pub struct ListGoalsHandler {
    repository: Arc<dyn GoalRepository>,
}

impl ListGoalsHandler {
    pub fn new(repository: Arc<dyn GoalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Goal>, GoalError> {
        Ok(self.repository.list_recent(RECENT_GOALS_LIMIT).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryGoalRepository;
    use crate::application::handlers::goal::test_support::{
        repository_with, FailingGoalRepository,
    };
    use crate::domain::foundation::GoalId;
    use crate::domain::goal::LocalFallbackGenerator;

    fn goal(text: &str) -> Goal {
        let decomposition = LocalFallbackGenerator::new().generate(text);
        Goal::new(GoalId::new(), text.to_string(), decomposition).unwrap()
    }

    #[tokio::test]
    async fn lists_most_recent_first() {
        let repo = Arc::new(repository_with(vec![goal("first"), goal("second")]).await);
        let handler = ListGoalsHandler::new(repo);

        let goals = handler.handle().await.unwrap();

        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].text(), "second");
        assert_eq!(goals[1].text(), "first");
    }

    #[tokio::test]
    async fn caps_listing_at_limit() {
        let goals = (0..60).map(|i| goal(&format!("goal {}", i))).collect();
        let handler = ListGoalsHandler::new(Arc::new(repository_with(goals).await));

        let listed = handler.handle().await.unwrap();

        assert_eq!(listed.len(), RECENT_GOALS_LIMIT as usize);
        assert_eq!(listed[0].text(), "goal 59");
    }

    #[tokio::test]
    async fn empty_repository_lists_nothing() {
        let handler = ListGoalsHandler::new(Arc::new(InMemoryGoalRepository::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn surfaces_repository_failure() {
        let handler = ListGoalsHandler::new(Arc::new(FailingGoalRepository));

        let result = handler.handle().await;

        assert!(matches!(result, Err(GoalError::Infrastructure(_))));
    }
}
