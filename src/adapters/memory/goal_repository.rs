//! In-memory implementation of GoalRepository.
//!
//! Keeps goals in insertion order behind a tokio `RwLock`.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, GoalId};
use crate::domain::goal::Goal;
use crate::ports::GoalRepository;

/// In-memory goal storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalRepository {
    goals: Arc<RwLock<Vec<Goal>>>,
}

impl InMemoryGoalRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored goals
    pub async fn len(&self) -> usize {
        self.goals.read().await.len()
    }

    /// Returns true if nothing has been stored
    pub async fn is_empty(&self) -> bool {
        self.goals.read().await.is_empty()
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        self.goals.write().await.push(goal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        let goals = self.goals.read().await;
        Ok(goals.iter().find(|g| g.id() == id).cloned())
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Goal>, DomainError> {
        let goals = self.goals.read().await;
        // Later inserts win ties on created_at
        let mut recent: Vec<Goal> = goals.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        recent.truncate(limit as usize);
        Ok(recent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use chrono::{Duration, Utc};

    fn goal_at(text: &str, minutes_ago: i64) -> Goal {
        Goal::reconstitute(
            GoalId::new(),
            text.to_string(),
            vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            Some(3),
            Timestamp::from_datetime(Utc::now() - Duration::minutes(minutes_ago)),
        )
    }

    #[tokio::test]
    async fn saves_and_finds_goal() {
        let repo = InMemoryGoalRepository::new();
        let goal = goal_at("Learn piano", 0);

        repo.save(&goal).await.unwrap();

        assert_eq!(repo.find_by_id(goal.id()).await.unwrap(), Some(goal));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let repo = InMemoryGoalRepository::new();
        assert!(repo.find_by_id(&GoalId::new()).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn lists_by_created_at_descending() {
        let repo = InMemoryGoalRepository::new();
        repo.save(&goal_at("middle", 5)).await.unwrap();
        repo.save(&goal_at("oldest", 10)).await.unwrap();
        repo.save(&goal_at("newest", 1)).await.unwrap();

        let texts: Vec<String> = repo
            .list_recent(10)
            .await
            .unwrap()
            .iter()
            .map(|g| g.text().to_string())
            .collect();

        assert_eq!(texts, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn list_respects_limit() {
        let repo = InMemoryGoalRepository::new();
        for i in 0..5 {
            repo.save(&goal_at(&format!("goal {}", i), 10 - i)).await.unwrap();
        }

        let recent = repo.list_recent(2).await.unwrap();

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].text(), "goal 4");
        assert_eq!(recent[1].text(), "goal 3");
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryGoalRepository::new();
        let clone = repo.clone();
        let goal = goal_at("shared", 0);

        clone.save(&goal).await.unwrap();

        assert!(repo.find_by_id(goal.id()).await.unwrap().is_some());
    }
}
