//! Goal repository port.
//!
//! Defines the contract for persisting and retrieving Goal aggregates.
//! Goals are write-once, so there is no update or delete.

use crate::domain::foundation::{DomainError, GoalId};
use crate::domain::goal::Goal;
use async_trait::async_trait;

/// Repository port for Goal aggregate persistence.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Save a new goal.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, goal: &Goal) -> Result<(), DomainError>;

    /// Find a goal by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError>;

    /// List up to `limit` goals, most recently created first.
    async fn list_recent(&self, limit: u32) -> Result<Vec<Goal>, DomainError>;
}

