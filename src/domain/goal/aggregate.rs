//! Goal aggregate entity.
//!
//! A goal is created once from the user's text and the decomposition produced
//! for it. There is no update path: every accessor is read-only.

use crate::domain::foundation::{DomainError, GoalId, Timestamp};
use serde::{Deserialize, Serialize};

use super::decomposition::{DecompositionResult, TASK_COUNT};

/// Goal aggregate - a user goal with its five steps.
///
/// # Invariants
///
/// - `text` is non-empty after trimming
/// - `tasks` holds exactly [`TASK_COUNT`] entries
/// - `complexity` is stored as produced, without range checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    id: GoalId,
    text: String,
    tasks: Vec<String>,
    complexity: Option<i32>,
    created_at: Timestamp,
}

impl Goal {
    /// Create a goal from its text and a normalized decomposition.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if text is blank
    /// - `ValidationFailed` if the decomposition does not hold exactly five tasks
    pub fn new(
        id: GoalId,
        text: String,
        decomposition: DecompositionResult,
    ) -> Result<Self, DomainError> {
        Self::validate_text(&text)?;
        if !decomposition.is_complete() {
            return Err(DomainError::validation(
                "tasks",
                format!(
                    "Expected {} tasks, got {}",
                    TASK_COUNT,
                    decomposition.tasks.len()
                ),
            ));
        }

        Ok(Self {
            id,
            text,
            tasks: decomposition.tasks,
            complexity: Some(decomposition.complexity),
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a goal from persistence (no validation).
    pub fn reconstitute(
        id: GoalId,
        text: String,
        tasks: Vec<String>,
        complexity: Option<i32>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            text,
            tasks,
            complexity,
            created_at,
        }
    }

    /// Checks that goal text is usable before any decomposition work.
    pub fn validate_text(text: &str) -> Result<(), DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::validation("text", "Goal text cannot be empty"));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &GoalId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn complexity(&self) -> Option<i32> {
        self.complexity
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
