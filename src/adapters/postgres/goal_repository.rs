//! PostgreSQL implementation of GoalRepository.
//!
//! Persists Goal aggregates to the `goals` table; tasks live in a JSONB array.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, GoalId, Timestamp};
use crate::domain::goal::Goal;
use crate::ports::GoalRepository;

/// PostgreSQL implementation of GoalRepository.
#[derive(Clone)]
pub struct PostgresGoalRepository {
    pool: PgPool,
}

impl PostgresGoalRepository {
    /// Creates a new PostgresGoalRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO goals (id, text, tasks, complexity, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(goal.id().as_uuid())
        .bind(goal.text())
        .bind(Json(goal.tasks()))
        .bind(goal.complexity())
        .bind(goal.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert goal", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, text, tasks, complexity, created_at
            FROM goals
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch goal", e))?;

        row.map(row_to_goal).transpose()
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Goal>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, text, tasks, complexity, created_at
            FROM goals
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list goals", e))?;

        rows.into_iter().map(row_to_goal).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
}

fn row_to_goal(row: sqlx::postgres::PgRow) -> Result<Goal, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| db_error("Failed to get id", e))?;

    let text: String = row
        .try_get("text")
        .map_err(|e| db_error("Failed to get text", e))?;

    let Json(tasks): Json<Vec<String>> = row
        .try_get("tasks")
        .map_err(|e| db_error("Failed to get tasks", e))?;

    let complexity: Option<i32> = row
        .try_get("complexity")
        .map_err(|e| db_error("Failed to get complexity", e))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| db_error("Failed to get created_at", e))?;

    Ok(Goal::reconstitute(
        GoalId::from_uuid(id),
        text,
        tasks,
        complexity,
        Timestamp::from_datetime(created_at),
    ))
}
