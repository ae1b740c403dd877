//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresGoalRepository` - Goal persistence over the `goals` table

mod goal_repository;

pub use goal_repository::PostgresGoalRepository;
