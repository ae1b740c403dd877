//! In-memory adapters for tests and local development.

mod goal_repository;

pub use goal_repository::InMemoryGoalRepository;
