//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text generation providers (Groq, mock)
//! - `http` - REST API (axum)
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories

pub mod ai;
pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryGoalRepository;
pub use postgres::PostgresGoalRepository;
