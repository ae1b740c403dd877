//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `goal` - Goal aggregate and the pure decomposition rules

pub mod foundation;
pub mod goal;
