//! Goal Breaker - Goal decomposition service
//!
//! Accepts a free-text goal, asks a language model for five actionable steps
//! plus a complexity score, and stores the result behind a small HTTP API.
//! Unreliable generator output is normalized, and any generator failure falls
//! back to a deterministic local plan.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
