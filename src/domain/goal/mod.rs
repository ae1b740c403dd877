//! Goal module - decomposition of free-text goals into five steps.
//!
//! - `Goal` - persisted aggregate
//! - `DecompositionResult` - tasks plus complexity, the pipeline's output
//! - `ResponseNormalizer` - parses unreliable generator output
//! - `LocalFallbackGenerator` - deterministic offline plan

mod aggregate;
mod decomposition;
mod errors;
mod fallback;
mod normalizer;

pub use aggregate::Goal;
pub use decomposition::{DecompositionResult, PADDING_TASK, TASK_COUNT};
pub use errors::GoalError;
pub use fallback::{LocalFallbackGenerator, LOCAL_COMPLEXITY};
pub use normalizer::{ResponseNormalizer, DEFAULT_COMPLEXITY, SCRAPED_PADDING_TASK};
