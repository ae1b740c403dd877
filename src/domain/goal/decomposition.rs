//! Decomposition result value object.

use serde::{Deserialize, Serialize};

/// Number of steps every decomposed goal carries.
pub const TASK_COUNT: usize = 5;

/// Filler appended when a decomposition comes back short of [`TASK_COUNT`].
pub const PADDING_TASK: &str = "Refine this step.";

/// Steps plus complexity produced for a single goal.
///
/// `tasks` may hold any number of entries until [`DecompositionResult::normalized`]
/// has been applied. `complexity` is never range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionResult {
    pub tasks: Vec<String>,
    pub complexity: i32,
}

impl DecompositionResult {
    /// Creates a result from raw parts.
    pub fn new(tasks: Vec<String>, complexity: i32) -> Self {
        Self { tasks, complexity }
    }

    /// Pads with [`PADDING_TASK`] or truncates so exactly [`TASK_COUNT`] tasks remain.
    pub fn normalized(mut self) -> Self {
        self.tasks.truncate(TASK_COUNT);
        while self.tasks.len() < TASK_COUNT {
            self.tasks.push(PADDING_TASK.to_string());
        }
        self
    }

    /// Returns true if the task count invariant holds.
    pub fn is_complete(&self) -> bool {
        self.tasks.len() == TASK_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("step {}", i)).collect()
    }

    #[test]
    fn normalized_pads_short_task_lists() {
        let result = DecompositionResult::new(tasks(2), 3).normalized();

        assert_eq!(result.tasks.len(), TASK_COUNT);
        assert_eq!(result.tasks[0], "step 1");
        assert_eq!(result.tasks[1], "step 2");
        assert!(result.tasks[2..].iter().all(|t| t == PADDING_TASK));
        assert_eq!(result.complexity, 3);
    }

    #[test]
    fn normalized_truncates_long_task_lists() {
        let result = DecompositionResult::new(tasks(8), 9).normalized();

        assert_eq!(result.tasks, tasks(5));
    }

    #[test]
    fn normalized_fills_empty_task_list() {
        let result = DecompositionResult::new(Vec::new(), 5).normalized();
        assert_eq!(result.tasks, vec![PADDING_TASK.to_string(); TASK_COUNT]);
    }

    #[test]
    fn normalized_leaves_complexity_untouched() {
        let result = DecompositionResult::new(tasks(5), 42).normalized();
        assert_eq!(result.complexity, 42);

        let result = DecompositionResult::new(tasks(5), -3).normalized();
        assert_eq!(result.complexity, -3);
    }

    #[test]
    fn is_complete_reflects_task_count() {
        assert!(!DecompositionResult::new(tasks(4), 1).is_complete());
        assert!(DecompositionResult::new(tasks(5), 1).is_complete());
    }
}
