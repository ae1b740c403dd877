//! Offline decomposition used when no external generator is available.

use super::decomposition::DecompositionResult;

/// Complexity reported for every locally generated plan.
pub const LOCAL_COMPLEXITY: i32 = 6;

/// Deterministic five-step template generator.
///
/// Interpolates the goal into the research step only; the remaining steps are
/// generic. Pure and stateless, so safe to share across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFallbackGenerator;

impl LocalFallbackGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, goal: &str) -> DecompositionResult {
        let tasks = vec![
            format!("Research the market for '{}'", goal),
            "Define the 1-page plan (problem, solution, 3 features)".to_string(),
            "Build a minimum viable version (MVP)".to_string(),
            "Test with 5–10 users and iterate".to_string(),
            "Prepare go-to-market and outreach".to_string(),
        ];

        DecompositionResult::new(tasks, LOCAL_COMPLEXITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::goal::TASK_COUNT;

    #[test]
    fn generate_is_deterministic() {
        let generator = LocalFallbackGenerator::new();
        assert_eq!(
            generator.generate("Launch a bakery"),
            generator.generate("Launch a bakery")
        );
    }

    #[test]
    fn generate_mentions_goal_in_first_task_only() {
        let result = LocalFallbackGenerator::new().generate("Launch a bakery");

        assert!(result.tasks[0].contains("Launch a bakery"));
        assert!(result.tasks[1..].iter().all(|t| !t.contains("Launch a bakery")));
    }

    #[test]
    fn generate_returns_full_plan_with_fixed_complexity() {
        let result = LocalFallbackGenerator::new().generate("Learn piano");

        assert_eq!(result.tasks.len(), TASK_COUNT);
        assert_eq!(result.complexity, LOCAL_COMPLEXITY);
        assert_eq!(result.tasks[2], "Build a minimum viable version (MVP)");
    }
}
