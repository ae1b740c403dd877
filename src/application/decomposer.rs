//! GoalDecomposer - turns goal text into exactly five steps.
//!
//! Routes to the external generator when a credential is configured and to
//! [`LocalFallbackGenerator`] otherwise. Any generator failure falls back to
//! local generation; the caller always receives a result.

use std::sync::Arc;

use crate::adapters::ai::{GroqConfig, GroqProvider};
use crate::config::AiConfig;
use crate::domain::goal::{DecompositionResult, LocalFallbackGenerator, ResponseNormalizer};
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole};

const SYSTEM_PROMPT: &str = "You are a goal-setting expert. Break down goals into exactly 5 clear, \
actionable steps with a complexity rating. Always respond with valid JSON only.";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;
const TOP_P: f32 = 1.0;

/// What came back from a single external generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GenerationOutcome {
    Content(String),
    Failed(String),
}

/// Decomposes goal text into a normalized [`DecompositionResult`].
///
/// `Send + Sync`; share it behind an `Arc`.
#[derive(Clone)]
pub struct GoalDecomposer {
    provider: Option<Arc<dyn AIProvider>>,
    normalizer: ResponseNormalizer,
    fallback: LocalFallbackGenerator,
}

impl GoalDecomposer {
    /// Decomposer that never leaves the process.
    pub fn local() -> Self {
        Self {
            provider: None,
            normalizer: ResponseNormalizer::new(),
            fallback: LocalFallbackGenerator::new(),
        }
    }

    /// Decomposer that consults `provider` first.
    pub fn with_provider(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider: Some(provider),
            ..Self::local()
        }
    }

    /// Builds a decomposer from configuration.
    ///
    /// A missing or placeholder key yields [`GoalDecomposer::local`].
    ///
    /// # Errors
    ///
    /// Returns `AIError` if the HTTP client cannot be constructed.
    pub fn from_config(config: &AiConfig) -> Result<Self, AIError> {
        let Some(api_key) = config.api_key() else {
            return Ok(Self::local());
        };

        let provider = GroqProvider::new(
            GroqConfig::new(api_key)
                .with_model(config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.timeout()),
        )?;

        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Returns true if an external generator is wired in.
    pub fn is_external(&self) -> bool {
        self.provider.is_some()
    }

    /// Decomposes `goal` into exactly five tasks plus a complexity score.
    pub async fn decompose(&self, goal: &str) -> DecompositionResult {
        let raw = match &self.provider {
            None => {
                tracing::debug!("No generator configured, using local decomposition");
                self.fallback.generate(goal)
            }
            Some(provider) => match self.request_steps(provider.as_ref(), goal).await {
                GenerationOutcome::Content(content) => self.normalizer.normalize(&content),
                GenerationOutcome::Failed(reason) => {
                    tracing::warn!(reason = %reason, "Generation failed, using local decomposition");
                    self.fallback.generate(goal)
                }
            },
        };

        let result = raw.normalized();
        tracing::debug!(
            tasks = result.tasks.len(),
            complexity = result.complexity,
            "Goal decomposed"
        );
        result
    }

    async fn request_steps(&self, provider: &dyn AIProvider, goal: &str) -> GenerationOutcome {
        let request = CompletionRequest::new()
            .with_message(MessageRole::System, SYSTEM_PROMPT)
            .with_message(MessageRole::User, build_prompt(goal))
            .with_temperature(TEMPERATURE)
            .with_max_tokens(MAX_TOKENS)
            .with_top_p(TOP_P);

        match provider.complete(request).await {
            Ok(response) if response.content.trim().is_empty() => {
                GenerationOutcome::Failed("generator returned no content".to_string())
            }
            Ok(response) => GenerationOutcome::Content(response.content),
            Err(err) => GenerationOutcome::Failed(err.to_string()),
        }
    }
}

impl Default for GoalDecomposer {
    fn default() -> Self {
        Self::local()
    }
}

impl std::fmt::Debug for GoalDecomposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoalDecomposer")
            .field("provider", &self.provider.as_ref().map(|p| p.provider_info().name))
            .finish()
    }
}

fn build_prompt(goal: &str) -> String {
    format!(
        r#"Break down this goal into exactly 5 actionable steps and rate its complexity.

Goal: {goal}

Return ONLY a JSON object with this exact format:
{{
  "tasks": ["step 1", "step 2", "step 3", "step 4", "step 5"],
  "complexity": 7
}}

Where:
- tasks: array of exactly 5 short, actionable steps (strings)
- complexity: integer from 1 to 10 (1=very easy, 10=very hard)

Return only the JSON, no other text."#
    )
}
