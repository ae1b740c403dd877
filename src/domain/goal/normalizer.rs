//! Turns free-form generator output into a [`DecompositionResult`].
//!
//! Two tiers, tried in order:
//!
//! 1. Structured: pull the payload out of a fenced block (a `json` fence wins
//!    over a bare fence, a bare fence wins over the raw text) and parse it as a
//!    JSON object with `tasks` and `complexity`.
//! 2. Heuristic: scrape the raw text line by line, stripping leading
//!    `N.` numbering, and pad the list to [`TASK_COUNT`].
//!
//! The structured tier does not enforce the task count; that is the
//! orchestrator's job.

use serde::Deserialize;
use serde_json::Value;

use super::decomposition::{DecompositionResult, TASK_COUNT};

/// Complexity used when the reply carries no usable score.
pub const DEFAULT_COMPLEXITY: i32 = 5;

/// Filler the line scraper appends when it finds fewer than [`TASK_COUNT`] lines.
pub const SCRAPED_PADDING_TASK: &str = "Refine this step further.";

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

#[derive(Debug, Deserialize)]
struct StructuredReply {
    #[serde(default)]
    tasks: Vec<String>,
    #[serde(default)]
    complexity: Option<Value>,
}

/// Best-effort parser for generator replies. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes `raw` into tasks plus complexity.
    pub fn normalize(&self, raw: &str) -> DecompositionResult {
        match parse_structured(extract_payload(raw)) {
            Some(result) => result,
            None => {
                tracing::debug!(
                    reply_len = raw.len(),
                    "Generator reply is not a JSON object, scraping lines"
                );
                scrape_lines(raw)
            }
        }
    }
}

/// Returns the text inside the first `json` fence, else the first bare fence,
/// else the whole input. An unterminated fence runs to the end of the text.
fn extract_payload(raw: &str) -> &str {
    let opening = raw
        .find(JSON_FENCE)
        .map(|start| start + JSON_FENCE.len())
        .or_else(|| raw.find(FENCE).map(|start| start + FENCE.len()));

    match opening {
        Some(body_start) => {
            let body = &raw[body_start..];
            let body = body.find(FENCE).map_or(body, |end| &body[..end]);
            body.trim()
        }
        None => raw,
    }
}

fn parse_structured(payload: &str) -> Option<DecompositionResult> {
    let value: Value = serde_json::from_str(payload).ok()?;
    if !value.is_object() {
        return None;
    }
    let reply: StructuredReply = serde_json::from_value(value).ok()?;

    Some(DecompositionResult::new(
        reply.tasks,
        coerce_complexity(reply.complexity.as_ref()),
    ))
}

/// Integers pass through, floats truncate toward zero, numeric strings parse.
/// Values beyond the `i32` range saturate.
fn coerce_complexity(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .map(saturate)
            .or_else(|| n.as_f64().map(|f| f.trunc() as i32))
            .unwrap_or(DEFAULT_COMPLEXITY),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(saturate)
            .unwrap_or(DEFAULT_COMPLEXITY),
        _ => DEFAULT_COMPLEXITY,
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn scrape_lines(raw: &str) -> DecompositionResult {
    let mut tasks: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(task_from_line)
        .take(TASK_COUNT)
        .collect();

    while tasks.len() < TASK_COUNT {
        tasks.push(SCRAPED_PADDING_TASK.to_string());
    }

    DecompositionResult::new(tasks, DEFAULT_COMPLEXITY)
}

fn task_from_line(line: &str) -> String {
    if line.starts_with(|c: char| c.is_ascii_digit()) {
        if let Some((_, rest)) = line.split_once('.') {
            return rest.trim().to_string();
        }
    }
    line.to_string()
}
