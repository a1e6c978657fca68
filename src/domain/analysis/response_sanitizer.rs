//! ResponseSanitizer - recovers a JSON object from a raw model completion.
//!
//! Models frequently wrap the requested JSON in a fenced code block or in
//! explanatory prose. The sanitizer handles those two shapes and nothing
//! more; it never invents or repairs content.

use serde::Deserialize;
use serde_json::Value;

use super::{AnalysisError, StoryAnalysis, DEFAULT_COMPLEXITY};

const FENCE: &str = "```";

/// Extracts and parses model output.
pub struct ResponseSanitizer;

impl ResponseSanitizer {
    /// Returns a string that parses as a JSON object.
    ///
    /// # Algorithm
    /// 1. Trim, then strip a leading fence (with its language tag) and a trailing fence.
    /// 2. If the remainder parses as an object, return it.
    /// 3. Otherwise slice from the first `{` to the last `}` inclusive and parse again.
    /// 4. Otherwise fail with `MalformedModelOutput`.
    pub fn sanitize(raw: &str) -> Result<String, AnalysisError> {
        let unfenced = strip_code_fence(raw.trim());

        if is_json_object(unfenced) {
            return Ok(unfenced.to_string());
        }

        let start = unfenced.find('{');
        let end = unfenced.rfind('}');
        match (start, end) {
            (Some(start), Some(end)) if end > start => {
                let candidate = &unfenced[start..=end];
                if is_json_object(candidate) {
                    Ok(candidate.to_string())
                } else {
                    Err(AnalysisError::malformed(
                        "braced region of completion is not valid JSON",
                    ))
                }
            }
            _ => Err(AnalysisError::malformed("no JSON object found in completion")),
        }
    }

    /// Sanitizes a completion and decodes it into a `StoryAnalysis`.
    ///
    /// The returned analysis is not yet finalized; any cost the model
    /// supplied is dropped here.
    pub fn parse_analysis(raw: &str) -> Result<StoryAnalysis, AnalysisError> {
        let json = Self::sanitize(raw)?;
        let output: ModelOutput = serde_json::from_str(&json).map_err(|e| {
            AnalysisError::malformed(format!("completion does not match analysis shape: {}", e))
        })?;

        Ok(StoryAnalysis {
            characters: output.characters,
            setting: output.setting,
            objects: output.objects,
            mood: output.mood,
            actions: output.actions,
            complexity_score: output.complexity_score.unwrap_or(DEFAULT_COMPLEXITY),
            estimated_render_cost: 0.0,
        })
    }
}

/// Shape requested from the model. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
struct ModelOutput {
    characters: Vec<String>,
    setting: String,
    objects: Vec<String>,
    mood: String,
    actions: Vec<String>,
    #[serde(default, alias = "complexityScore")]
    complexity_score: Option<f64>,
}

fn strip_code_fence(text: &str) -> &str {
    let mut body = text;
    if let Some(rest) = body.strip_prefix(FENCE) {
        body = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    }
    if let Some(rest) = body.strip_suffix(FENCE) {
        body = rest;
    }
    body.trim()
}

fn is_json_object(text: &str) -> bool {
    matches!(serde_json::from_str::<Value>(text), Ok(Value::Object(_)))
}
