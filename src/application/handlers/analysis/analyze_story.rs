//! AnalyzeStoryHandler - Command handler turning story text into a scene analysis.
//!
//! Tries the language model first. Any classified model failure (unreachable
//! service, timeout, unusable completion) is logged and replaced by the
//! deterministic fallback. Only empty input is reported to the caller.

use std::sync::Arc;

use crate::domain::analysis::{
    AnalysisEngine, AnalysisError, AnalysisPrompt, FallbackAnalyzer, Industry,
    ResponseSanitizer, StoryAnalysis,
};
use crate::ports::{AIError, AIProvider, BusinessTracker, CompletionRequest};

/// Default sampling temperature for analysis requests.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Command to analyze a story.
#[derive(Debug, Clone)]
pub struct AnalyzeStoryCommand {
    pub text: String,
    pub industry: Industry,
    /// Requested visual style; recorded for observability only.
    pub style: String,
}

/// Result of a completed analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeStoryResult {
    pub analysis: StoryAnalysis,
    pub engine: AnalysisEngine,
}

/// Handler for story analysis.
pub struct AnalyzeStoryHandler {
    provider: Arc<dyn AIProvider>,
    tracker: Arc<dyn BusinessTracker>,
    temperature: f32,
}

impl AnalyzeStoryHandler {
    pub fn new(provider: Arc<dyn AIProvider>, tracker: Arc<dyn BusinessTracker>) -> Self {
        Self {
            provider,
            tracker,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Overrides the sampling temperature sent to the model.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub async fn handle(&self, cmd: AnalyzeStoryCommand) -> Result<AnalyzeStoryResult, AnalysisError> {
        let text = cmd.text.trim();
        if text.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let trace_id = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            trace_id = %trace_id,
            industry = %cmd.industry,
            style = %cmd.style,
            chars = text.len(),
            "Analyzing story"
        );

        let (analysis, engine) = match self.analyze_with_model(text, &cmd.industry, &trace_id).await {
            Ok(analysis) => (analysis, AnalysisEngine::Model),
            Err(err) if err.is_recoverable() => {
                tracing::warn!(
                    trace_id = %trace_id,
                    failure_class = err.failure_class(),
                    error = %err,
                    industry = %cmd.industry,
                    "Model analysis failed, using fallback"
                );
                (
                    FallbackAnalyzer::analyze(text, &cmd.industry),
                    AnalysisEngine::Fallback,
                )
            }
            Err(err) => return Err(err),
        };

        let analysis = analysis.finalize(&cmd.industry);
        self.tracker.track_analysis(analysis.estimated_render_cost).await;

        tracing::info!(
            trace_id = %trace_id,
            engine = engine.as_str(),
            industry = %cmd.industry,
            cost = analysis.estimated_render_cost,
            complexity = analysis.complexity_score,
            "Story analyzed"
        );

        Ok(AnalyzeStoryResult { analysis, engine })
    }

    /// Single model round trip. No retries.
    async fn analyze_with_model(
        &self,
        text: &str,
        industry: &Industry,
        trace_id: &str,
    ) -> Result<StoryAnalysis, AnalysisError> {
        let request = CompletionRequest::new(AnalysisPrompt::build(text, industry), trace_id)
            .with_temperature(self.temperature);

        let response = self.provider.complete(request).await.map_err(classify)?;
        ResponseSanitizer::parse_analysis(&response.content)
    }
}

/// Maps a transport-level failure onto the analysis failure classes.
fn classify(err: AIError) -> AnalysisError {
    match err {
        AIError::Timeout { timeout_secs } => AnalysisError::ModelTimeout { timeout_secs },
        AIError::Parse(message) => AnalysisError::malformed(message),
        AIError::Unavailable { message } | AIError::Network(message) => {
            AnalysisError::unavailable(message)
        }
    }
}
