//! HTTP handlers for story analysis.

use axum::extract::{Json, State};

use crate::application::AnalyzeStoryCommand;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{AnalyzeRequest, AnalyzeResponse};

/// POST /api/analyze
///
/// Always answers with an analysis unless the text is blank.
pub async fn analyze_story(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let industry = request.industry.clone();
    let cmd = AnalyzeStoryCommand {
        text: request.text,
        industry: request.industry,
        style: request.style,
    };

    let result = state.analyze_story_handler().handle(cmd).await?;

    Ok(Json(AnalyzeResponse {
        success: true,
        cost_savings: result.analysis.estimated_render_cost,
        analysis: result.analysis,
        engine: result.engine,
        industry,
    }))
}
