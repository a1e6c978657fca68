//! Request and response bodies for story analysis.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{AnalysisEngine, Industry, StoryAnalysis};

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub industry: Industry,
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_style() -> String {
    "fantasy".to_string()
}

/// Response of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: StoryAnalysis,
    pub engine: AnalysisEngine,
    pub industry: Industry,
    /// Same figure as `analysis.estimatedRenderCost`.
    pub cost_savings: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_industry_and_style() {
        let req: AnalyzeRequest = serde_json::from_str(r#"{"text": "A knight"}"#).unwrap();
        assert_eq!(req.industry, Industry::Gaming);
        assert_eq!(req.style, "fantasy");
    }

    #[test]
    fn request_keeps_unknown_industry() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"text": "x", "industry": "film"}"#).unwrap();
        assert_eq!(req.industry.as_str(), "film");
    }
}
