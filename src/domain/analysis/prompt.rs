//! Prompt template for story analysis.

use super::Industry;

/// Builds the instruction sent to the language model.
pub struct AnalysisPrompt;

impl AnalysisPrompt {
    /// Renders the prompt for `story_text` in `industry`.
    pub fn build(story_text: &str, industry: &Industry) -> String {
        format!(
            r#"Analyze this story for 3D scene generation in the {industry} industry.
{focus}

Return structured JSON with:
- characters: list of main characters with potential rigging needs
- setting: detailed environment description with spatial layout
- objects: list of key props/assets with functional descriptions
- mood: lighting and atmosphere requirements
- actions: key animations or interactions needed
- complexity_score: 1-10 scale for 3D generation difficulty
- estimated_render_cost: approximate USD cost for professional 3D modeling

All list entries must be plain strings.

Story: {story}

Return ONLY valid JSON:"#,
            industry = industry.as_str(),
            focus = industry.prompt_focus(),
            story = story_text,
        )
    }
}
