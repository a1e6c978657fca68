//! FallbackAnalyzer - deterministic analysis used when the model path fails.

use super::{Industry, StoryAnalysis};

/// Produces a canned, industry-aware analysis.
///
/// The story text is not parsed for entities; every story in the same
/// industry yields the same analysis.
pub struct FallbackAnalyzer;

impl FallbackAnalyzer {
    /// Returns the fallback analysis for `industry`, finalized (clamped and priced).
    pub fn analyze(_story_text: &str, industry: &Industry) -> StoryAnalysis {
        let mut analysis = Self::baseline();

        match industry {
            Industry::Education => {
                analysis.objects.extend(
                    ["educational diagram", "information panel"].map(String::from),
                );
                analysis.mood = "informative and clear".to_string();
            }
            Industry::Architecture => {
                analysis.setting = "modern architectural space".to_string();
                analysis.objects = ["building model", "blueprint", "scale figure"]
                    .map(String::from)
                    .to_vec();
            }
            Industry::Gaming | Industry::Ecommerce | Industry::Other(_) => {}
        }

        analysis.finalize(industry)
    }

    fn baseline() -> StoryAnalysis {
        StoryAnalysis {
            characters: ["knight", "dragon"].map(String::from).to_vec(),
            setting: "ancient castle courtyard".to_string(),
            objects: ["sword", "treasure chest", "magic crystal"]
                .map(String::from)
                .to_vec(),
            mood: "epic and dramatic".to_string(),
            actions: ["confronting", "guarding", "observing"]
                .map(String::from)
                .to_vec(),
            complexity_score: 7.5,
            estimated_render_cost: 0.0,
        }
    }
}
