//! Analysis command handlers.

mod analyze_story;

pub use analyze_story::{
    AnalyzeStoryCommand, AnalyzeStoryHandler, AnalyzeStoryResult, DEFAULT_TEMPERATURE,
};
