pub mod analysis;
pub mod dimensions;
pub mod prediction;
pub mod suggestions;
pub mod timing;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::history::UserHistory;
use crate::{non_blank, EngineError, Platform};

pub use analysis::{analyze_content, analyze_title, Analysis, ContentAnalysis, TitleAnalysis};
pub use dimensions::score_content;
pub use prediction::{predict, EstimateRange, PerformancePrediction, Potential};
pub use suggestions::{build_suggestions, Priority, Suggestion, SuggestionKind};
pub use timing::{analyze_timing, timing_score, PostingTime, TimingAnalysis};

#[derive(Debug, Clone, Default)]
pub struct ContentInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub platform: Option<Platform>,
}

impl ContentInput {
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    pub fn content(&self) -> Option<&str> {
        non_blank(self.content.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub overall: u8,
    pub attractiveness: u8,
    pub readability: u8,
    pub shareability: u8,
    pub completeness: u8,
    pub timing: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub scores: ScoreBreakdown,
    pub prediction: PerformancePrediction,
    pub suggestions: Vec<Suggestion>,
    pub analysis: Analysis,
}

/// Score a draft, estimate its reach and explain what to improve.
pub fn predict_performance(
    input: &ContentInput,
    history: Option<&UserHistory>,
    at: &PostingTime,
    config: &EngineConfig,
) -> Result<PerformanceReport, EngineError> {
    if input.title().is_none() && input.content().is_none() {
        return Err(EngineError::invalid("title or content is required"));
    }

    let scores = score_content(input, at, &config.weights);
    let prediction = predict(&scores, input.platform, history, &config.prediction);
    let suggestions = build_suggestions(&scores, input.title(), input.content());
    let analysis = Analysis {
        title_analysis: analyze_title(input.title()),
        content_analysis: analyze_content(input.content()),
        timing_analysis: analyze_timing(input.platform, at),
    };

    Ok(PerformanceReport {
        scores,
        prediction,
        suggestions,
        analysis,
    })
}
