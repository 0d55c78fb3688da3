// Detection Module
// Rule-based scoring engine organized into specialized submodules:
// - features: Tokenization, sentence and punctuation features, n-gram tables
// - stats: Numeric helpers shared by the scorers
// - factors: Registry of the six factor scorers
// - aggregation: Combines factor scores into the overall score
// - confidence: Length gate and factor agreement
// - explanation: Plain-language summary of the verdict

pub mod aggregation;
pub mod confidence;
pub mod explanation;
pub mod factors;
pub mod features;
pub mod stats;

pub use aggregation::{aggregate, contributions, weight};
pub use confidence::estimate;
pub use explanation::{explain, Verdict};
pub use factors::{score_all, scorer_for, Scorer, REGISTRY};
pub use features::{extract, FeatureSet};

use crate::models::AnalysisResult;
use crate::services::config_store::{DetectionConfig, OversizePolicy};
use crate::services::text_processor::truncate_chars;
use explanation::EMPTY_TEXT_EXPLANATION;
use thiserror::Error;
use tracing::{debug, warn};

/// Sample text used by `--example` and the round-trip tests.
pub const EXAMPLE_TEXT: &str = "This technology leverages sophisticated natural language processing algorithms to analyze patterns in text composition, syntax, and stylistic elements. It identifies characteristics that are typically more common in AI-generated content versus human writing. The system evaluates factors such as repetitive patterns, sentence structure diversity, punctuation usage, and stylistic consistency to produce a probability score.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("input has {actual} characters, limit is {limit}")]
    LengthExceeded { actual: usize, limit: usize },
    #[error("background analysis task failed: {0}")]
    TaskFailed(String),
}

/// Scoring engine. Holds only immutable configuration, so one instance can
/// serve any number of calls, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: DetectionConfig,
}

impl Analyzer {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Analyze `text`, applying the configured length policy first.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let text = self.prepare(text)?;
        Ok(run(text))
    }

    /// Same as [`Analyzer::analyze`], on tokio's blocking pool.
    pub async fn analyze_in_background(&self, text: String) -> Result<AnalysisResult, AnalysisError> {
        let analyzer = self.clone();
        tokio::task::spawn_blocking(move || analyzer.analyze(&text))
            .await
            .map_err(|e| AnalysisError::TaskFailed(e.to_string()))?
    }

    fn prepare<'a>(&self, text: &'a str) -> Result<&'a str, AnalysisError> {
        let limit = self.config.max_input_chars;
        // Byte length bounds char count from above
        if text.len() <= limit {
            return Ok(text);
        }
        let actual = text.chars().count();
        if actual <= limit {
            return Ok(text);
        }
        match self.config.oversize_policy {
            OversizePolicy::Reject => Err(AnalysisError::LengthExceeded { actual, limit }),
            OversizePolicy::Truncate => {
                let kept = truncate_chars(text, limit);
                warn!(
                    actual_chars = actual,
                    limit,
                    kept_chars = kept.chars().count(),
                    "input exceeds limit, truncating"
                );
                Ok(kept)
            }
        }
    }
}

/// Analyze `text` with the default limit and truncation. Never fails.
pub fn analyze(text: &str) -> AnalysisResult {
    let analyzer = Analyzer::default();
    match analyzer.prepare(text) {
        Ok(prepared) => run(prepared),
        // Truncate policy never rejects
        Err(_) => run(truncate_chars(text, analyzer.config.max_input_chars)),
    }
}

fn run(text: &str) -> AnalysisResult {
    debug!(chars = text.chars().count(), "analysis.start");

    let features = extract(text);
    let details = score_all(&features);
    let score = aggregate(&details);
    let confidence = estimate(text, score, &details);
    let explanation = if features.is_empty() {
        EMPTY_TEXT_EXPLANATION.to_string()
    } else {
        explain(score, confidence, &details)
    };

    debug!(
        score,
        confidence = %confidence,
        sentences = features.sentence_count(),
        words = features.word_count(),
        "analysis.finish"
    );

    AnalysisResult {
        score,
        confidence,
        explanation,
        details,
    }
}
