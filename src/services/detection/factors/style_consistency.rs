// Style Consistency
// Compares sentence length, vocabulary richness and word length across text segments

use super::NEUTRAL_SCORE;
use crate::services::detection::features::{FeatureSet, Sentence};
use crate::services::detection::stats::{clamp_score, coefficient_of_variation, mean, safe_ratio};
use std::collections::HashSet;

const MIN_SENTENCES: usize = 4;
const MIN_TOKENS: usize = 20;
const SENTENCES_PER_SEGMENT: usize = 3;
const MAX_SEGMENTS: usize = 4;

// Cross-segment CV at which each measure counts as fully inconsistent.
const SENTENCE_LENGTH_CV_SCALE: f64 = 0.35;
const TYPE_TOKEN_CV_SCALE: f64 = 0.15;
const WORD_LENGTH_CV_SCALE: f64 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProfile {
    pub mean_sentence_length: f64,
    pub type_token_ratio: f64,
    pub mean_word_length: f64,
}

impl SegmentProfile {
    fn from_sentences(sentences: &[Sentence]) -> Self {
        let tokens: Vec<&str> = sentences
            .iter()
            .flat_map(|s| s.tokens.iter().map(String::as_str))
            .collect();
        let distinct: HashSet<&str> = tokens.iter().copied().collect();
        let lengths: Vec<f64> = sentences.iter().map(|s| s.len() as f64).collect();
        let word_lengths: Vec<f64> = tokens.iter().map(|t| t.chars().count() as f64).collect();

        SegmentProfile {
            mean_sentence_length: mean(&lengths),
            type_token_ratio: safe_ratio(distinct.len() as f64, tokens.len() as f64),
            mean_word_length: mean(&word_lengths),
        }
    }
}

/// Split sentences into 2..=4 contiguous, near-equal segments.
///
/// Returns `None` when the text is too short to segment meaningfully.
pub fn segment(features: &FeatureSet) -> Option<Vec<SegmentProfile>> {
    let n = features.sentence_count();
    if n < MIN_SENTENCES || features.tokens.len() < MIN_TOKENS {
        return None;
    }
    let count = (n / SENTENCES_PER_SEGMENT).clamp(2, MAX_SEGMENTS);
    let profiles = (0..count)
        .map(|i| {
            let start = i * n / count;
            let end = (i + 1) * n / count;
            SegmentProfile::from_sentences(&features.sentences[start..end])
        })
        .collect();
    Some(profiles)
}

/// Mean scaled variation across segments, in [0, 1].
pub fn variation(profiles: &[SegmentProfile]) -> f64 {
    let measure = |f: fn(&SegmentProfile) -> f64, scale: f64| {
        let values: Vec<f64> = profiles.iter().map(f).collect();
        (coefficient_of_variation(&values) / scale).min(1.0)
    };
    mean(&[
        measure(|p| p.mean_sentence_length, SENTENCE_LENGTH_CV_SCALE),
        measure(|p| p.type_token_ratio, TYPE_TOKEN_CV_SCALE),
        measure(|p| p.mean_word_length, WORD_LENGTH_CV_SCALE),
    ])
}

pub fn score(features: &FeatureSet) -> f64 {
    match segment(features) {
        Some(profiles) => clamp_score(100.0 * (1.0 - variation(&profiles))),
        None => NEUTRAL_SCORE,
    }
}
