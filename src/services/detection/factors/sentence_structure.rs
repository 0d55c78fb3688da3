// Sentence Structure
// Uniform sentence lengths and repetitive sentence openers read as machine-like

use crate::services::detection::features::FeatureSet;
use crate::services::detection::stats::{clamp_score, coefficient_of_variation};
use std::collections::HashSet;

/// Length CV at or above which lengths count as fully varied.
const LENGTH_CV_CEILING: f64 = 0.6;
const LENGTH_WEIGHT: f64 = 0.65;
const OPENER_WEIGHT: f64 = 0.35;
/// Sentence count needed before the score can reach full strength.
const FULL_RELIABILITY_SENTENCES: usize = 5;

/// 1.0 when every sentence has the same length, 0.0 once the CV reaches the ceiling.
pub fn length_uniformity(lengths: &[f64]) -> f64 {
    if lengths.len() < 2 {
        return 0.0;
    }
    1.0 - (coefficient_of_variation(lengths) / LENGTH_CV_CEILING).min(1.0)
}

/// 1.0 when all sentences open with the same word, 0.0 when every opener differs.
pub fn opener_uniformity(openers: &[&str]) -> f64 {
    if openers.len() < 2 {
        return 0.0;
    }
    let distinct: HashSet<&str> = openers.iter().copied().collect();
    1.0 - (distinct.len() - 1) as f64 / (openers.len() - 1) as f64
}

/// Damps the score for texts with only a handful of sentences.
fn reliability(sentence_count: usize) -> f64 {
    if sentence_count < 2 {
        return 0.0;
    }
    ((sentence_count - 1) as f64 / (FULL_RELIABILITY_SENTENCES - 1) as f64).min(1.0)
}

pub fn score(features: &FeatureSet) -> f64 {
    let lengths: Vec<f64> = features.sentences.iter().map(|s| s.len() as f64).collect();
    let openers: Vec<&str> = features
        .sentences
        .iter()
        .filter_map(|s| s.first_token())
        .collect();

    let raw = LENGTH_WEIGHT * length_uniformity(&lengths) + OPENER_WEIGHT * opener_uniformity(&openers);
    clamp_score(100.0 * raw * reliability(lengths.len()))
}
