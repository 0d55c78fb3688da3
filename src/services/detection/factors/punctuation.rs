// Punctuation Diversity
// High when writing leans on a narrow set of marks, low when many kinds are mixed

use crate::services::detection::features::{FeatureSet, PunctuationCounts};
use crate::services::detection::stats::{clamp_score, safe_ratio};

/// Number of distinct kinds treated as a fully varied repertoire.
const FULL_VARIETY_KINDS: usize = 6;
const VARIETY_WEIGHT: f64 = 0.6;
const EVENNESS_WEIGHT: f64 = 0.4;
/// Score for text that has words but no punctuation at all.
const NO_PUNCTUATION_SCORE: f64 = 100.0;

/// Shannon entropy of the mark distribution, normalized by `ln(FULL_VARIETY_KINDS)`.
pub fn normalized_entropy(counts: &PunctuationCounts) -> f64 {
    let total = counts.total() as f64;
    if total <= 0.0 {
        return 0.0;
    }
    let entropy: f64 = counts
        .iter()
        .filter(|(_, c)| *c > 0)
        .map(|(_, c)| {
            let p = c as f64 / total;
            -p * p.ln()
        })
        .sum();
    safe_ratio(entropy, (FULL_VARIETY_KINDS as f64).ln()).min(1.0)
}

/// Diversity in [0, 1]: how many kinds are used and how evenly.
pub fn diversity(counts: &PunctuationCounts) -> f64 {
    let kinds = counts.distinct_kinds();
    if kinds == 0 {
        return 0.0;
    }
    let variety = ((kinds - 1) as f64 / (FULL_VARIETY_KINDS - 1) as f64).min(1.0);
    VARIETY_WEIGHT * variety + EVENNESS_WEIGHT * normalized_entropy(counts)
}

pub fn score(features: &FeatureSet) -> f64 {
    if features.is_empty() {
        return 0.0;
    }
    if features.punctuation.total() == 0 {
        return NO_PUNCTUATION_SCORE;
    }
    clamp_score(100.0 * (1.0 - diversity(&features.punctuation)))
}
