// Repetitive Patterns
// Recurrence of content words and word n-grams relative to token count

use crate::services::detection::features::{FeatureSet, NgramTable};
use crate::services::detection::stats::{clamp_score, mean, safe_ratio};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Share of repeated content words at which the word component saturates.
const WORD_REPEAT_SATURATION: f64 = 0.4;
/// Share of repeated n-grams at which the n-gram component saturates.
const NGRAM_REPEAT_SATURATION: f64 = 0.2;
const WORD_WEIGHT: f64 = 0.5;
const NGRAM_WEIGHT: f64 = 0.5;

fn stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        [
            "a", "about", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
            "being", "but", "by", "can", "could", "did", "do", "does", "for", "from", "had",
            "has", "have", "he", "her", "here", "his", "how", "i", "if", "in", "into", "is",
            "it", "its", "just", "may", "more", "most", "my", "no", "not", "of", "on", "or",
            "our", "she", "should", "so", "some", "such", "than", "that", "the", "their",
            "them", "then", "there", "these", "they", "this", "those", "to", "us", "very",
            "was", "we", "were", "what", "when", "where", "which", "who", "will", "with",
            "would", "you", "your",
        ]
        .into_iter()
        .collect()
    })
}

pub fn is_stopword(token: &str) -> bool {
    stopwords().contains(token)
}

/// Fraction of content-word occurrences that repeat an earlier one.
pub fn word_repeat_rate(tokens: &[String]) -> f64 {
    let mut freq: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;
    for token in tokens.iter().filter(|t| !is_stopword(t)) {
        *freq.entry(token.as_str()).or_insert(0) += 1;
        total += 1;
    }
    let repeats = total - freq.len();
    safe_ratio(repeats as f64, total as f64)
}

/// Mean repeated-occurrence rate over the non-empty n-gram tables.
pub fn ngram_repeat_rate(tables: &[NgramTable]) -> f64 {
    let rates: Vec<f64> = tables
        .iter()
        .filter(|t| t.total > 0)
        .map(|t| safe_ratio(t.repeated_occurrences() as f64, t.total as f64))
        .collect();
    mean(&rates)
}

pub fn score(features: &FeatureSet) -> f64 {
    if features.tokens.is_empty() {
        return 0.0;
    }
    let word = (word_repeat_rate(&features.tokens) / WORD_REPEAT_SATURATION).min(1.0);
    let ngram = (ngram_repeat_rate(&features.ngrams) / NGRAM_REPEAT_SATURATION).min(1.0);
    clamp_score(100.0 * (WORD_WEIGHT * word + NGRAM_WEIGHT * ngram))
}
