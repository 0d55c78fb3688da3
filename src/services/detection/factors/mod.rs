// Factor Scorers
// Fixed registry mapping each factor name to a pure scoring function.
// - repetition: repeated words and word n-grams
// - sentence_structure: sentence length uniformity and opener variety
// - punctuation: narrowness of punctuation usage
// - passive_voice: share of passive sentences
// - human_style: conversational and personal markers
// - style_consistency: stability of style across segments

pub mod human_style;
pub mod passive_voice;
pub mod punctuation;
pub mod repetition;
pub mod sentence_structure;
pub mod style_consistency;

use super::features::FeatureSet;
use super::stats::{clamp_score, round_to};
use crate::models::{FactorName, FactorScores};

/// A scorer maps features to an intensity in [0, 100].
pub type Scorer = fn(&FeatureSet) -> f64;

pub const REGISTRY: [(FactorName, Scorer); 6] = [
    (FactorName::RepetitivePatterns, repetition::score),
    (FactorName::SentenceStructure, sentence_structure::score),
    (FactorName::PunctuationDiversity, punctuation::score),
    (FactorName::PassiveVoice, passive_voice::score),
    (FactorName::HumanStyle, human_style::score),
    (FactorName::StyleConsistency, style_consistency::score),
];

/// Score neutral factors default to when there is not enough material.
pub const NEUTRAL_SCORE: f64 = 50.0;

pub fn scorer_for(name: FactorName) -> Scorer {
    match name {
        FactorName::RepetitivePatterns => repetition::score,
        FactorName::SentenceStructure => sentence_structure::score,
        FactorName::PunctuationDiversity => punctuation::score,
        FactorName::PassiveVoice => passive_voice::score,
        FactorName::HumanStyle => human_style::score,
        FactorName::StyleConsistency => style_consistency::score,
    }
}

/// Run every registered scorer; values are clamped and rounded to one decimal.
pub fn score_all(features: &FeatureSet) -> FactorScores {
    let mut scores = FactorScores::default();
    for (name, scorer) in REGISTRY {
        scores.set(name, round_to(clamp_score(scorer(features)), 1));
    }
    scores
}
