// Explanation Generator
// One or two plain-language sentences naming the verdict and the dominant signals

use super::aggregation::contributions;
use crate::models::{Confidence, FactorName, FactorScores, ScoreBand};
use std::cmp::Ordering;

/// Contributions smaller than this (in score points) are not worth naming.
const MIN_CONTRIBUTION: f64 = 1.0;

pub const EMPTY_TEXT_EXPLANATION: &str = "No text was provided, so there is nothing to analyze.";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Verdict {
    LikelyAi,
    Mixed,
    LikelyHuman,
}

impl Verdict {
    /// Same cut points as the score bands, so the verdict never disagrees
    /// with the band a caller renders.
    pub fn from_score(score: f64) -> Self {
        match ScoreBand::from_score(score) {
            ScoreBand::Ai => Self::LikelyAi,
            ScoreBand::Neutral => Self::Mixed,
            ScoreBand::Human => Self::LikelyHuman,
        }
    }

    fn agrees_with(&self, contribution: f64) -> bool {
        match self {
            Self::LikelyAi => contribution > 0.0,
            Self::LikelyHuman => contribution < 0.0,
            Self::Mixed => true,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Self::LikelyAi => "likely AI-generated",
            Self::Mixed => "mixed signals",
            Self::LikelyHuman => "likely human-written",
        }
    }
}

/// Describe a factor in the direction it pushed the score.
fn describe(name: FactorName, contribution: f64) -> &'static str {
    let toward_ai = contribution > 0.0;
    match (name, toward_ai) {
        (FactorName::RepetitivePatterns, true) => "frequent repetition of words and phrases",
        (FactorName::RepetitivePatterns, false) => "little repeated phrasing",
        (FactorName::SentenceStructure, true) => "uniform sentence lengths and openings",
        (FactorName::SentenceStructure, false) => "varied sentence structure",
        (FactorName::PunctuationDiversity, true) => "a narrow range of punctuation",
        (FactorName::PunctuationDiversity, false) => "varied punctuation",
        (FactorName::PassiveVoice, true) => "heavy use of passive voice",
        (FactorName::PassiveVoice, false) => "mostly active voice",
        (FactorName::HumanStyle, true) => "an absence of conversational, personal markers",
        (FactorName::HumanStyle, false) => "conversational, personal style markers",
        (FactorName::StyleConsistency, true) => "an unusually consistent style throughout",
        (FactorName::StyleConsistency, false) => "natural shifts in style",
    }
}

/// Factors worth naming for `verdict`, strongest first.
///
/// A clear verdict names up to two factors that pushed the score its way.
/// A mixed verdict names the strongest factor and the strongest one pulling
/// against it. Ties keep canonical order.
pub fn dominant_factors(details: &FactorScores, verdict: Verdict) -> Vec<(FactorName, f64)> {
    let mut ranked: Vec<(FactorName, f64)> = contributions(details)
        .into_iter()
        .filter(|&(_, value)| value.abs() >= MIN_CONTRIBUTION && verdict.agrees_with(value))
        .collect();
    ranked.sort_by(|a, b| b.1.abs().partial_cmp(&a.1.abs()).unwrap_or(Ordering::Equal));

    if verdict != Verdict::Mixed {
        ranked.truncate(2);
        return ranked;
    }

    let mut picked = Vec::with_capacity(2);
    if let Some(&(name, top)) = ranked.first() {
        picked.push((name, top));
        if let Some(&opposing) = ranked.iter().find(|(_, value)| value.signum() != top.signum()) {
            picked.push(opposing);
        }
    }
    picked
}

fn signal_sentence(dominant: &[(FactorName, f64)]) -> String {
    match dominant {
        [] => "No single factor stands out.".to_string(),
        [(name, value)] => format!("The dominant signal is {}.", describe(*name, *value)),
        [(a, va), (b, vb), ..] => format!(
            "The dominant signals are {} and {}.",
            describe(*a, *va),
            describe(*b, *vb)
        ),
    }
}

fn verdict_sentence(verdict: Verdict, confidence: Confidence) -> String {
    match (verdict, confidence) {
        (Verdict::Mixed, Confidence::Insufficient) => {
            "The text is too short for a reliable verdict and shows mixed signals.".to_string()
        }
        (_, Confidence::Insufficient) => format!(
            "The text is too short for a reliable verdict, but it reads as {}.",
            verdict.phrase()
        ),
        (Verdict::Mixed, _) => "The text shows mixed signals.".to_string(),
        (_, _) => format!("The text is {}.", verdict.phrase()),
    }
}

/// Build the explanation. Never mentions weights, only factor names and the verdict.
pub fn explain(score: f64, confidence: Confidence, details: &FactorScores) -> String {
    let verdict = Verdict::from_score(score);
    let dominant = dominant_factors(details, verdict);
    format!(
        "{} {}",
        verdict_sentence(verdict, confidence),
        signal_sentence(&dominant)
    )
}
