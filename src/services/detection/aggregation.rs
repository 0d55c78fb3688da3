// Aggregation Logic
// Combines the six factor scores into one AI-probability score

use super::stats::{clamp_score, round_to};
use crate::models::{FactorName, FactorScores};

/// Midpoint used as the "no evidence either way" reference.
pub const NEUTRAL_POINT: f64 = 50.0;

/// Weight of the human-style factor; its deviation from neutral is subtracted.
pub const HUMAN_STYLE_WEIGHT: f64 = 0.5;

/// Per-factor weight. The AI-indicating weights sum to 0.5, matching the
/// human-style weight, so a fully AI-like vector reaches 100 and a fully
/// human-like one reaches 0.
pub fn weight(name: FactorName) -> f64 {
    match name {
        FactorName::RepetitivePatterns => 0.11,
        FactorName::SentenceStructure => 0.09,
        FactorName::PunctuationDiversity => 0.08,
        FactorName::PassiveVoice => 0.10,
        FactorName::StyleConsistency => 0.12,
        FactorName::HumanStyle => -HUMAN_STYLE_WEIGHT,
    }
}

/// Aggregate factor scores into a whole-number score in [0, 100].
///
/// The neutral point plus the sum of all contributions, so an all-neutral
/// vector scores 50 and the score moves in the same direction as the factors
/// the explanation names. Monotonic non-decreasing in each AI-indicating
/// factor and non-increasing in `humanStyle`.
pub fn aggregate(details: &FactorScores) -> f64 {
    let shift: f64 = contributions(details).into_iter().map(|(_, c)| c).sum();
    round_to(clamp_score(NEUTRAL_POINT + shift), 0)
}

/// Signed contribution of each factor relative to a neutral reading.
///
/// Positive values push toward "AI-generated", negative toward "human-written".
pub fn contributions(details: &FactorScores) -> Vec<(FactorName, f64)> {
    details
        .iter()
        .map(|(name, value)| (name, weight(name) * (value - NEUTRAL_POINT)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_with(ai: f64, human: f64) -> FactorScores {
        let mut details = FactorScores::default();
        for name in FactorName::ALL {
            details.set(name, if name.is_ai_indicator() { ai } else { human });
        }
        details
    }

    #[test]
    fn test_all_human_yields_zero() {
        assert_eq!(aggregate(&scores_with(0.0, 100.0)), 0.0);
    }

    #[test]
    fn test_all_ai_yields_hundred() {
        assert_eq!(aggregate(&scores_with(100.0, 0.0)), 100.0);
    }

    #[test]
    fn test_all_neutral_yields_midpoint() {
        assert_eq!(aggregate(&scores_with(50.0, 50.0)), 50.0);
    }

    #[test]
    fn test_score_equals_neutral_plus_contributions() {
        let mut details = scores_with(70.0, 20.0);
        details.set(FactorName::PassiveVoice, 10.0);
        let shift: f64 = contributions(&details).iter().map(|(_, c)| c).sum();
        assert_eq!(aggregate(&details), (NEUTRAL_POINT + shift).round());
        // 50 + 0.40 * 20 - 0.10 * 40 + 0.5 * 30
        assert_eq!(aggregate(&details), 69.0);
    }

    #[test]
    fn test_ai_weights_balance_human_weight() {
        let total: f64 = FactorName::ALL
            .into_iter()
            .filter(|n| n.is_ai_indicator())
            .map(weight)
            .sum();
        assert!((total - HUMAN_STYLE_WEIGHT).abs() < 1e-12);
    }

    #[test]
    fn test_reliable_factors_weigh_at_least_as_much() {
        for heavy in [FactorName::StyleConsistency, FactorName::RepetitivePatterns] {
            for light in [FactorName::SentenceStructure, FactorName::PunctuationDiversity] {
                assert!(weight(heavy) >= weight(light));
            }
        }
    }

    #[test]
    fn test_monotonic_in_each_factor() {
        let base = scores_with(40.0, 30.0);
        let base_score = aggregate(&base);
        for name in FactorName::ALL {
            let mut bumped = base;
            bumped.set(name, 90.0);
            if name.is_ai_indicator() {
                assert!(aggregate(&bumped) >= base_score, "{} should not lower score", name);
            } else {
                assert!(aggregate(&bumped) <= base_score);
            }
        }
    }

    #[test]
    fn test_contributions_sign() {
        let contribs = contributions(&scores_with(80.0, 80.0));
        for (name, value) in contribs {
            if name.is_ai_indicator() {
                assert!(value > 0.0);
            } else {
                assert!(value < 0.0);
            }
        }
    }
}
