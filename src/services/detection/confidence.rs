// Confidence Estimation
// Length gate plus agreement among the AI-indicating factors

use super::stats::std_dev;
use crate::models::{Confidence, FactorScores};
use crate::services::text_processor::count_non_whitespace;

/// Minimum non-whitespace characters for any verdict beyond `insufficient`.
pub const MIN_CHARS: usize = 100;

#[derive(Debug, Clone, Copy)]
struct AgreementProfile {
    /// Spread (std dev of AI factors) above which signals conflict.
    low_spread: f64,
    /// Spread at or below which factors count as agreeing.
    high_spread: f64,
    /// Minimum |score - 50| / 50 for a `high` verdict.
    high_extremity: f64,
}

const PROFILE: AgreementProfile = AgreementProfile {
    low_spread: 30.0,
    high_spread: 15.0,
    high_extremity: 0.4,
};

/// Standard deviation of the five AI-indicating factors.
pub fn factor_spread(details: &FactorScores) -> f64 {
    std_dev(&details.ai_indicator_values())
}

/// Distance of the score from the midpoint, in [0, 1].
pub fn extremity(score: f64) -> f64 {
    ((score - 50.0).abs() / 50.0).min(1.0)
}

/// Bucket agreement and extremity into a confidence level.
///
/// Monotonic: smaller spread combined with a more extreme score never yields
/// a lower level.
pub fn classify(spread: f64, score: f64) -> Confidence {
    if spread > PROFILE.low_spread {
        Confidence::Low
    } else if spread <= PROFILE.high_spread && extremity(score) >= PROFILE.high_extremity {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

pub fn estimate(text: &str, score: f64, details: &FactorScores) -> Confidence {
    if count_non_whitespace(text) < MIN_CHARS {
        return Confidence::Insufficient;
    }
    classify(factor_spread(details), score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FactorName;

    fn uniform(value: f64) -> FactorScores {
        let mut details = FactorScores::default();
        for name in FactorName::ALL {
            details.set(name, value);
        }
        details
    }

    #[test]
    fn test_short_text_is_insufficient() {
        let text = "x".repeat(99);
        assert_eq!(estimate(&text, 95.0, &uniform(95.0)), Confidence::Insufficient);
        let spaced = format!("{}{}", " ".repeat(50), "y".repeat(99));
        assert_eq!(estimate(&spaced, 95.0, &uniform(95.0)), Confidence::Insufficient);
    }

    #[test]
    fn test_exactly_min_chars_is_classified() {
        let text = "x".repeat(MIN_CHARS);
        assert_eq!(estimate(&text, 95.0, &uniform(95.0)), Confidence::High);
    }

    #[test]
    fn test_buckets() {
        assert_eq!(classify(5.0, 90.0), Confidence::High);
        assert_eq!(classify(5.0, 10.0), Confidence::High);
        assert_eq!(classify(5.0, 55.0), Confidence::Medium);
        assert_eq!(classify(20.0, 90.0), Confidence::Medium);
        assert_eq!(classify(35.0, 90.0), Confidence::Low);
    }

    #[test]
    fn test_monotonic_over_grid() {
        let spreads = [0.0, 10.0, 15.0, 20.0, 30.0, 31.0, 45.0];
        let scores = [0.0, 15.0, 30.0, 50.0, 70.0, 85.0, 100.0];
        for &s1 in &spreads {
            for &s2 in &spreads {
                for &x1 in &scores {
                    for &x2 in &scores {
                        if s1 <= s2 && extremity(x1) >= extremity(x2) {
                            assert!(classify(s1, x1) >= classify(s2, x2));
                        }
                    }
                }
            }
        }
    }
}
