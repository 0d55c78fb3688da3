// Numeric helpers
// Guarded statistics shared by the scorers, aggregator and confidence estimator

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Clamp to [0, 100]; non-finite input maps to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(SCORE_MIN, SCORE_MAX)
    } else {
        SCORE_MIN
    }
}

/// Ratio with a zero-denominator guard.
pub fn safe_ratio(numer: f64, denom: f64) -> f64 {
    if denom <= 0.0 {
        0.0
    } else {
        numer / denom
    }
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Standard deviation over mean; 0 when the mean is not positive.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let m = mean(values);
    if m <= 0.0 {
        return 0.0;
    }
    std_dev(values) / m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_handles_non_finite() {
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(f64::INFINITY), 0.0);
        assert_eq!(clamp_score(150.0), 100.0);
        assert_eq!(clamp_score(-3.0), 0.0);
    }

    #[test]
    fn test_safe_ratio_guards_zero() {
        assert_eq!(safe_ratio(5.0, 0.0), 0.0);
        assert_eq!(safe_ratio(1.0, 4.0), 0.25);
    }

    #[test]
    fn test_std_dev_and_cv() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[4.0, 4.0, 4.0]), 0.0);
        assert!((std_dev(&[2.0, 4.0]) - 1.0).abs() < 1e-12);
        assert!((coefficient_of_variation(&[2.0, 4.0]) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(coefficient_of_variation(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.345_67, 1), 12.3);
        assert_eq!(round_to(87.5, 0), 88.0);
    }
}
