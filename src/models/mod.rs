// CipherWrite Data Models
// Shared result types produced by the detection engine

use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Factors ============

/// One of the six stylistic dimensions scored by the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorName {
    RepetitivePatterns,
    SentenceStructure,
    PunctuationDiversity,
    PassiveVoice,
    HumanStyle,
    StyleConsistency,
}

impl FactorName {
    /// Canonical order used for iteration, tie-breaking and display fallbacks.
    pub const ALL: [FactorName; 6] = [
        FactorName::RepetitivePatterns,
        FactorName::SentenceStructure,
        FactorName::PunctuationDiversity,
        FactorName::PassiveVoice,
        FactorName::HumanStyle,
        FactorName::StyleConsistency,
    ];

    /// Key used in serialized `details`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RepetitivePatterns => "repetitivePatterns",
            Self::SentenceStructure => "sentenceStructure",
            Self::PunctuationDiversity => "punctuationDiversity",
            Self::PassiveVoice => "passiveVoice",
            Self::HumanStyle => "humanStyle",
            Self::StyleConsistency => "styleConsistency",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RepetitivePatterns => "Repetitive Patterns",
            Self::SentenceStructure => "Sentence Structure",
            Self::PunctuationDiversity => "Punctuation Diversity",
            Self::PassiveVoice => "Passive Voice",
            Self::HumanStyle => "Human Style Markers",
            Self::StyleConsistency => "Style Consistency",
        }
    }

    /// Every factor except `HumanStyle` pushes the score toward "AI".
    pub fn is_ai_indicator(&self) -> bool {
        !matches!(self, Self::HumanStyle)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

impl fmt::Display for FactorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-factor intensities in [0, 100].
///
/// A struct rather than a map so that every result carries exactly the six
/// keys; serializes to `{"repetitivePatterns": .., ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScores {
    pub repetitive_patterns: f64,
    pub sentence_structure: f64,
    pub punctuation_diversity: f64,
    pub passive_voice: f64,
    pub human_style: f64,
    pub style_consistency: f64,
}

impl FactorScores {
    pub fn get(&self, name: FactorName) -> f64 {
        match name {
            FactorName::RepetitivePatterns => self.repetitive_patterns,
            FactorName::SentenceStructure => self.sentence_structure,
            FactorName::PunctuationDiversity => self.punctuation_diversity,
            FactorName::PassiveVoice => self.passive_voice,
            FactorName::HumanStyle => self.human_style,
            FactorName::StyleConsistency => self.style_consistency,
        }
    }

    pub fn set(&mut self, name: FactorName, value: f64) {
        let slot = match name {
            FactorName::RepetitivePatterns => &mut self.repetitive_patterns,
            FactorName::SentenceStructure => &mut self.sentence_structure,
            FactorName::PunctuationDiversity => &mut self.punctuation_diversity,
            FactorName::PassiveVoice => &mut self.passive_voice,
            FactorName::HumanStyle => &mut self.human_style,
            FactorName::StyleConsistency => &mut self.style_consistency,
        };
        *slot = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (FactorName, f64)> + '_ {
        FactorName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }

    /// Values of the five AI-indicating factors, in canonical order.
    pub fn ai_indicator_values(&self) -> Vec<f64> {
        self.iter()
            .filter(|(name, _)| name.is_ai_indicator())
            .map(|(_, value)| value)
            .collect()
    }
}

// ============ Confidence & Bands ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Insufficient,
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insufficient => "insufficient",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse reading of the score, using the gauge cut points 80 / 20.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Ai,
    Neutral,
    Human,
}

pub const AI_BAND_MIN: f64 = 80.0;
pub const HUMAN_BAND_MAX: f64 = 20.0;

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= AI_BAND_MIN {
            Self::Ai
        } else if score <= HUMAN_BAND_MAX {
            Self::Human
        } else {
            Self::Neutral
        }
    }
}

// ============ Analysis Result ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Probability (0-100) that the text is machine-generated.
    pub score: f64,
    pub confidence: Confidence,
    pub explanation: String,
    pub details: FactorScores,
}

impl AnalysisResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

// ============ Text Statistics ============

/// Display-oriented counts; not part of the scoring contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub characters: usize,
    pub non_blank_characters: usize,
    pub words: usize,
    pub spaces: usize,
    pub sentences: usize,
    pub lines: usize,
    pub non_empty_lines: usize,
    pub pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_scores_serialize_with_exact_keys() {
        let scores = FactorScores::default();
        let json = serde_json::to_value(scores).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        for name in FactorName::ALL {
            assert!(obj.contains_key(name.as_str()), "missing {}", name);
        }
    }

    #[test]
    fn test_factor_scores_get_set() {
        let mut scores = FactorScores::default();
        scores.set(FactorName::PassiveVoice, 42.0);
        assert_eq!(scores.get(FactorName::PassiveVoice), 42.0);
        assert_eq!(scores.passive_voice, 42.0);
        assert_eq!(scores.ai_indicator_values().len(), 5);
    }

    #[test]
    fn test_from_key_roundtrips_names() {
        for name in FactorName::ALL {
            assert_eq!(FactorName::from_key(name.as_str()), Some(name));
        }
        assert_eq!(FactorName::from_key("unknown"), None);
    }

    #[test]
    fn test_confidence_serializes_lowercase() {
        let json = serde_json::to_string(&Confidence::Insufficient).unwrap();
        assert_eq!(json, "\"insufficient\"");
    }

    #[test]
    fn test_score_band_cut_points() {
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Ai);
        assert_eq!(ScoreBand::from_score(79.0), ScoreBand::Neutral);
        assert_eq!(ScoreBand::from_score(20.0), ScoreBand::Human);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::Human);
    }
}
