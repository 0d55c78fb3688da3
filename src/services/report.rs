// Result Presentation
// Suggestions, factor bars and the text/JSON reports built from an analysis

use crate::models::{AnalysisResult, Confidence, FactorName, FactorScores, TextStatistics};
use crate::services::text_processor::compute_text_statistics;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Write as _;

/// Results scoring below this are human-like enough that no suggestions are shown.
pub const SUGGESTION_MIN_SCORE: f64 = 30.0;
pub const AI_FACTOR_SUGGESTION_THRESHOLD: f64 = 60.0;
/// Human-style suggestions fire when markers fall below this intensity.
///
/// `humanStyle` measures how much personal voice is present, so the rule is
/// `< 50` rather than the `> 50` used for the AI-indicating factors: advising
/// "add personal opinions" only makes sense when markers are scarce.
pub const HUMAN_STYLE_SUGGESTION_THRESHOLD: f64 = 50.0;

// Bar colouring, as in the factor breakdown view
const BAR_HIGH: f64 = 80.0;
const BAR_MID: f64 = 50.0;
const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub icon: &'static str,
    pub text: &'static str,
}

const REDUCE_REPETITION: Suggestion = Suggestion {
    icon: "🔄",
    text: "Reduce repetitive phrases and find synonyms for words that appear multiple times.",
};
const VARY_STRUCTURE: Suggestion = Suggestion {
    icon: "📝",
    text: "Vary your sentence structures. Mix short sentences with longer ones, and use different ways to start sentences.",
};
const VARY_PUNCTUATION: Suggestion = Suggestion {
    icon: "❗",
    text: "Add more variety to your punctuation. Try using question marks, exclamation points, em dashes, or semicolons occasionally.",
};
const ACTIVE_VOICE: Suggestion = Suggestion {
    icon: "🗣️",
    text: "Use more active voice instead of passive voice. For example, say \"We analyzed the data\" instead of \"The data was analyzed.\"",
};
const PERSONAL_OPINIONS: Suggestion = Suggestion {
    icon: "👤",
    text: "Add personal opinions or experiences. Use informal phrases occasionally, like \"I think\" or \"in my opinion.\"",
};
const CONVERSATIONAL: Suggestion = Suggestion {
    icon: "🗨️",
    text: "Include some conversational elements like contractions (don't, I'm, we've) or casual transitions (\"anyway\", \"actually\", \"by the way\").",
};
const GENERIC: [Suggestion; 2] = [
    Suggestion {
        icon: "📚",
        text: "Consider adding a personal anecdote or example that illustrates your point.",
    },
    Suggestion {
        icon: "🔍",
        text: "Try varying your vocabulary with more specific or unconventional word choices occasionally.",
    },
];

/// Improvement suggestions keyed off factor thresholds.
///
/// Empty when the score is already human-like. Falls back to two generic
/// suggestions when no threshold fires. AI-indicating factors fire above
/// their threshold; `humanStyle` fires below its own.
pub fn suggestions(result: &AnalysisResult) -> Vec<Suggestion> {
    if result.score < SUGGESTION_MIN_SCORE {
        return Vec::new();
    }

    let d = &result.details;
    let mut out = Vec::new();
    let ai_rules = [
        (d.repetitive_patterns, REDUCE_REPETITION),
        (d.sentence_structure, VARY_STRUCTURE),
        (d.punctuation_diversity, VARY_PUNCTUATION),
        (d.passive_voice, ACTIVE_VOICE),
    ];
    for (value, suggestion) in ai_rules {
        if value > AI_FACTOR_SUGGESTION_THRESHOLD {
            out.push(suggestion);
        }
    }
    if d.human_style < HUMAN_STYLE_SUGGESTION_THRESHOLD {
        out.push(PERSONAL_OPINIONS);
        out.push(CONVERSATIONAL);
    }

    if out.is_empty() {
        out.extend(GENERIC);
    }
    out
}

pub fn factor_description(name: FactorName) -> &'static str {
    match name {
        FactorName::RepetitivePatterns => "Analyzes how often words and phrases are repeated throughout the text. AI tends to reuse similar patterns more frequently than humans.",
        FactorName::SentenceStructure => "Examines the variety of sentence constructions and transition phrases. AI often uses more formal and predictable structures.",
        FactorName::PunctuationDiversity => "Measures how varied the punctuation usage is. Humans typically use a wider range of punctuation marks with less predictable patterns.",
        FactorName::PassiveVoice => "Evaluates the balance of passive vs. active voice. AI-generated text often contains more passive voice constructions.",
        FactorName::HumanStyle => "Identifies conversational elements, personal opinions, and informal expressions that are more common in human writing.",
        FactorName::StyleConsistency => "Analyzes how consistent the writing style remains throughout the text. AI typically maintains a more uniform style.",
    }
}

pub fn confidence_message(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "Multiple consistent indicators were found in the text, leading to a high confidence assessment.",
        Confidence::Medium => "Some indicators were found, but the pattern is not conclusive. Consider providing more text for a more accurate analysis.",
        Confidence::Low => "The text contains mixed or conflicting indicators, resulting in lower confidence in this assessment.",
        Confidence::Insufficient => "Unable to provide reliable analysis. Please provide longer text (at least 100 characters).",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarLevel {
    High,
    Mid,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBar {
    pub name: FactorName,
    pub value: f64,
    pub level: BarLevel,
}

/// Factors sorted by value, highest first; ties keep canonical order.
pub fn factor_bars(details: &FactorScores) -> Vec<FactorBar> {
    let mut bars: Vec<FactorBar> = details
        .iter()
        .map(|(name, value)| FactorBar {
            name,
            value,
            level: if value >= BAR_HIGH {
                BarLevel::High
            } else if value >= BAR_MID {
                BarLevel::Mid
            } else {
                BarLevel::Low
            },
        })
        .collect();
    bars.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    bars
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Everything shown for one analysis, ready to print or serialize.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub statistics: TextStatistics,
    pub suggestions: Vec<Suggestion>,
    pub analyzed_at: String,
}

impl Report {
    pub fn new(source: Option<String>, text: &str, result: AnalysisResult) -> Self {
        Self {
            source,
            statistics: compute_text_statistics(text),
            suggestions: suggestions(&result),
            result,
            analyzed_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Plain-text report in the layout of the "copy results" export, plus a
    /// factor breakdown.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let r = &self.result;

        let _ = writeln!(out, "CipherWrite Analysis Results");
        if let Some(source) = &self.source {
            let _ = writeln!(out, "Source: {}", source);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "AI Probability: {}%", r.score.round());
        let _ = writeln!(out, "Confidence: {}", capitalize(r.confidence.as_str()));
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", r.explanation);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", confidence_message(r.confidence));

        let _ = writeln!(out);
        let _ = writeln!(out, "Factor Breakdown:");
        for bar in factor_bars(&r.details) {
            let filled = ((bar.value / 100.0) * BAR_WIDTH as f64).round() as usize;
            let _ = writeln!(
                out,
                "  {:<24} [{}{}] {:>3}%",
                bar.name.display_name(),
                "#".repeat(filled),
                "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
                bar.value.round()
            );
        }

        let s = &self.statistics;
        let _ = writeln!(out);
        let _ = writeln!(out, "Text Statistics:");
        let _ = writeln!(out, "Characters: {}", s.characters);
        let _ = writeln!(out, "Words: {}", s.words);
        let _ = writeln!(out, "Sentences: {}", s.sentences);
        let _ = writeln!(out, "Pages (est.): {}", s.pages);

        if !self.suggestions.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Improvement Suggestions:");
            for suggestion in &self.suggestions {
                let _ = writeln!(out, "• {}", suggestion.text);
            }
        }

        let _ = writeln!(out);
        let _ = write!(out, "Analyzed on: {}", self.analyzed_at);
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(score: f64, values: [f64; 6]) -> AnalysisResult {
        let mut details = FactorScores::default();
        for (name, v) in FactorName::ALL.into_iter().zip(values) {
            details.set(name, v);
        }
        AnalysisResult {
            score,
            confidence: Confidence::High,
            explanation: "The text is likely AI-generated.".to_string(),
            details,
        }
    }

    #[test]
    fn test_no_suggestions_for_human_like_score() {
        let result = result_with(29.0, [90.0, 90.0, 90.0, 90.0, 0.0, 90.0]);
        assert!(suggestions(&result).is_empty());
    }

    #[test]
    fn test_threshold_suggestions() {
        // repetition, structure, punctuation, passive, human, consistency
        let result = result_with(85.0, [61.0, 60.0, 70.0, 10.0, 20.0, 90.0]);
        let got = suggestions(&result);
        assert_eq!(got, vec![REDUCE_REPETITION, VARY_PUNCTUATION, PERSONAL_OPINIONS, CONVERSATIONAL]);
    }

    #[test]
    fn test_human_style_suggestion_fires_on_scarce_markers() {
        let personal = [PERSONAL_OPINIONS, CONVERSATIONAL];
        let scarce = suggestions(&result_with(70.0, [40.0, 40.0, 40.0, 40.0, 49.9, 70.0]));
        assert_eq!(scarce, personal.to_vec());

        // Plentiful markers: nothing to add, so only the generic advice remains
        for human_style in [50.0, 90.0] {
            let got = suggestions(&result_with(70.0, [40.0, 40.0, 40.0, 40.0, human_style, 70.0]));
            assert!(got.iter().all(|s| !personal.contains(s)), "{}", human_style);
        }
    }

    #[test]
    fn test_generic_fallback() {
        let result = result_with(45.0, [40.0, 40.0, 40.0, 40.0, 80.0, 70.0]);
        assert_eq!(suggestions(&result), GENERIC.to_vec());
    }

    #[test]
    fn test_factor_bars_sorted_descending() {
        let result = result_with(50.0, [10.0, 90.0, 50.0, 50.0, 30.0, 85.0]);
        let bars = factor_bars(&result.details);
        let names: Vec<FactorName> = bars.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            vec![
                FactorName::SentenceStructure,
                FactorName::StyleConsistency,
                FactorName::PunctuationDiversity,
                FactorName::PassiveVoice,
                FactorName::HumanStyle,
                FactorName::RepetitivePatterns,
            ]
        );
        assert_eq!(bars[0].level, BarLevel::High);
        assert_eq!(bars[2].level, BarLevel::Mid);
        assert_eq!(bars[5].level, BarLevel::Low);
    }

    #[test]
    fn test_text_report_layout() {
        let result = result_with(85.0, [61.0, 60.0, 70.0, 10.0, 20.0, 90.0]);
        let report = Report::new(Some("essay.txt".into()), "One sentence here. Another one!", result);
        let text = report.render_text();
        assert!(text.starts_with("CipherWrite Analysis Results\nSource: essay.txt\n"));
        assert!(text.contains("AI Probability: 85%"));
        assert!(text.contains("Confidence: High"));
        assert!(text.contains("Words: 5"));
        assert!(text.contains("Sentences: 2"));
        assert!(text.contains("Improvement Suggestions:\n• Reduce repetitive phrases"));
        assert!(text.contains("Analyzed on: "));
    }

    #[test]
    fn test_json_report_flattens_result() {
        let result = result_with(10.0, [0.0; 6]);
        let report = Report::new(None, "", result);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["score"], 10.0);
        assert_eq!(value["confidence"], "high");
        assert_eq!(value["details"]["humanStyle"], 0.0);
        assert!(value["suggestions"].as_array().unwrap().is_empty());
        assert!(value.get("source").is_none());
        assert!(value["statistics"]["words"].is_number());
    }
}
