// Feature Extraction
// Turns raw text into the primitive measurements every factor scorer consumes

use crate::services::text_processor::{
    count_non_whitespace, normalize_token, split_sentences, split_words,
};
use std::collections::BTreeMap;

pub const NGRAM_MIN_N: usize = 2;
pub const NGRAM_MAX_N: usize = 4;

/// Punctuation kinds tracked for diversity scoring.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum PunctuationMark {
    Period,
    Comma,
    Semicolon,
    Colon,
    Dash,
    Exclamation,
    Question,
    Quote,
    Parenthesis,
}

impl PunctuationMark {
    pub const ALL: [PunctuationMark; 9] = [
        PunctuationMark::Period,
        PunctuationMark::Comma,
        PunctuationMark::Semicolon,
        PunctuationMark::Colon,
        PunctuationMark::Dash,
        PunctuationMark::Exclamation,
        PunctuationMark::Question,
        PunctuationMark::Quote,
        PunctuationMark::Parenthesis,
    ];

    fn classify(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Period),
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            ':' => Some(Self::Colon),
            '\u{2014}' | '\u{2013}' => Some(Self::Dash),
            '!' => Some(Self::Exclamation),
            '?' => Some(Self::Question),
            '"' | '\u{201c}' | '\u{201d}' | '\u{00ab}' | '\u{00bb}' => Some(Self::Quote),
            '(' | ')' => Some(Self::Parenthesis),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunctuationCounts {
    counts: BTreeMap<PunctuationMark, usize>,
}

impl PunctuationCounts {
    fn record(&mut self, mark: PunctuationMark) {
        *self.counts.entry(mark).or_insert(0) += 1;
    }

    pub fn get(&self, mark: PunctuationMark) -> usize {
        self.counts.get(&mark).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct kinds that occur at least once.
    pub fn distinct_kinds(&self) -> usize {
        self.counts.values().filter(|&&c| c > 0).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PunctuationMark, usize)> + '_ {
        self.counts.iter().map(|(mark, count)| (*mark, *count))
    }
}

/// Count punctuation by kind.
///
/// A hyphen only counts as a dash when it stands apart from words
/// (`" - "` or a `--` run); intra-word hyphens are ignored.
pub fn count_punctuation(text: &str) -> PunctuationCounts {
    let mut counts = PunctuationCounts::default();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch == '-' {
            let run_start = i;
            while i < chars.len() && chars[i] == '-' {
                i += 1;
            }
            let run_len = i - run_start;
            let before_ws = run_start == 0 || chars[run_start - 1].is_whitespace();
            let after_ws = i == chars.len() || chars[i].is_whitespace();
            if run_len >= 2 || (before_ws && after_ws) {
                counts.record(PunctuationMark::Dash);
            }
            continue;
        }
        if let Some(mark) = PunctuationMark::classify(ch) {
            counts.record(mark);
        }
        i += 1;
    }

    counts
}

/// Frequency table for word n-grams of a single size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NgramTable {
    pub n: usize,
    pub counts: BTreeMap<String, usize>,
    pub total: usize,
}

impl NgramTable {
    pub fn build(tokens: &[String], n: usize) -> Self {
        let mut table = NgramTable {
            n,
            ..Default::default()
        };
        if n == 0 || tokens.len() < n {
            return table;
        }
        for window in tokens.windows(n) {
            *table.counts.entry(window.join(" ")).or_insert(0) += 1;
            table.total += 1;
        }
        table
    }

    /// Occurrences beyond the first, summed over all n-grams.
    pub fn repeated_occurrences(&self) -> usize {
        self.counts.values().filter(|&&c| c >= 2).map(|&c| c - 1).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    /// Normalized tokens (lowercase, edge punctuation stripped).
    pub tokens: Vec<String>,
}

impl Sentence {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn first_token(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }
}

/// Read-only measurements derived once per analysis call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    pub char_count: usize,
    pub non_whitespace_chars: usize,
    /// Sentences holding at least one token, in order.
    pub sentences: Vec<Sentence>,
    /// Raw whitespace-delimited words.
    pub words: Vec<String>,
    /// Normalized tokens across the whole text.
    pub tokens: Vec<String>,
    pub punctuation: PunctuationCounts,
    /// One table per n in `NGRAM_MIN_N..=NGRAM_MAX_N`.
    pub ngrams: Vec<NgramTable>,
}

impl FeatureSet {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Extract features from text. Never fails; empty input yields zero counts.
pub fn extract(text: &str) -> FeatureSet {
    let words: Vec<String> = split_words(text).into_iter().map(str::to_string).collect();
    let tokens: Vec<String> = words.iter().filter_map(|w| normalize_token(w)).collect();

    let sentences = split_sentences(text)
        .into_iter()
        .map(|s| Sentence {
            text: s.to_string(),
            tokens: split_words(s).into_iter().filter_map(normalize_token).collect(),
        })
        .filter(|s| !s.is_empty())
        .collect();

    let ngrams = (NGRAM_MIN_N..=NGRAM_MAX_N)
        .map(|n| NgramTable::build(&tokens, n))
        .collect();

    FeatureSet {
        char_count: text.chars().count(),
        non_whitespace_chars: count_non_whitespace(text),
        sentences,
        words,
        tokens,
        punctuation: count_punctuation(text),
        ngrams,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty() {
        let features = extract("");
        assert!(features.is_empty());
        assert_eq!(features.char_count, 0);
        assert_eq!(features.sentence_count(), 0);
        assert_eq!(features.punctuation.total(), 0);
        assert!(features.ngrams.iter().all(|t| t.total == 0));
    }

    #[test]
    fn test_extract_counts_sentences_and_tokens() {
        let features = extract("The cat sat. The cat ran!  Why?");
        assert_eq!(features.sentence_count(), 3);
        assert_eq!(features.word_count(), 7);
        assert_eq!(features.tokens[0], "the");
        assert_eq!(features.sentences[2].tokens, vec!["why"]);
    }

    #[test]
    fn test_extract_drops_tokenless_sentences() {
        let features = extract("... !!! Real words here.");
        assert_eq!(features.sentence_count(), 1);
    }

    #[test]
    fn test_punctuation_kinds() {
        let counts = count_punctuation("Wait, what? \"Yes\" (maybe); no: fine - done!");
        assert_eq!(counts.get(PunctuationMark::Comma), 1);
        assert_eq!(counts.get(PunctuationMark::Question), 1);
        assert_eq!(counts.get(PunctuationMark::Quote), 2);
        assert_eq!(counts.get(PunctuationMark::Parenthesis), 2);
        assert_eq!(counts.get(PunctuationMark::Semicolon), 1);
        assert_eq!(counts.get(PunctuationMark::Colon), 1);
        assert_eq!(counts.get(PunctuationMark::Dash), 1);
        assert_eq!(counts.get(PunctuationMark::Exclamation), 1);
        assert_eq!(counts.distinct_kinds(), 8);
    }

    #[test]
    fn test_intra_word_hyphen_is_not_a_dash() {
        let counts = count_punctuation("AI-generated text -- really");
        assert_eq!(counts.get(PunctuationMark::Dash), 1);
    }

    #[test]
    fn test_ngrams_are_case_insensitive_and_strip_punctuation() {
        let features = extract("Thank you. thank YOU, thank you!");
        let bigrams = &features.ngrams[0];
        assert_eq!(bigrams.n, 2);
        assert_eq!(bigrams.counts.get("thank you"), Some(&3));
        assert_eq!(bigrams.repeated_occurrences(), 3);
    }

    #[test]
    fn test_ngram_table_short_input() {
        let tokens = vec!["one".to_string()];
        let table = NgramTable::build(&tokens, 2);
        assert_eq!(table.total, 0);
        assert_eq!(table.repeated_occurrences(), 0);
    }
}
