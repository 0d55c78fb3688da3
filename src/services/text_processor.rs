// Text Processing Service
// Sentence/word tokenization and display statistics shared by the engine and the CLI

use crate::models::TextStatistics;
use regex::Regex;
use std::sync::OnceLock;

const WORDS_PER_PAGE: usize = 250;

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

/// Split text into sentences.
///
/// A boundary is a run of `.`, `!` or `?` followed by whitespace or the end
/// of the text; consecutive terminators form a single boundary. Trailing text
/// without a terminator is kept as the final sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }

        let mut end = idx + ch.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !is_terminator(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }

        let at_boundary = match chars.peek() {
            None => true,
            Some(&(_, next)) => next.is_whitespace(),
        };
        if at_boundary {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Split on runs of whitespace, dropping empty pieces.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Lowercase a word and strip leading/trailing punctuation.
///
/// Inner apostrophes survive (`Don't` -> `don't`); curly apostrophes are
/// folded to ASCII. Returns `None` when nothing alphanumeric remains.
pub fn normalize_token(word: &str) -> Option<String> {
    let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.replace(['\u{2019}', '\u{2018}'], "'").to_lowercase())
}

pub fn count_non_whitespace(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Cut `text` to at most `max_chars` characters.
///
/// When the cut lands inside a word, backs up to the last whitespace within
/// the window so the final token is not split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text;
    };
    let window = &text[..cut];
    let splits_word = text[cut..].chars().next().is_some_and(|c| !c.is_whitespace());
    if splits_word {
        if let Some(ws) = window.rfind(char::is_whitespace) {
            if ws > 0 {
                return window[..ws].trim_end();
            }
        }
    }
    window.trim_end()
}

fn terminator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("terminator regex"))
}

/// Count terminator runs that end a sentence (followed by whitespace or end).
pub fn count_sentence_terminators(text: &str) -> usize {
    terminator_re()
        .find_iter(text)
        .filter(|m| {
            text[m.end()..]
                .chars()
                .next()
                .map_or(true, char::is_whitespace)
        })
        .count()
}

/// Compute display statistics for text
pub fn compute_text_statistics(text: &str) -> TextStatistics {
    let words = split_words(text).len();
    let lines: Vec<&str> = text.split('\n').collect();

    TextStatistics {
        characters: text.chars().count(),
        non_blank_characters: count_non_whitespace(text),
        words,
        spaces: text.chars().filter(|c| c.is_whitespace()).count(),
        sentences: count_sentence_terminators(text),
        lines: lines.len(),
        non_empty_lines: lines.iter().filter(|l| !l.trim().is_empty()).count(),
        pages: words.div_ceil(WORDS_PER_PAGE).max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("First one. Second one! Third one?");
        assert_eq!(sentences, vec!["First one.", "Second one!", "Third one?"]);
    }

    #[test]
    fn test_split_sentences_collapses_terminator_runs() {
        let sentences = split_sentences("Really?! Yes... Fine.");
        assert_eq!(sentences, vec!["Really?!", "Yes...", "Fine."]);
    }

    #[test]
    fn test_split_sentences_ignores_inner_periods() {
        let sentences = split_sentences("Version 3.5 shipped. It works");
        assert_eq!(sentences, vec!["Version 3.5 shipped.", "It works"]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("Hello,"), Some("hello".to_string()));
        assert_eq!(normalize_token("\"Don\u{2019}t\""), Some("don't".to_string()));
        assert_eq!(normalize_token("--"), None);
        assert_eq!(normalize_token("AI-generated"), Some("ai-generated".to_string()));
    }

    #[test]
    fn test_truncate_chars_backs_up_to_whitespace() {
        assert_eq!(truncate_chars("hello world", 8), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello");
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        let text = "\u{4e00}\u{4e01}\u{4e02}\u{4e03}";
        assert_eq!(truncate_chars(text, 2).chars().count(), 2);
    }

    #[test]
    fn test_compute_text_statistics() {
        let stats = compute_text_statistics("One two. Three!\n\nFour five six?");
        assert_eq!(stats.words, 6);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.non_empty_lines, 2);
        assert_eq!(stats.pages, 1);
        assert_eq!(stats.non_blank_characters, 25);
    }

    #[test]
    fn test_compute_text_statistics_empty() {
        let stats = compute_text_statistics("");
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.pages, 1);
    }
}
