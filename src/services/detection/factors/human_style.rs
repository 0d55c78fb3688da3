// Human Style Markers
// Density of contractions, first-person pronouns, casual discourse markers and interjections

use crate::services::detection::features::FeatureSet;
use crate::services::detection::stats::{clamp_score, safe_ratio};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Weighted marker density at which the factor saturates.
const DENSITY_SATURATION: f64 = 0.12;
const CONTRACTION_WEIGHT: f64 = 1.0;
const FIRST_PERSON_WEIGHT: f64 = 1.0;
const DISCOURSE_WEIGHT: f64 = 1.5;
const INTERJECTION_WEIGHT: f64 = 1.5;

const FIRST_PERSON: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "wow", "hey", "ugh", "hmm", "huh", "oops", "ouch", "yay", "haha", "lol",
    "whoa", "meh", "yikes", "phew",
];

const DISCOURSE_MARKERS: &[&str] = &[
    "actually", "anyway", "anyways", "basically", "honestly", "literally", "seriously",
    "totally", "kinda", "sorta", "gonna", "wanna", "yeah", "okay", "ok", "stuff",
    "by the way", "you know", "i mean", "i think", "i guess", "in my opinion",
    "to be honest", "kind of", "sort of",
];

/// Stems whose `'s` is a contraction of "is"/"has"/"us" rather than a possessive.
const S_CONTRACTION_STEMS: &[&str] = &[
    "it", "that", "what", "there", "here", "he", "she", "let", "who", "where", "how",
];

fn word_set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

fn first_person() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| word_set(FIRST_PERSON))
}

fn interjections() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| word_set(INTERJECTIONS))
}

fn discourse_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"\b(?:{})\b", DISCOURSE_MARKERS.join("|"));
        Regex::new(&pattern).expect("discourse marker regex")
    })
}

/// True for tokens like `don't`, `we've`, `i'm`, `it's` (not possessives like `team's`).
pub fn is_contraction(token: &str) -> bool {
    let Some((stem, suffix)) = token.split_once('\'') else {
        return false;
    };
    if stem.is_empty() {
        return false;
    }
    match suffix {
        "t" => stem.ends_with('n'),
        "re" | "ve" | "ll" | "d" | "m" => true,
        "s" => S_CONTRACTION_STEMS.contains(&stem),
        _ => false,
    }
}

/// True for first-person pronouns, including contracted forms such as `i'm`.
pub fn is_first_person(token: &str) -> bool {
    let stem = token.split('\'').next().unwrap_or(token);
    first_person().contains(stem)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerCounts {
    pub contractions: usize,
    pub first_person: usize,
    pub discourse: usize,
    pub interjections: usize,
}

impl MarkerCounts {
    pub fn weighted_total(&self) -> f64 {
        self.contractions as f64 * CONTRACTION_WEIGHT
            + self.first_person as f64 * FIRST_PERSON_WEIGHT
            + self.discourse as f64 * DISCOURSE_WEIGHT
            + self.interjections as f64 * INTERJECTION_WEIGHT
    }
}

pub fn count_markers(tokens: &[String]) -> MarkerCounts {
    let mut counts = MarkerCounts::default();
    for token in tokens {
        if is_contraction(token) {
            counts.contractions += 1;
        }
        if is_first_person(token) {
            counts.first_person += 1;
        }
        if interjections().contains(token.as_str()) {
            counts.interjections += 1;
        }
    }
    counts.discourse = discourse_re().find_iter(&tokens.join(" ")).count();
    counts
}

pub fn score(features: &FeatureSet) -> f64 {
    if features.tokens.is_empty() {
        return 0.0;
    }
    let markers = count_markers(&features.tokens);
    let density = safe_ratio(markers.weighted_total(), features.tokens.len() as f64);
    clamp_score(100.0 * (density / DENSITY_SATURATION).min(1.0))
}
