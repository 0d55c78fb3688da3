// Passive Voice
// Share of sentences containing a "to be" auxiliary followed by a past participle

use crate::services::detection::features::{FeatureSet, Sentence};
use crate::services::detection::stats::{clamp_score, safe_ratio};
use regex::Regex;
use std::sync::OnceLock;

/// Passive share at which the factor saturates.
const PASSIVE_SHARE_SATURATION: f64 = 0.6;

const IRREGULAR_PARTICIPLES: &[&str] = &[
    "begun", "bought", "broken", "brought", "built", "caught", "chosen", "done", "drawn",
    "driven", "eaten", "fallen", "felt", "forgotten", "found", "given", "grown", "heard",
    "held", "hidden", "kept", "known", "laid", "led", "left", "lost", "made", "meant", "met",
    "paid", "put", "read", "run", "said", "seen", "sent", "set", "shown", "sold", "spent",
    "spoken", "stolen", "taken", "taught", "thought", "thrown", "told", "understood",
    "won", "worn", "written",
];

/// Matches e.g. "was analyzed", "were carefully reviewed", "is known".
fn passive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            r"\b(?:am|is|are|was|were|be|been|being)\s+(?:[a-z]+ly\s+)?(?:[a-z]{{2,}}ed|{})\b",
            IRREGULAR_PARTICIPLES.join("|")
        );
        Regex::new(&pattern).expect("passive voice regex")
    })
}

pub fn is_passive(sentence: &Sentence) -> bool {
    passive_re().is_match(&sentence.tokens.join(" "))
}

pub fn score(features: &FeatureSet) -> f64 {
    let total = features.sentence_count();
    if total == 0 {
        return 0.0;
    }
    let passive = features.sentences.iter().filter(|s| is_passive(s)).count();
    let share = safe_ratio(passive as f64, total as f64);
    clamp_score(100.0 * (share / PASSIVE_SHARE_SATURATION).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::detection::features::extract;

    fn sentence(text: &str) -> Sentence {
        extract(text).sentences.remove(0)
    }

    #[test]
    fn test_detects_regular_and_irregular_participles() {
        assert!(is_passive(&sentence("The data was collected by the team.")));
        assert!(is_passive(&sentence("The results were carefully reviewed.")));
        assert!(is_passive(&sentence("The answer is known to everyone.")));
        assert!(is_passive(&sentence("Mistakes have been made.")));
    }

    #[test]
    fn test_active_sentences_are_not_passive() {
        assert!(!is_passive(&sentence("We collected the data ourselves.")));
        assert!(!is_passive(&sentence("She was happy about it.")));
        assert!(!is_passive(&sentence("It is red.")));
    }

    #[test]
    fn test_score_scales_with_share() {
        let all_passive = extract("The report was written. The code was reviewed. The bug was fixed.");
        assert_eq!(score(&all_passive), 100.0);

        let none = extract("I wrote the report. You reviewed the code. We fixed the bug.");
        assert_eq!(score(&none), 0.0);

        let some = extract("The report was written. You reviewed the code. We fixed the bug.");
        let s = score(&some);
        assert!(s > 0.0 && s < 100.0);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(score(&extract("")), 0.0);
    }
}
