// Fingerprint Library
// Curated phrase lists and compiled matchers used for the phrase boost,
// model attribution, and critical-section extraction. The lists are
// process-wide constants; the library compiles its matchers once and is
// injected into the engine rather than looked up as a global.

use crate::models::ModelFamily;
use regex::{Regex, RegexBuilder};

/// Generic AI phrases found across model families.
pub const AI_PHRASES: &[&str] = &[
    "delve into",
    "it's important to note",
    "at the end of the day",
    "going forward",
    "in conclusion",
    "moreover",
    "furthermore",
    "accordingly",
    "consequently",
    "it's worth mentioning",
    "in today's digital landscape",
    "in summary",
    "to summarize",
];

/// GPT-specific phrases and patterns.
pub const GPT_FINGERPRINTS: &[&str] = &[
    "delve into",
    "it's important to note",
    "in today's digital landscape",
    "it's worth mentioning",
    "in conclusion",
    "moreover",
    "furthermore",
    "consequently",
    "the landscape of",
    "revolutionize",
    "paradigm shift",
];

/// Claude-specific phrases and patterns.
pub const CLAUDE_FINGERPRINTS: &[&str] = &[
    "i appreciate",
    "i'd be happy to",
    "let me know if",
    "feel free to",
    "i understand",
    "i'm happy to help",
    "i should mention",
    "it's worth noting",
    "to be clear",
    "in this case",
    "let's talk about",
    "common misconception",
    "not true.",
    "the reality?",
    "the fear?",
    "the challenge?",
    "think of it like",
    "what's been your experience",
    "\u{2014}",
];

/// Gemini-specific phrases and patterns.
pub const GEMINI_FINGERPRINTS: &[&str] = &[
    "sure, here's",
    "absolutely",
    "definitely",
    "great question",
    "here's what",
    "let's break",
    "in a nutshell",
    "bottom line",
    "key takeaway",
    "to sum up",
    "here is the breakdown",
    "here's the breakdown",
    "think of",
    "the bottom line",
    "how are you",
    "are you team",
    "would you like me to",
    "keep in mind",
    "here's what you need to know",
];

/// Which list a matched phrase is attributed to when building rationale
/// text. A phrase can live in several lists; provenance resolves that with
/// a fixed priority (GPT, then Claude, then Gemini, then generic) so the
/// same phrase always yields the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseProvenance {
    Family(ModelFamily),
    Generic,
}

/// A fingerprint phrase compiled into a boundary-aware, case-insensitive
/// literal matcher.
#[derive(Debug)]
pub struct PhraseMatcher {
    pub phrase: &'static str,
    pub regex: Regex,
}

/// Immutable fingerprint data plus matchers compiled at construction.
#[derive(Debug)]
pub struct FingerprintLibrary {
    matchers: Vec<PhraseMatcher>,
}

impl Default for FingerprintLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FingerprintLibrary {
    /// Build the library from the built-in phrase lists. Matchers cover the
    /// de-duplicated union of every list, longest phrase first so a longer
    /// containing phrase is matched before its sub-phrases.
    pub fn builtin() -> Self {
        let mut phrases: Vec<&'static str> = AI_PHRASES
            .iter()
            .chain(GPT_FINGERPRINTS)
            .chain(CLAUDE_FINGERPRINTS)
            .chain(GEMINI_FINGERPRINTS)
            .copied()
            .collect();
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        phrases.dedup();

        let matchers = phrases
            .into_iter()
            .map(|phrase| PhraseMatcher {
                phrase,
                regex: phrase_regex(phrase),
            })
            .collect();

        Self { matchers }
    }

    /// All compiled matchers, longest phrase first.
    pub fn matchers(&self) -> &[PhraseMatcher] {
        &self.matchers
    }

    pub fn family_phrases(family: ModelFamily) -> &'static [&'static str] {
        match family {
            ModelFamily::Gpt => GPT_FINGERPRINTS,
            ModelFamily::Claude => CLAUDE_FINGERPRINTS,
            ModelFamily::Gemini => GEMINI_FINGERPRINTS,
        }
    }

    /// Generic AI phrases contained in `text_lower` (already lowercased).
    pub fn generic_hits(&self, text_lower: &str) -> Vec<&'static str> {
        AI_PHRASES
            .iter()
            .filter(|phrase| text_lower.contains(*phrase))
            .copied()
            .collect()
    }

    /// Family fingerprints contained in `text_lower`.
    pub fn family_hits(&self, family: ModelFamily, text_lower: &str) -> Vec<&'static str> {
        Self::family_phrases(family)
            .iter()
            .filter(|phrase| text_lower.contains(*phrase))
            .copied()
            .collect()
    }

    /// Saturating generic-phrase boost: 5 points per phrase, capped at 25.
    pub fn phrase_boost(&self, text_lower: &str) -> f64 {
        let found = self.generic_hits(text_lower).len() as f64;
        (found * 5.0).min(25.0)
    }

    /// Resolve which list a phrase belongs to for rationale text.
    pub fn provenance(&self, phrase: &str) -> PhraseProvenance {
        if GPT_FINGERPRINTS.contains(&phrase) {
            PhraseProvenance::Family(ModelFamily::Gpt)
        } else if CLAUDE_FINGERPRINTS.contains(&phrase) {
            PhraseProvenance::Family(ModelFamily::Claude)
        } else if GEMINI_FINGERPRINTS.contains(&phrase) {
            PhraseProvenance::Family(ModelFamily::Gemini)
        } else {
            PhraseProvenance::Generic
        }
    }
}

/// Compile a phrase into a case-insensitive literal matcher. Word-boundary
/// anchors are added only when the phrase itself starts/ends on a word
/// character, so punctuation-led phrases (an em-dash, "not true.") match
/// without spurious boundary requirements.
fn phrase_regex(phrase: &str) -> Regex {
    let starts_word = phrase.chars().next().map(is_word_char).unwrap_or(false);
    let ends_word = phrase.chars().last().map(is_word_char).unwrap_or(false);

    let mut pattern = String::new();
    if starts_word {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(phrase));
    if ends_word {
        pattern.push_str(r"\b");
    }

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("fingerprint phrase regex")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchers_are_deduplicated_union() {
        let library = FingerprintLibrary::builtin();
        let mut seen = std::collections::HashSet::new();
        for matcher in library.matchers() {
            assert!(seen.insert(matcher.phrase), "duplicate: {}", matcher.phrase);
        }
        // "delve into" appears in both the generic and GPT lists.
        assert!(seen.contains("delve into"));
        let union_len = seen.len();
        assert!(union_len < AI_PHRASES.len() + GPT_FINGERPRINTS.len() + CLAUDE_FINGERPRINTS.len() + GEMINI_FINGERPRINTS.len());
    }

    #[test]
    fn test_matchers_sorted_longest_first() {
        let library = FingerprintLibrary::builtin();
        let lens: Vec<usize> = library.matchers().iter().map(|m| m.phrase.len()).collect();
        assert!(lens.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_word_boundaries_only_on_word_edges() {
        let library = FingerprintLibrary::builtin();
        let moreover = library
            .matchers()
            .iter()
            .find(|m| m.phrase == "moreover")
            .unwrap();
        assert!(moreover.regex.is_match("Moreover, the data shows"));
        // "furthermoreover" must not match "moreover" mid-word.
        assert!(!moreover.regex.is_match("furthermoreover"));

        let em_dash = library
            .matchers()
            .iter()
            .find(|m| m.phrase == "\u{2014}")
            .unwrap();
        assert!(em_dash.regex.is_match("clauses\u{2014}joined"));
    }

    #[test]
    fn test_phrase_boost_saturates_at_25() {
        let library = FingerprintLibrary::builtin();
        assert_eq!(library.phrase_boost("nothing suspicious here"), 0.0);
        assert_eq!(library.phrase_boost("moreover, furthermore"), 10.0);
        let loaded = "delve into it's important to note in conclusion \
                      moreover furthermore consequently to summarize";
        assert_eq!(library.phrase_boost(loaded), 25.0);
    }

    #[test]
    fn test_provenance_priority_is_stable() {
        let library = FingerprintLibrary::builtin();
        // In both the generic and GPT lists; GPT wins.
        assert_eq!(
            library.provenance("delve into"),
            PhraseProvenance::Family(ModelFamily::Gpt)
        );
        assert_eq!(
            library.provenance("i'd be happy to"),
            PhraseProvenance::Family(ModelFamily::Claude)
        );
        assert_eq!(
            library.provenance("in a nutshell"),
            PhraseProvenance::Family(ModelFamily::Gemini)
        );
        assert_eq!(
            library.provenance("at the end of the day"),
            PhraseProvenance::Generic
        );
    }

    #[test]
    fn test_family_hits_uses_literal_containment() {
        let library = FingerprintLibrary::builtin();
        let hits = library.family_hits(
            ModelFamily::Gemini,
            "sure, here's the plan. absolutely, keep in mind the cost.",
        );
        assert!(hits.contains(&"sure, here's"));
        assert!(hits.contains(&"absolutely"));
        assert!(hits.contains(&"keep in mind"));
    }
}
