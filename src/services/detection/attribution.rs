// Model Attribution
// Scores the text against each family's fingerprint list, adds structural
// bonuses for Gemini and Claude, and picks the best family above a
// confidence floor.

use crate::models::ModelFamily;
use crate::services::detection::fingerprints::FingerprintLibrary;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// Families below this combined score are not attributed at all.
const ATTRIBUTION_FLOOR: f64 = 30.0;

fn emoji_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Emoji commonly used by Gemini for headers and emphasis.
    RE.get_or_init(|| {
        Regex::new("[\u{1f9e0}\u{26a0}\u{1f6e0}\u{1f447}\u{1f680}\u{1f4a1}\u{2728}]")
            .expect("emoji regex")
    })
}

fn trailing_hashtags_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(#[a-zA-Z0-9]+\s*){2,}$").expect("hashtag regex"))
}

fn emoji_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new("###\\s+[\u{1f9e0}\u{26a0}\u{1f6e0}\u{1f680}\u{1f4a1}\u{2728}]")
            .expect("emoji heading regex")
    })
}

fn numbered_bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d\.\s+\*\*[^*]+:\*\*").expect("numbered bold regex"))
}

fn rhetorical_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"(The fear\?|The reality\?|The challenge\?|The catch\?)\s+[A-Z]")
            .case_insensitive(true)
            .build()
            .expect("rhetorical regex")
    })
}

fn emphasis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"(?:\n|\.)\s*(Not true\.|Precisely\.|Exactly\.|Indeed\.)\s*(?:\n|\.|$)")
            .case_insensitive(true)
            .build()
            .expect("emphasis regex")
    })
}

fn engagement_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"(What's been your experience|Have you noticed patterns)")
            .case_insensitive(true)
            .build()
            .expect("engagement regex")
    })
}

/// Fraction of a family's fingerprints found in the lowercased text,
/// as a 0-100 score. Containment is literal, not tokenized; fingerprints
/// can span words or be punctuation.
fn fingerprint_score(library: &FingerprintLibrary, family: ModelFamily, text_lower: &str) -> f64 {
    let total = FingerprintLibrary::family_phrases(family).len();
    let found = library.family_hits(family, text_lower).len();
    found as f64 / total as f64 * 100.0
}

/// Structural cues independent of the Gemini phrase list: emoji emphasis,
/// emoji section headers, trailing hashtag clusters, numbered lists with
/// bold labels, and the "think of X as Y" analogy construction.
pub fn gemini_structural_score(text: &str) -> f64 {
    let mut score = 0.0;
    let text_lower = text.to_lowercase();

    if emoji_re().is_match(text) {
        score += 15.0;
    }
    if trailing_hashtags_re().is_match(text.trim()) {
        score += 10.0;
    }
    if emoji_heading_re().is_match(text) {
        score += 15.0;
    }
    if numbered_bold_re().is_match(text) {
        score += 15.0;
    }
    if text_lower.contains("think of") && text_lower.contains(" as ") {
        score += 10.0;
    }

    score
}

/// Structural cues independent of the Claude phrase list: set question
/// followed by an answer, standalone emphasis sentences, the "vs" analogy,
/// an engagement-question tail, and em-dash usage.
pub fn claude_structural_score(text: &str) -> f64 {
    let mut score = 0.0;
    let text_lower = text.to_lowercase();

    if rhetorical_re().is_match(text) {
        score += 20.0;
    }
    if emphasis_re().is_match(text) {
        score += 15.0;
    }
    if text_lower.contains("think of it like") && text_lower.contains(" vs ") {
        score += 15.0;
    }
    if engagement_re().is_match(text) {
        score += 10.0;
    }
    if text.contains('\u{2014}') {
        score += 15.0;
    }

    score
}

/// Combined score for one family: fingerprint fraction plus any structural
/// bonus, capped at 100.
pub fn family_score(library: &FingerprintLibrary, family: ModelFamily, text: &str) -> f64 {
    let text_lower = text.to_lowercase();
    let base = fingerprint_score(library, family, &text_lower);
    let structural = match family {
        ModelFamily::Gpt => 0.0,
        ModelFamily::Claude => claude_structural_score(text),
        ModelFamily::Gemini => gemini_structural_score(text),
    };
    (base + structural).min(100.0)
}

/// Pick the best-scoring family, or `None` below the 30-point floor.
/// Families are scored in a fixed order (GPT, Claude, Gemini) and ties keep
/// the earliest, so attribution is deterministic.
pub fn detect_model_family(
    library: &FingerprintLibrary,
    text: &str,
) -> Option<(ModelFamily, f64)> {
    let candidates = [ModelFamily::Gpt, ModelFamily::Claude, ModelFamily::Gemini];

    let mut best: Option<(ModelFamily, f64)> = None;
    for family in candidates {
        let score = family_score(library, family, text);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((family, score)),
        }
    }

    best.filter(|(_, score)| *score >= ATTRIBUTION_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> FingerprintLibrary {
        FingerprintLibrary::builtin()
    }

    #[test]
    fn test_neutral_text_yields_no_family() {
        let text = "The quick brown fox jumps over the lazy dog. Plain writing with no stylistic tells at all.";
        assert_eq!(detect_model_family(&library(), text), None);
    }

    #[test]
    fn test_gpt_fingerprints_win() {
        let text = "In today's digital landscape, it's important to note that this paradigm shift will revolutionize the landscape of work. Moreover, furthermore, consequently, we delve into it. In conclusion, it's worth mentioning the future.";
        let (family, confidence) = detect_model_family(&library(), text).unwrap();
        assert_eq!(family, ModelFamily::Gpt);
        assert!(confidence > 30.0);
    }

    #[test]
    fn test_claude_structural_cues_add_up() {
        let text = "Let's talk about a common misconception.\n\nNot true.\n\nThe reality? Things are messier\u{2014}much messier. Think of it like apples vs oranges. What's been your experience?";
        let structural = claude_structural_score(text);
        assert!(structural >= 50.0);
        let (family, confidence) = detect_model_family(&library(), text).unwrap();
        assert_eq!(family, ModelFamily::Claude);
        assert!(confidence > 50.0);
    }

    #[test]
    fn test_gemini_structural_cues() {
        let text = "### \u{1f9e0} Working Memory\n\nThink of the context window as desk space.\n\n1. **Testing:** do it often.\n2. **RAG:** retrieve first.\n\n#AI #MachineLearning";
        let structural = gemini_structural_score(text);
        assert!(structural >= 40.0);
    }

    #[test]
    fn test_family_score_caps_at_100() {
        let mut text = String::from("sure, here's absolutely definitely great question here's what let's break in a nutshell bottom line key takeaway to sum up here is the breakdown think of it as");
        text.push_str(" how are you are you team would you like me to keep in mind here's what you need to know \u{1f680}\n1. **Label:** x\n#AI #ML");
        let score = family_score(&library(), ModelFamily::Gemini, &text);
        assert!(score <= 100.0);
        assert!(score > 80.0);
    }

    #[test]
    fn test_rhetorical_pattern_requires_following_answer() {
        assert!(rhetorical_re().is_match("The fear? More space means more errors."));
        assert!(!rhetorical_re().is_match("the fear is overblown"));
    }
}
