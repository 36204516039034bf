// Critical Section Extraction
// Two passes over the input: exact fingerprint matches tagged with their
// provenance, and structurally suspicious whole sentences. Results are
// merged into one list ordered by start offset. Overlapping sections are
// kept as-is; renderers resolve overlap with a first-start-wins sweep.

use crate::models::{CriticalSection, ModelFamily};
use crate::services::detection::fingerprints::{FingerprintLibrary, PhraseProvenance};
use crate::services::detection::signals::{
    calculate_diversity, calculate_perplexity, normalize_diversity, normalize_perplexity,
};
use crate::services::detection::round2;
use crate::services::text_processor::{split_sentence_spans, tokenize};

/// Sentences scoring at or above this are flagged whole.
const SENTENCE_FLAG_THRESHOLD: f64 = 70.0;
/// Sentences shorter than this many words are too small to score reliably.
const MIN_SENTENCE_WORDS: usize = 5;
/// Exact phrase matches carry a fixed confidence.
const PHRASE_MATCH_CONFIDENCE: f64 = 95.0;

/// Find every fingerprint occurrence and every suspicious sentence,
/// sorted ascending by start offset.
pub fn find_critical_sections(library: &FingerprintLibrary, text: &str) -> Vec<CriticalSection> {
    let mut sections = phrase_pass(library, text);
    sections.extend(sentence_pass(library, text));
    sections.sort_by_key(|s| s.start);
    sections
}

/// Scan for every occurrence of every fingerprint phrase, longest phrase
/// first. Matches are not de-duplicated against each other, so a phrase
/// inside a longer match is still reported separately.
fn phrase_pass(library: &FingerprintLibrary, text: &str) -> Vec<CriticalSection> {
    let mut sections = Vec::new();

    for matcher in library.matchers() {
        for m in matcher.regex.find_iter(text) {
            sections.push(CriticalSection {
                start: m.start(),
                end: m.end(),
                confidence: PHRASE_MATCH_CONFIDENCE,
                reason: phrase_reason(library, matcher.phrase),
                text: m.as_str().to_string(),
            });
        }
    }

    sections
}

fn phrase_reason(library: &FingerprintLibrary, phrase: &str) -> String {
    match library.provenance(phrase) {
        PhraseProvenance::Family(family) => {
            format!("Common {} writing pattern: '{}'", family.as_str(), phrase)
        }
        PhraseProvenance::Generic => format!("Detected common AI phrase: '{}'", phrase),
    }
}

/// Re-split the text with offsets preserved and flag whole sentences whose
/// local score crosses the threshold. The flagged span includes the
/// sentence's trailing delimiter.
fn sentence_pass(library: &FingerprintLibrary, text: &str) -> Vec<CriticalSection> {
    let mut sections = Vec::new();

    for span in split_sentence_spans(text) {
        let trimmed = span.content.trim();
        if trimmed.is_empty() {
            continue;
        }
        let words = tokenize(trimmed);
        if words.len() < MIN_SENTENCE_WORDS {
            continue;
        }

        let score = score_sentence(library, trimmed, &words);
        if score >= SENTENCE_FLAG_THRESHOLD {
            sections.push(CriticalSection {
                start: span.start,
                end: span.end,
                confidence: round2(score),
                reason: sentence_reason(library, score, trimmed, &words),
                text: span.full_text(),
            });
        }
    }

    sections
}

/// Local AI-likelihood for one sentence: predictability and diversity only
/// (burstiness needs multiple sentences), plus a flat boost per generic
/// phrase, clamped to 100.
fn score_sentence(library: &FingerprintLibrary, sentence: &str, words: &[String]) -> f64 {
    let norm_perplexity = normalize_perplexity(calculate_perplexity(words));
    let norm_diversity = normalize_diversity(calculate_diversity(words));

    let mut score = norm_perplexity * 0.6 + norm_diversity * 0.4;

    let sentence_lower = sentence.to_lowercase();
    score += library.generic_hits(&sentence_lower).len() as f64 * 20.0;

    score.min(100.0)
}

/// Build the rationale for a flagged sentence from its actual evidence:
/// up to two generic phrases, at most one family pattern, a diversity note
/// when vocabulary is poor, and only then a tiered generic explanation.
/// Distinct evidence always produces distinct reason text.
fn sentence_reason(
    library: &FingerprintLibrary,
    score: f64,
    sentence: &str,
    words: &[String],
) -> String {
    let sentence_lower = sentence.to_lowercase();
    let mut reasons: Vec<String> = Vec::new();

    let generic = library.generic_hits(&sentence_lower);
    if !generic.is_empty() {
        let listed: Vec<&str> = generic.iter().take(2).copied().collect();
        reasons.push(format!("Contains AI phrase: \"{}\"", listed.join("\", \"")));
    }

    let mut model_patterns: Vec<String> = Vec::new();
    for family in [ModelFamily::Gpt, ModelFamily::Claude, ModelFamily::Gemini] {
        for phrase in library.family_hits(family, &sentence_lower) {
            model_patterns.push(format!("{} pattern: '{}'", family.as_str(), phrase));
        }
    }
    if let Some(first) = model_patterns.into_iter().next() {
        reasons.push(first);
    }

    let diversity = calculate_diversity(words);
    if diversity < 0.4 {
        reasons.push(format!(
            "Low vocabulary diversity ({}%)",
            (diversity * 100.0).round()
        ));
    }

    if reasons.is_empty() {
        let fallback = if score > 85.0 {
            "Highly repetitive structure and predictable patterns"
        } else if score > 70.0 {
            "Predictable word choice with consistent rhythm"
        } else {
            "Consistent sentence structure typical of AI"
        };
        reasons.push(fallback.to_string());
    }

    reasons.join(" \u{2022} ")
}
