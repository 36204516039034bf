// Text Processing Service
// Tokenization and sentence splitting primitives shared by every
// detection signal.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Alphanumeric runs with embedded apostrophes, so "it's" stays one token.
    RE.get_or_init(|| Regex::new(r"[a-z0-9]+(?:['\u{2019}][a-z0-9]+)*").expect("word regex"))
}

fn delimiter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence delimiter regex"))
}

/// Lowercase word tokenization. Punctuation-only fragments are discarded;
/// empty input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    word_re()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Word count without allocating the token list.
pub fn word_count(text: &str) -> usize {
    let lower = text.to_lowercase();
    word_re().find_iter(&lower).count()
}

/// Split on sentence-ending punctuation runs, dropping empty fragments.
/// Used by the burstiness signal, which only needs per-sentence word counts.
pub fn split_sentences(text: &str) -> Vec<&str> {
    delimiter_re()
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// A sentence with its trailing delimiter and exact position in the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceSpan {
    /// Sentence content as it appears in the input, without the delimiter.
    pub content: String,
    /// The delimiter run (`.`, `!?`, ...); empty for a trailing fragment.
    pub delimiter: String,
    /// UTF-8 byte offset (0-based) of the span start.
    pub start: usize,
    /// UTF-8 byte offset (0-based, end-exclusive) past the delimiter.
    pub end: usize,
}

impl SentenceSpan {
    /// Content plus delimiter, equal to `text[start..end]`.
    pub fn full_text(&self) -> String {
        format!("{}{}", self.content, self.delimiter)
    }
}

/// Offset-preserving sentence split. Spans are produced in input order,
/// do not overlap, and satisfy `text[span.start..span.end] == span.full_text()`.
pub fn split_sentence_spans(text: &str) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for m in delimiter_re().find_iter(text) {
        spans.push(SentenceSpan {
            content: text[cursor..m.start()].to_string(),
            delimiter: m.as_str().to_string(),
            start: cursor,
            end: m.end(),
        });
        cursor = m.end();
    }

    if cursor < text.len() {
        spans.push(SentenceSpan {
            content: text[cursor..].to_string(),
            delimiter: String::new(),
            start: cursor,
            end: text.len(),
        });
    }

    spans
}
