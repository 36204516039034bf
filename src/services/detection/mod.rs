// Detection Module
// AI text detection core logic organized into specialized submodules:
// - signals: statistical signals (perplexity proxy, burstiness, diversity)
//   and their normalizers
// - fingerprints: curated phrase lists and compiled phrase matchers
// - attribution: model family scoring and selection
// - critical_sections: phrase- and sentence-level evidence extraction
// - engine: signal fusion into the final DetectionResult

pub mod attribution;
pub mod critical_sections;
pub mod engine;
pub mod fingerprints;
pub mod signals;

// Re-export commonly used items
pub use attribution::{claude_structural_score, detect_model_family, family_score, gemini_structural_score};
pub use critical_sections::find_critical_sections;
pub use engine::{analyze, validate_input, DetectionEngine, MAX_WORDS, MIN_WORDS};
pub use fingerprints::{FingerprintLibrary, PhraseProvenance};
pub use signals::{
    calculate_burstiness, calculate_diversity, calculate_perplexity, normalize_burstiness,
    normalize_diversity, normalize_perplexity,
};

/// Round to two decimals for reported scores.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
