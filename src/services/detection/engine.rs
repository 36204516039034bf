// Detection Engine
// Fuses the statistical signals with the phrase boost and model
// attribution into a single DetectionResult.

use crate::models::{DetectionResult, InputError};
use crate::services::detection::attribution::detect_model_family;
use crate::services::detection::critical_sections::find_critical_sections;
use crate::services::detection::fingerprints::FingerprintLibrary;
use crate::services::detection::round2;
use crate::services::detection::signals::{
    calculate_burstiness, calculate_diversity, calculate_perplexity, normalize_burstiness,
    normalize_diversity, normalize_perplexity,
};
use crate::services::text_processor::{tokenize, word_count};
use tracing::debug;

/// Soft minimum enforced by caller-side validation; the engine also applies
/// it internally as a safety floor.
pub const MIN_WORDS: usize = 50;
/// Upper bound enforced by callers for tiering; not part of the engine's
/// own contract.
pub const MAX_WORDS: usize = 800;

/// Signal weights: 40% predictability, 30% rhythm, 30% diversity.
const WEIGHT_PERPLEXITY: f64 = 0.4;
const WEIGHT_BURSTINESS: f64 = 0.3;
const WEIGHT_DIVERSITY: f64 = 0.3;
/// Attribution confidence at which the model boost kicks in.
const MODEL_BOOST_FLOOR: f64 = 60.0;
/// Maximum points the model boost can add.
const MODEL_BOOST_MAX: f64 = 40.0;

/// Caller-side length validation with human-readable messages. Analysis
/// itself never fails; this belongs in front of it.
pub fn validate_input(text: &str) -> Result<(), InputError> {
    let words = word_count(text);
    if words < MIN_WORDS {
        return Err(InputError::TextTooShort { minimum: MIN_WORDS });
    }
    if words > MAX_WORDS {
        return Err(InputError::TextTooLong {
            limit: MAX_WORDS,
            words,
        });
    }
    Ok(())
}

/// The detection engine. Owns the fingerprint library (compiled once at
/// construction) and exposes a pure, synchronous `analyze`; a single engine
/// can be shared across threads since analysis touches no mutable state.
#[derive(Debug, Default)]
pub struct DetectionEngine {
    library: FingerprintLibrary,
}

impl DetectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(library: FingerprintLibrary) -> Self {
        Self { library }
    }

    /// Analyze a block of text. Total over any string input: degenerate
    /// inputs fall back to neutral scores instead of erroring, and inputs
    /// under the word floor return the fixed neutral result.
    pub fn analyze(&self, text: &str) -> DetectionResult {
        let words = tokenize(text);
        if words.len() < MIN_WORDS {
            debug!(word_count = words.len(), "input below analysis floor");
            return DetectionResult::neutral();
        }

        let perplexity = calculate_perplexity(&words);
        let burstiness = calculate_burstiness(text);
        let diversity = calculate_diversity(&words);

        let norm_perplexity = normalize_perplexity(perplexity);
        let norm_burstiness = normalize_burstiness(burstiness);
        let norm_diversity = normalize_diversity(diversity);

        let mut ai_confidence = norm_perplexity * WEIGHT_PERPLEXITY
            + norm_burstiness * WEIGHT_BURSTINESS
            + norm_diversity * WEIGHT_DIVERSITY;

        let text_lower = text.to_lowercase();
        let phrase_boost = self.library.phrase_boost(&text_lower);
        ai_confidence = (ai_confidence + phrase_boost).min(100.0);

        let critical_sections = find_critical_sections(&self.library, text);

        let attribution = detect_model_family(&self.library, text);

        // Explicit lexical fingerprints are strong independent evidence and
        // can override otherwise human-like statistics.
        if let Some((_, model_confidence)) = attribution {
            if model_confidence >= MODEL_BOOST_FLOOR {
                let model_boost = model_confidence / 100.0 * MODEL_BOOST_MAX;
                ai_confidence = (ai_confidence + model_boost).min(100.0);
            }
        }

        debug!(
            perplexity,
            burstiness,
            diversity,
            norm_perplexity,
            norm_burstiness,
            norm_diversity,
            phrase_boost,
            ai_confidence,
            sections = critical_sections.len(),
            "analysis complete"
        );

        DetectionResult {
            ai_confidence: round2(ai_confidence),
            perplexity_score: round2(perplexity),
            burstiness_score: round2(burstiness),
            diversity_score: round2(diversity),
            critical_sections,
            likely_model: attribution.map(|(family, _)| family),
            model_confidence: attribution.map(|(_, confidence)| round2(confidence)),
        }
    }
}

/// Analyze with a freshly built engine. Convenience for one-off callers;
/// reuse a `DetectionEngine` when analyzing repeatedly.
pub fn analyze(text: &str) -> DetectionResult {
    DetectionEngine::new().analyze(text)
}
