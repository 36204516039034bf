// Veritext Data Models
// Result types returned by the detection engine, plus caller-side
// input validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Known model families the attributor can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelFamily {
    #[serde(rename = "GPT")]
    Gpt,
    Claude,
    Gemini,
}

impl ModelFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelFamily::Gpt => "GPT",
            ModelFamily::Claude => "Claude",
            ModelFamily::Gemini => "Gemini",
        }
    }
}

/// A flagged text span with the evidence that flagged it.
///
/// Spans may overlap in the raw list; renderers resolve overlap by taking
/// sections in ascending `start` order and skipping any whose start falls
/// before the current cursor (first start wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalSection {
    /// UTF-8 byte offset (0-based) into the analyzed text.
    pub start: usize,
    /// UTF-8 byte offset (0-based, end-exclusive) into the analyzed text.
    pub end: usize,
    pub confidence: f64,
    pub reason: String,
    /// Exact substring `text[start..end]` of the analyzed input.
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub ai_confidence: f64,
    pub perplexity_score: f64,
    pub burstiness_score: f64,
    pub diversity_score: f64,
    pub critical_sections: Vec<CriticalSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likely_model: Option<ModelFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_confidence: Option<f64>,
}

impl DetectionResult {
    /// Fixed neutral result for inputs below the analysis floor.
    pub fn neutral() -> Self {
        Self {
            ai_confidence: 50.0,
            perplexity_score: 0.0,
            burstiness_score: 0.0,
            diversity_score: 0.0,
            critical_sections: Vec::new(),
            likely_model: None,
            model_confidence: None,
        }
    }

    pub fn is_likely_ai(&self) -> bool {
        self.ai_confidence >= 70.0
    }

    pub fn is_mixed(&self) -> bool {
        self.ai_confidence > 30.0 && self.ai_confidence < 70.0
    }

    pub fn is_likely_human(&self) -> bool {
        self.ai_confidence <= 30.0
    }

    pub fn label(&self) -> &'static str {
        if self.is_likely_ai() {
            "Likely AI-Generated"
        } else if self.is_mixed() {
            "Mixed or Edited AI"
        } else {
            "Likely Human-Written"
        }
    }
}

/// Validation failures surfaced to callers before analysis runs.
/// The engine itself never errors; these belong to the input form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Text too short for analysis (minimum {minimum} words)")]
    TextTooShort { minimum: usize },
    #[error("Text exceeds the {limit}-word limit for analysis. Your text contains {words} words.")]
    TextTooLong { limit: usize, words: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_confidence_bands() {
        let mut result = DetectionResult::neutral();
        assert_eq!(result.label(), "Mixed or Edited AI");

        result.ai_confidence = 70.0;
        assert!(result.is_likely_ai());
        assert_eq!(result.label(), "Likely AI-Generated");

        result.ai_confidence = 30.0;
        assert!(result.is_likely_human());
        assert_eq!(result.label(), "Likely Human-Written");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = DetectionResult::neutral();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["aiConfidence"], 50.0);
        assert!(json.get("likelyModel").is_none());
        assert!(json.get("modelConfidence").is_none());
    }

    #[test]
    fn test_model_family_serializes_display_name() {
        let json = serde_json::to_string(&ModelFamily::Gpt).unwrap();
        assert_eq!(json, "\"GPT\"");
        let back: ModelFamily = serde_json::from_str("\"Claude\"").unwrap();
        assert_eq!(back, ModelFamily::Claude);
    }
}
