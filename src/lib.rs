// Veritext
// Heuristic AI-generated text detection from statistical and lexical
// signals, with model family attribution and span-level evidence. The
// engine is pure and synchronous: `analyze(text)` is deterministic,
// side-effect free, and safe to call concurrently.

pub mod models;
pub mod services;

pub use models::{CriticalSection, DetectionResult, InputError, ModelFamily};
pub use services::detection::{analyze, validate_input, DetectionEngine, FingerprintLibrary};
