// Veritext Core Services

pub mod detection;
pub mod text_processor;

pub use text_processor::*;

// Re-export detection module functions
pub use detection::{
    analyze,
    detect_model_family,
    find_critical_sections,
    validate_input,
    DetectionEngine,
    FingerprintLibrary,
};
