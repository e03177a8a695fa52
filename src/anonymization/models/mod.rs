//! Anonymization data models

pub mod detection;

pub use detection::{AnonymizedText, Detection, DetectionMethod};
