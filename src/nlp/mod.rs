//! Entity extraction
//!
//! The anonymizer treats named-entity recognition as an external oracle behind
//! the [`EntityExtractor`] trait. Given text, an extractor returns entity spans
//! with labels and the tokens it tags as proper nouns. Two implementations
//! ship with the crate:
//!
//! - [`HeuristicExtractor`]: capitalization and lexicon rules, no model needed
//! - [`PrecomputedExtractor`]: replays an [`Extraction`] produced elsewhere
//!   (e.g. by an external NLP pipeline) and stored as JSON
//!
//! The caller owns the extractor and passes it in; nothing here holds global
//! state.

pub mod heuristic;
pub mod precomputed;

pub use heuristic::HeuristicExtractor;
pub use precomputed::PrecomputedExtractor;

use crate::anonymization::labels::EntityLabel;
use crate::config::{EntityConfig, ExtractorKind};
use crate::domain::{ExtractorError, ReduxerError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Named-entity span reported by an extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Literal text of the span
    pub text: String,
    /// Entity type label
    pub label: EntityLabel,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Extractor output for one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Entity spans, in document order
    #[serde(default)]
    pub entities: Vec<EntitySpan>,
    /// Tokens tagged as proper nouns, in document order
    #[serde(default)]
    pub proper_nouns: Vec<String>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.proper_nouns.is_empty()
    }
}

/// Trait for named-entity / proper-noun extractors
pub trait EntityExtractor: Send + Sync {
    /// Short identifier used in logs and errors
    fn name(&self) -> &'static str;

    /// Whether the backend is ready to run
    fn is_available(&self) -> bool {
        true
    }

    /// Extract entities and proper nouns from `text`
    fn extract(&self, text: &str) -> std::result::Result<Extraction, ExtractorError>;
}

/// Build the extractor selected in configuration
///
/// # Errors
///
/// Returns [`ExtractorError::Unavailable`] if the precomputed extractor is
/// selected and its entities file is missing or unreadable.
pub fn build_extractor(config: &EntityConfig) -> Result<Arc<dyn EntityExtractor>> {
    match config.extractor {
        ExtractorKind::Heuristic => Ok(Arc::new(HeuristicExtractor::new())),
        ExtractorKind::Precomputed => {
            let path = config.entities_file.as_ref().ok_or_else(|| {
                ReduxerError::Configuration(
                    "entities.entities_file is required when entities.extractor = 'precomputed'"
                        .to_string(),
                )
            })?;
            Ok(Arc::new(PrecomputedExtractor::from_file(path)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_json_shape() {
        let json = r#"{
            "entities": [{"text": "Paul Haggerty", "label": "PERSON"}],
            "proper_nouns": ["Paul", "Haggerty"]
        }"#;
        let extraction: Extraction = serde_json::from_str(json).unwrap();
        assert_eq!(
            extraction.entities,
            vec![EntitySpan::new("Paul Haggerty", EntityLabel::Person)]
        );
        assert_eq!(extraction.proper_nouns, vec!["Paul", "Haggerty"]);
    }

    #[test]
    fn test_extraction_defaults() {
        let extraction: Extraction = serde_json::from_str("{}").unwrap();
        assert!(extraction.is_empty());
    }

    #[test]
    fn test_build_heuristic_extractor() {
        let config = EntityConfig::default();
        let extractor = build_extractor(&config).unwrap();
        assert_eq!(extractor.name(), "heuristic");
    }

    #[test]
    fn test_build_precomputed_without_file() {
        let config = EntityConfig {
            extractor: ExtractorKind::Precomputed,
            ..EntityConfig::default()
        };
        assert!(matches!(
            build_extractor(&config),
            Err(ReduxerError::Configuration(_))
        ));
    }
}
