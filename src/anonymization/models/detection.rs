//! Detection records and anonymization results

use crate::anonymization::lookup::LookupTable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Pass that produced a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Structured PII pattern match
    Regex,
    /// Entity span reported by the extractor
    NamedEntity,
    /// Token tagged as a proper noun
    ProperNoun,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regex => "regex",
            Self::NamedEntity => "named_entity",
            Self::ProperNoun => "proper_noun",
        }
    }
}

/// One placeholder issued during anonymization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Placeholder written into the text
    pub placeholder: String,
    /// PII type name or entity label
    pub kind: String,
    /// Original value (hashed in audit logs)
    pub original_value: String,
    /// Pass that produced it
    pub method: DetectionMethod,
    /// False when the replacement left the text unchanged
    pub applied: bool,
}

impl Detection {
    pub fn new(
        placeholder: impl Into<String>,
        kind: impl Into<String>,
        original_value: impl Into<String>,
        method: DetectionMethod,
        applied: bool,
    ) -> Self {
        Self {
            placeholder: placeholder.into(),
            kind: kind.into(),
            original_value: original_value.into(),
            method,
            applied,
        }
    }
}

/// Result of one anonymization call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizedText {
    /// Unique id for this call, shared with the audit log
    pub run_id: Uuid,
    /// Text with placeholders substituted
    pub text: String,
    /// Placeholder → original mapping
    pub lookup_table: LookupTable,
    /// Every placeholder issued, in issue order
    pub detections: Vec<Detection>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// When the call finished
    pub timestamp: DateTime<Utc>,
}

impl AnonymizedText {
    pub fn new(
        text: String,
        lookup_table: LookupTable,
        detections: Vec<Detection>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            text,
            lookup_table,
            detections,
            processing_time_ms,
            timestamp: Utc::now(),
        }
    }

    /// Get total number of detections
    pub fn total_detections(&self) -> usize {
        self.detections.len()
    }

    /// Check if anything was detected
    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }

    /// Detections whose replacement changed the text
    pub fn applied_detections(&self) -> impl Iterator<Item = &Detection> {
        self.detections.iter().filter(|d| d.applied)
    }

    /// Detection counts keyed by kind
    pub fn counts_by_kind(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for detection in &self.detections {
            *counts.entry(detection.kind.clone()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnonymizedText {
        let mut lookup = LookupTable::new();
        lookup.insert("[PHONE]1", "123-456-7890");
        lookup.insert("[WEBSITE]1", "b.com");
        lookup.insert("[PERSON1]", "John Doe");
        AnonymizedText::new(
            "Call [PHONE]1, ask for [PERSON1]".to_string(),
            lookup,
            vec![
                Detection::new(
                    "[PHONE]1",
                    "phone_number",
                    "123-456-7890",
                    DetectionMethod::Regex,
                    true,
                ),
                Detection::new("[WEBSITE]1", "website", "b.com", DetectionMethod::Regex, false),
                Detection::new(
                    "[PERSON1]",
                    "PERSON",
                    "John Doe",
                    DetectionMethod::NamedEntity,
                    true,
                ),
            ],
            3,
        )
    }

    #[test]
    fn test_counts() {
        let result = sample();
        assert_eq!(result.total_detections(), 3);
        assert!(result.has_detections());
        assert_eq!(result.applied_detections().count(), 2);

        let by_kind = result.counts_by_kind();
        assert_eq!(by_kind.get("phone_number"), Some(&1));
        assert_eq!(by_kind.get("PERSON"), Some(&1));
    }

    #[test]
    fn test_method_serializes_snake_case() {
        let json = serde_json::to_string(&DetectionMethod::NamedEntity).unwrap();
        assert_eq!(json, "\"named_entity\"");
        assert_eq!(DetectionMethod::ProperNoun.as_str(), "proper_noun");
    }

    #[test]
    fn test_run_ids_are_unique() {
        assert_ne!(sample().run_id, sample().run_id);
    }
}
