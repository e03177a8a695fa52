//! Reverse substitution and round-trip checks

use crate::anonymization::lookup::LookupTable;
use crate::anonymization::models::AnonymizedText;
use serde::Serialize;

/// Restore original text from a lookup table
///
/// Every occurrence of each placeholder is replaced, in lookup-table order.
/// Placeholders that are substrings of longer ones (`[PHONE]1` inside
/// `[PHONE]10`) are logged as warnings and may restore incorrectly.
pub fn deanonymize(lookup_table: &LookupTable, anonymized_text: &str) -> String {
    for collision in lookup_table.placeholder_collisions() {
        tracing::warn!(
            shorter = %collision.shorter,
            longer = %collision.longer,
            "Placeholder is a substring of another; restoration may be wrong"
        );
    }

    let mut restored = anonymized_text.to_string();
    for (placeholder, original) in lookup_table.iter() {
        restored = restored.replace(placeholder, original);
    }
    restored
}

/// Outcome of comparing a restored text against its original
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundTrip {
    Exact,
    Mismatch {
        /// Byte offset of the first differing character
        first_divergence: usize,
        original_len: usize,
        restored_len: usize,
    },
}

impl RoundTrip {
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact)
    }

    fn compare(original: &str, restored: &str) -> Self {
        if original == restored {
            return Self::Exact;
        }

        let first_divergence = original
            .char_indices()
            .zip(restored.chars())
            .find(|((_, a), b)| a != b)
            .map(|((idx, _), _)| idx)
            .unwrap_or_else(|| original.len().min(restored.len()));

        Self::Mismatch {
            first_divergence,
            original_len: original.len(),
            restored_len: restored.len(),
        }
    }
}

/// Deanonymize `result` and compare it with `original`
pub fn verify_round_trip(original: &str, result: &AnonymizedText) -> RoundTrip {
    let restored = deanonymize(&result.lookup_table, &result.text);
    let outcome = RoundTrip::compare(original, &restored);

    if let RoundTrip::Mismatch {
        first_divergence,
        original_len,
        restored_len,
    } = outcome
    {
        crate::log_round_trip_mismatch!(
            result.run_id,
            first_divergence,
            original_len,
            restored_len
        );
    }

    outcome
}
