//! Placeholder synthesis
//!
//! Placeholders are `prefix + n` for structured PII (`[PHONE]1`) and
//! `[LABEL<n>]` for entities (`[PERSON1]`). Counters live for a single
//! anonymization call.

use crate::anonymization::labels::EntityLabel;
use std::collections::HashMap;

/// Per-call placeholder counters, keyed by PII type name or entity label
///
/// PII type names and entity labels share one map. A PII type named `PERSON`
/// would therefore share its count with the PERSON entity label.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderCounters {
    counters: HashMap<String, usize>,
}

impl PlaceholderCounters {
    /// Create an empty set of counters
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self, key: &str) -> usize {
        let counter = self.counters.entry(key.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Next placeholder for a structured PII match: `prefix` + count
    pub fn next_pii(&mut self, pii_type: &str, prefix: &str) -> String {
        let n = self.bump(pii_type);
        format!("{prefix}{n}")
    }

    /// Next placeholder for an entity: `[LABEL` + count + `]`
    pub fn next_entity(&mut self, label: &EntityLabel) -> String {
        let n = self.bump(label.as_str());
        format!("[{}{}]", label.as_str(), n)
    }

    /// Current count for a key (0 if never used)
    #[cfg(test)]
    fn count(&self, key: &str) -> usize {
        self.counters.get(key).copied().unwrap_or(0)
    }
}
