//! Placeholder lookup table
//!
//! Maps each placeholder back to the original substring it replaced. The table
//! keeps insertion order, and deanonymization walks it in that order.

use crate::domain::{ReduxerError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A pair of placeholders where one is a substring of the other
///
/// Replacing `shorter` everywhere also rewrites part of `longer`, e.g.
/// `[PHONE]1` inside `[PHONE]10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderCollision {
    pub shorter: String,
    pub longer: String,
}

/// Placeholder → original lookup table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable {
    entries: IndexMap<String, String>,
}

impl LookupTable {
    /// Create an empty lookup table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mapping. The first mapping for a placeholder wins.
    ///
    /// Returns `false` if the placeholder was already present; the existing
    /// mapping is left untouched.
    pub fn insert(&mut self, placeholder: impl Into<String>, original: impl Into<String>) -> bool {
        let placeholder = placeholder.into();
        if self.entries.contains_key(&placeholder) {
            tracing::warn!(
                placeholder = %placeholder,
                "Placeholder already mapped; keeping the first mapping"
            );
            return false;
        }
        self.entries.insert(placeholder, original.into());
        true
    }

    /// Original value for a placeholder
    pub fn get(&self, placeholder: &str) -> Option<&str> {
        self.entries.get(placeholder).map(String::as_str)
    }

    pub fn contains(&self, placeholder: &str) -> bool {
        self.entries.contains_key(placeholder)
    }

    /// Iterate `(placeholder, original)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Placeholders in insertion order
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every pair of placeholders where one occurs inside the other
    ///
    /// These pairs can make deanonymization rewrite the wrong text. They are
    /// reported, not repaired.
    pub fn placeholder_collisions(&self) -> Vec<PlaceholderCollision> {
        let mut collisions = Vec::new();
        for shorter in self.entries.keys() {
            for longer in self.entries.keys() {
                if shorter != longer && longer.contains(shorter.as_str()) {
                    collisions.push(PlaceholderCollision {
                        shorter: shorter.clone(),
                        longer: longer.clone(),
                    });
                }
            }
        }
        collisions
    }

    /// Serialize as a pretty-printed JSON object (insertion order kept)
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from a JSON object of `placeholder: original` pairs
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the table as JSON
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| {
            ReduxerError::Io(format!(
                "Failed to write lookup table {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Read a table previously written with [`LookupTable::write_to_file`]
    pub fn read_from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ReduxerError::Io(format!(
                "Failed to read lookup table {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }
}

impl<'a> IntoIterator for &'a LookupTable {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
