//! Entity labels and the entity anonymization policy

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Label attached to an entity or proper-noun candidate
///
/// The named variants follow the label set common to NLP pipelines
/// (OntoNotes style). Anything else an extractor reports is kept verbatim in
/// [`EntityLabel::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    /// Companies, agencies, institutions
    Org,
    /// People, including fictional
    Person,
    /// Countries, cities, states
    Gpe,
    /// Non-GPE locations, mountain ranges, bodies of water
    Loc,
    /// Buildings, airports, highways, bridges
    Fac,
    /// Token tagged as a proper noun
    Propn,
    /// Any other label (DATE, NORP, MONEY, ...)
    Other(String),
}

impl EntityLabel {
    /// Canonical upper-case label string used in placeholders
    pub fn as_str(&self) -> &str {
        match self {
            Self::Org => "ORG",
            Self::Person => "PERSON",
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
            Self::Fac => "FAC",
            Self::Propn => "PROPN",
            Self::Other(label) => label,
        }
    }
}

impl FromStr for EntityLabel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = match s.trim().to_uppercase().as_str() {
            "ORG" => Self::Org,
            "PERSON" => Self::Person,
            "GPE" => Self::Gpe,
            "LOC" => Self::Loc,
            "FAC" => Self::Fac,
            "PROPN" => Self::Propn,
            other => Self::Other(other.to_string()),
        };
        Ok(label)
    }
}

impl From<String> for EntityLabel {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(label) => label,
            Err(never) => match never {},
        }
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which entity labels get replaced during the entity pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityPolicy {
    labels: Vec<EntityLabel>,
}

impl EntityPolicy {
    /// Create a policy allowing exactly the given labels
    pub fn new(labels: impl IntoIterator<Item = EntityLabel>) -> Self {
        let mut unique = Vec::new();
        for label in labels {
            if !unique.contains(&label) {
                unique.push(label);
            }
        }
        Self { labels: unique }
    }

    /// Parse a policy from label strings (as found in configuration)
    pub fn from_strings<S: AsRef<str>>(labels: &[S]) -> Self {
        Self::new(labels.iter().map(|s| EntityLabel::from(s.as_ref().to_string())))
    }

    /// Whether candidates with this label are anonymized
    pub fn allows(&self, label: &EntityLabel) -> bool {
        self.labels.contains(label)
    }

    /// Allowed labels, in configuration order
    pub fn labels(&self) -> &[EntityLabel] {
        &self.labels
    }
}

impl Default for EntityPolicy {
    /// ORG, PERSON, GPE, LOC, FAC and PROPN
    fn default() -> Self {
        Self::new(default_labels())
    }
}

/// Labels anonymized when nothing else is configured
pub fn default_labels() -> Vec<EntityLabel> {
    vec![
        EntityLabel::Org,
        EntityLabel::Person,
        EntityLabel::Gpe,
        EntityLabel::Loc,
        EntityLabel::Fac,
        EntityLabel::Propn,
    ]
}
