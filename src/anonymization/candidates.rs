//! Entity-pass candidates
//!
//! Entity spans and proper-noun tokens come out of the extractor as two
//! lists. They are folded into one [`Candidate`] record so filtering and
//! ordering treat them the same way.

use crate::anonymization::labels::EntityLabel;
use crate::anonymization::models::DetectionMethod;
use crate::nlp::Extraction;
use std::cmp::Reverse;

/// Where a candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    Entity,
    ProperNoun,
}

impl From<CandidateSource> for DetectionMethod {
    fn from(source: CandidateSource) -> Self {
        match source {
            CandidateSource::Entity => DetectionMethod::NamedEntity,
            CandidateSource::ProperNoun => DetectionMethod::ProperNoun,
        }
    }
}

/// Substring proposed for replacement during the entity pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub label: EntityLabel,
    pub source: CandidateSource,
}

impl Candidate {
    /// Length in characters, not bytes
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Entities first, then proper nouns (labelled PROPN), each in extractor order
pub fn collect_candidates(extraction: Extraction) -> Vec<Candidate> {
    let entities = extraction.entities.into_iter().map(|span| Candidate {
        text: span.text,
        label: span.label,
        source: CandidateSource::Entity,
    });
    let proper_nouns = extraction.proper_nouns.into_iter().map(|text| Candidate {
        text,
        label: EntityLabel::Propn,
        source: CandidateSource::ProperNoun,
    });

    entities.chain(proper_nouns).collect()
}

/// Longest text first; ties keep their relative order
pub fn sort_longest_first(candidates: &mut [Candidate]) {
    candidates.sort_by_key(|c| Reverse(c.char_len()));
}
