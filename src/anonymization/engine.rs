//! Main anonymization engine
//!
//! This module provides the [`AnonymizationEngine`], which runs the two
//! substitution passes over a text and builds one lookup table.
//!
//! # Passes
//!
//! 1. **Structured PII**: every pattern, in configuration order, is matched
//!    against the *original* text. Each match replaces the first remaining
//!    occurrence of the matched substring in the working text with
//!    `prefix + n` (e.g. `[PHONE]1`).
//! 2. **Entities and proper nouns**: the output of pass 1 goes to the
//!    [`EntityExtractor`]. Its entity spans and proper-noun tokens are merged,
//!    sorted longest first, filtered by the [`EntityPolicy`], and each
//!    candidate still present is replaced with `[LABEL<n>]`.
//!
//! # Examples
//!
//! ```
//! use reduxer::anonymization::{AnonymizationEngine, PiiConfig};
//! use reduxer::nlp::HeuristicExtractor;
//! use std::sync::Arc;
//!
//! # fn example() -> reduxer::domain::Result<()> {
//! let engine = AnonymizationEngine::new(
//!     PiiConfig::default_patterns()?,
//!     Arc::new(HeuristicExtractor::new()),
//! );
//!
//! let result = engine.anonymize("Call 123-456-7890 or email a@b.com")?;
//! assert_eq!(result.text, "Call [PHONE]1 or email [EMAIL]1");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::anonymization::{
    audit::AuditLogger,
    candidates::{collect_candidates, sort_longest_first},
    labels::EntityPolicy,
    lookup::LookupTable,
    models::{AnonymizedText, Detection, DetectionMethod},
    patterns::PiiConfig,
    placeholder::PlaceholderCounters,
};
use crate::config::ReduxerConfig;
use crate::domain::{ExtractorError, Result};
use crate::nlp::{build_extractor, EntityExtractor};
use std::sync::Arc;
use std::time::Instant;

/// Main anonymization engine
///
/// Holds the compiled PII patterns, the entity policy and the injected
/// extractor. Each [`anonymize`](Self::anonymize) call starts from fresh
/// counters and an empty lookup table.
pub struct AnonymizationEngine {
    pii_config: PiiConfig,
    policy: EntityPolicy,
    extractor: Arc<dyn EntityExtractor>,
    audit_logger: Option<AuditLogger>,
}

impl AnonymizationEngine {
    /// Create an engine with the default entity policy and no audit log
    pub fn new(pii_config: PiiConfig, extractor: Arc<dyn EntityExtractor>) -> Self {
        Self {
            pii_config,
            policy: EntityPolicy::default(),
            extractor,
            audit_logger: None,
        }
    }

    /// Replace the entity policy
    pub fn with_policy(mut self, policy: EntityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Append every run to an audit log
    pub fn with_audit_logger(mut self, audit_logger: AuditLogger) -> Self {
        self.audit_logger = Some(audit_logger);
        self
    }

    /// Build an engine from configuration, including its extractor
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern does not compile, if the configured
    /// extractor cannot be built, or if the audit log directory cannot be
    /// created.
    pub fn from_config(config: &ReduxerConfig) -> Result<Self> {
        let extractor = build_extractor(&config.entities)?;
        Self::from_config_with_extractor(config, extractor)
    }

    /// Build an engine from configuration with a caller-supplied extractor
    pub fn from_config_with_extractor(
        config: &ReduxerConfig,
        extractor: Arc<dyn EntityExtractor>,
    ) -> Result<Self> {
        let mut engine =
            Self::new(config.pii_config()?, extractor).with_policy(config.entity_policy());

        if config.audit.enabled {
            engine = engine.with_audit_logger(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?);
        }

        Ok(engine)
    }

    /// Anonymize a text
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Unavailable`] if the extractor is not ready,
    /// [`ExtractorError::ExtractionFailed`] if it fails on this text, or an
    /// audit error if the audit log cannot be written.
    pub fn anonymize(&self, text: &str) -> Result<AnonymizedText> {
        let start = Instant::now();

        let (anonymized, lookup_table, detections) =
            run_passes(text, &self.pii_config, &self.policy, self.extractor.as_ref())?;

        let result = AnonymizedText::new(
            anonymized,
            lookup_table,
            detections,
            start.elapsed().as_millis() as u64,
        );

        crate::log_anonymization_complete!(
            result.run_id,
            result.total_detections(),
            result.processing_time_ms
        );

        if let Some(ref logger) = self.audit_logger {
            logger.log_anonymization(&result)?;
        }

        Ok(result)
    }

    pub fn pii_config(&self) -> &PiiConfig {
        &self.pii_config
    }

    pub fn policy(&self) -> &EntityPolicy {
        &self.policy
    }

    /// Name of the injected extractor
    pub fn extractor_name(&self) -> &'static str {
        self.extractor.name()
    }

    pub fn is_auditing(&self) -> bool {
        self.audit_logger.is_some()
    }
}

/// Anonymize `text` with the default entity policy
///
/// Returns the anonymized text and the placeholder → original lookup table.
pub fn anonymize(
    text: &str,
    pii_config: &PiiConfig,
    extractor: &dyn EntityExtractor,
) -> Result<(String, LookupTable)> {
    let (anonymized, lookup_table, _) =
        run_passes(text, pii_config, &EntityPolicy::default(), extractor)?;
    Ok((anonymized, lookup_table))
}

fn run_passes(
    text: &str,
    pii_config: &PiiConfig,
    policy: &EntityPolicy,
    extractor: &dyn EntityExtractor,
) -> Result<(String, LookupTable, Vec<Detection>)> {
    let mut counters = PlaceholderCounters::new();
    let mut lookup_table = LookupTable::new();
    let mut detections = Vec::new();

    let working = replace_structured_pii(
        text,
        pii_config,
        &mut counters,
        &mut lookup_table,
        &mut detections,
    );

    if !extractor.is_available() {
        return Err(ExtractorError::unavailable(extractor.name(), "extractor is not ready").into());
    }
    let extraction = extractor.extract(&working)?;
    tracing::debug!(
        extractor = extractor.name(),
        entities = extraction.entities.len(),
        proper_nouns = extraction.proper_nouns.len(),
        "Extraction complete"
    );

    let mut candidates = collect_candidates(extraction);
    sort_longest_first(&mut candidates);

    let mut working = working;
    for candidate in candidates {
        if !policy.allows(&candidate.label) {
            continue;
        }
        // An empty needle matches at offset 0 of any text.
        if candidate.text.is_empty() {
            tracing::debug!(label = %candidate.label, "Empty candidate skipped");
            continue;
        }
        if !working.contains(candidate.text.as_str()) {
            tracing::trace!(label = %candidate.label, "Candidate no longer present; skipped");
            continue;
        }

        let placeholder = counters.next_entity(&candidate.label);
        working = working.replacen(candidate.text.as_str(), &placeholder, 1);
        lookup_table.insert(placeholder.clone(), candidate.text.clone());
        detections.push(Detection::new(
            placeholder,
            candidate.label.as_str(),
            candidate.text,
            candidate.source.into(),
            true,
        ));
    }

    Ok((working, lookup_table, detections))
}

/// Regex pass. Matches come from the original text; replacements land in the
/// working copy.
fn replace_structured_pii(
    text: &str,
    pii_config: &PiiConfig,
    counters: &mut PlaceholderCounters,
    lookup_table: &mut LookupTable,
    detections: &mut Vec<Detection>,
) -> String {
    let mut working = text.to_string();

    for pattern in pii_config.iter() {
        for found in pattern.regex.find_iter(text) {
            let original = found.as_str();
            if original.is_empty() {
                tracing::debug!(pattern = %pattern.name, "Skipping zero-length match");
                continue;
            }

            let placeholder = counters.next_pii(&pattern.name, &pattern.placeholder);
            let applied = working.contains(original);
            if applied {
                working = working.replacen(original, &placeholder, 1);
            } else {
                tracing::debug!(
                    pattern = %pattern.name,
                    placeholder = %placeholder,
                    "Match already consumed by an earlier pattern"
                );
            }

            lookup_table.insert(placeholder.clone(), original);
            detections.push(Detection::new(
                placeholder,
                pattern.name.as_str(),
                original,
                DetectionMethod::Regex,
                applied,
            ));
        }
    }

    working
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::labels::EntityLabel;
    use crate::anonymization::patterns::PatternDefinition;
    use crate::nlp::{EntitySpan, Extraction, PrecomputedExtractor};

    fn no_entities() -> Arc<dyn EntityExtractor> {
        Arc::new(PrecomputedExtractor::new(Extraction::default()))
    }

    fn engine_with(extraction: Extraction) -> AnonymizationEngine {
        AnonymizationEngine::new(
            PiiConfig::default_patterns().unwrap(),
            Arc::new(PrecomputedExtractor::new(extraction)),
        )
    }

    #[test]
    fn test_phone_and_email() {
        let engine =
            AnonymizationEngine::new(PiiConfig::default_patterns().unwrap(), no_entities());
        let result = engine.anonymize("Call 123-456-7890 or email a@b.com").unwrap();

        assert_eq!(result.text, "Call [PHONE]1 or email [EMAIL]1");
        assert_eq!(result.lookup_table.get("[PHONE]1"), Some("123-456-7890"));
        assert_eq!(result.lookup_table.get("[EMAIL]1"), Some("a@b.com"));
    }

    #[test]
    fn test_consumed_match_still_recorded() {
        // The website pattern also matches the email's domain; the email pass
        // consumed it first.
        let engine =
            AnonymizationEngine::new(PiiConfig::default_patterns().unwrap(), no_entities());
        let result = engine.anonymize("email a@b.com").unwrap();

        assert_eq!(result.text, "email [EMAIL]1");
        assert_eq!(result.lookup_table.get("[WEBSITE]1"), Some("b.com"));

        let website = result
            .detections
            .iter()
            .find(|d| d.placeholder == "[WEBSITE]1")
            .unwrap();
        assert!(!website.applied);
    }

    #[test]
    fn test_duplicate_values_replace_first_remaining() {
        let engine =
            AnonymizationEngine::new(PiiConfig::default_patterns().unwrap(), no_entities());
        let result = engine.anonymize("111-222-3333 and 111-222-3333").unwrap();

        assert_eq!(result.text, "[PHONE]1 and [PHONE]2");
        assert_eq!(result.lookup_table.get("[PHONE]2"), Some("111-222-3333"));
    }

    #[test]
    fn test_zero_length_matches_skipped() {
        let definitions = vec![PatternDefinition::new("maybe_digits", r"\d*", "[NUM]")];
        let config = PiiConfig::from_definitions(&definitions).unwrap();
        let (text, lookup) = anonymize("ab 12", &config, no_entities().as_ref()).unwrap();

        assert_eq!(text, "ab [NUM]1");
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn test_longest_candidate_wins() {
        let engine = engine_with(Extraction {
            entities: vec![EntitySpan::new("Paul Haggerty", EntityLabel::Person)],
            proper_nouns: vec!["Paul".to_string(), "Haggerty".to_string()],
        });
        let result = engine.anonymize("Sincerely, Paul Haggerty").unwrap();

        assert_eq!(result.text, "Sincerely, [PERSON1]");
        assert_eq!(result.lookup_table.len(), 1);
        assert_eq!(result.lookup_table.get("[PERSON1]"), Some("Paul Haggerty"));
    }

    #[test]
    fn test_absent_candidate_does_not_bump_counter() {
        let engine = engine_with(Extraction {
            entities: vec![
                EntitySpan::new("Nobody Here", EntityLabel::Person),
                EntitySpan::new("Ann", EntityLabel::Person),
            ],
            proper_nouns: vec![],
        });
        let result = engine.anonymize("Ask Ann").unwrap();

        assert_eq!(result.text, "Ask [PERSON1]");
        assert_eq!(result.lookup_table.get("[PERSON1]"), Some("Ann"));
    }

    #[test]
    fn test_policy_filters_labels() {
        let engine = engine_with(Extraction {
            entities: vec![
                EntitySpan::new("Monday", EntityLabel::Other("DATE".to_string())),
                EntitySpan::new("Acme", EntityLabel::Org),
            ],
            proper_nouns: vec![],
        })
        .with_policy(EntityPolicy::new([EntityLabel::Person]));

        let result = engine.anonymize("Acme opens Monday").unwrap();
        assert_eq!(result.text, "Acme opens Monday");
        assert!(result.lookup_table.is_empty());
    }

    #[test]
    fn test_proper_noun_detection_method() {
        let engine = engine_with(Extraction {
            entities: vec![],
            proper_nouns: vec!["TextBlob".to_string()],
        });
        let result = engine.anonymize("using TextBlob").unwrap();

        assert_eq!(result.text, "using [PROPN1]");
        assert_eq!(result.detections[0].method, DetectionMethod::ProperNoun);
    }

    #[test]
    fn test_shared_placeholder_prefix_loses_second_mapping() {
        let pii_config = PiiConfig::from_definitions(&[
            PatternDefinition::new("phone", r"\b\d{3}-\d{4}\b", "[NUM]"),
            PatternDefinition::new("fax", r"\b\d{4}-\d{4}\b", "[NUM]"),
        ])
        .unwrap();
        let engine = AnonymizationEngine::new(pii_config, no_entities());
        let text = "call 555-1234 or fax 5555-6789";

        let result = engine.anonymize(text).unwrap();

        // Both types emit [NUM]1; the lookup keeps the phone's value only
        assert_eq!(result.text, "call [NUM]1 or fax [NUM]1");
        assert_eq!(result.lookup_table.len(), 1);
        assert_eq!(result.lookup_table.get("[NUM]1"), Some("555-1234"));
        assert_eq!(
            crate::anonymization::deanonymize(&result.lookup_table, &result.text),
            "call 555-1234 or fax 555-1234"
        );
    }

    #[test]
    fn test_empty_candidates_are_skipped() {
        let engine = engine_with(Extraction {
            entities: vec![EntitySpan::new("", EntityLabel::Person)],
            proper_nouns: vec![String::new()],
        });
        let result = engine.anonymize("hello world").unwrap();

        assert_eq!(result.text, "hello world");
        assert!(result.lookup_table.is_empty());
        assert!(!result.has_detections());
    }

    #[test]
    fn test_empty_text() {
        let engine = AnonymizationEngine::new(
            PiiConfig::default_patterns().unwrap(),
            Arc::new(crate::nlp::HeuristicExtractor::new()),
        );
        let result = engine.anonymize("").unwrap();
        assert_eq!(result.text, "");
        assert!(!result.has_detections());
    }
}
