//! Anonymization summary report
//!
//! Summarizes one run: what was replaced, which regex matches were already
//! consumed, which placeholders can collide during restoration, and whether
//! the round trip was verified.

use crate::anonymization::deanonymize::RoundTrip;
use crate::anonymization::lookup::PlaceholderCollision;
use crate::anonymization::models::{AnonymizedText, DetectionMethod};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of one anonymization run
#[derive(Debug, Clone, Serialize)]
pub struct AnonymizationReport {
    pub run_id: String,

    /// Total placeholders issued
    pub total_detections: usize,

    /// Placeholders issued by kind (PII type name or entity label)
    pub detections_by_kind: BTreeMap<String, usize>,

    /// Placeholders issued by pass
    pub detections_by_method: BTreeMap<String, usize>,

    /// Regex matches whose replacement changed the text
    pub applied_regex_matches: usize,

    /// Regex matches whose substring was already consumed
    pub consumed_regex_matches: usize,

    /// Placeholder pairs that can collide during restoration
    pub collisions: Vec<PlaceholderCollision>,

    /// Round-trip status, when verification was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_trip: Option<RoundTrip>,

    pub processing_time_ms: u64,

    pub warnings: Vec<String>,
}

impl AnonymizationReport {
    /// Build a report from an anonymization result
    pub fn from_result(result: &AnonymizedText) -> Self {
        let mut detections_by_method = BTreeMap::new();
        let mut applied_regex_matches = 0;
        let mut consumed_regex_matches = 0;

        for detection in &result.detections {
            *detections_by_method
                .entry(detection.method.as_str().to_string())
                .or_insert(0) += 1;

            if detection.method == DetectionMethod::Regex {
                if detection.applied {
                    applied_regex_matches += 1;
                } else {
                    consumed_regex_matches += 1;
                }
            }
        }

        let collisions = result.lookup_table.placeholder_collisions();
        let warnings = collisions
            .iter()
            .map(|c| format!("{} is a substring of {}", c.shorter, c.longer))
            .collect();

        Self {
            run_id: result.run_id.to_string(),
            total_detections: result.total_detections(),
            detections_by_kind: result.counts_by_kind(),
            detections_by_method,
            applied_regex_matches,
            consumed_regex_matches,
            collisions,
            round_trip: None,
            processing_time_ms: result.processing_time_ms,
            warnings,
        }
    }

    /// Attach a round-trip verification outcome
    pub fn with_round_trip(mut self, round_trip: RoundTrip) -> Self {
        if let RoundTrip::Mismatch {
            first_divergence, ..
        } = round_trip
        {
            self.warnings.push(format!(
                "Restored text diverges from the original at byte {first_divergence}"
            ));
        }
        self.round_trip = Some(round_trip);
        self
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                    ANONYMIZATION REPORT                       \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Run ID:                   {}\n", self.run_id));
        output.push_str(&format!(
            "  Placeholders Issued:      {}\n",
            self.total_detections
        ));
        output.push_str(&format!(
            "  Regex Matches Applied:    {}\n",
            self.applied_regex_matches
        ));
        output.push_str(&format!(
            "  Regex Matches Consumed:   {}\n",
            self.consumed_regex_matches
        ));
        output.push_str(&format!(
            "  Processing Time:          {} ms\n",
            self.processing_time_ms
        ));
        let round_trip = match &self.round_trip {
            None => "not verified",
            Some(RoundTrip::Exact) => "exact",
            Some(RoundTrip::Mismatch { .. }) => "MISMATCH",
        };
        output.push_str(&format!("  Round Trip:               {round_trip}\n"));
        output.push('\n');

        if !self.detections_by_kind.is_empty() {
            output.push_str("🔍 DETECTIONS BY KIND\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut kinds: Vec<_> = self.detections_by_kind.iter().collect();
            kinds.sort_by(|a, b| b.1.cmp(a.1));

            for (kind, count) in kinds {
                output.push_str(&format!("  {:30} {:>5}\n", kind, count));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {}\n", warning));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
