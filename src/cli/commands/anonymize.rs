//! Anonymize command implementation
//!
//! Reads a text, writes the anonymized text and its lookup table, and
//! optionally verifies the round trip and prints a report.

use super::{read_input, write_output};
use crate::anonymization::{verify_round_trip, AnonymizationEngine, AnonymizationReport};
use crate::config::ReduxerConfig;
use crate::nlp::PrecomputedExtractor;
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
}

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Input text file ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Output file for the anonymized text ("-" for stdout)
    #[arg(short, long, default_value = "-")]
    pub output: PathBuf,

    /// Where to write the lookup table (JSON)
    #[arg(long)]
    pub lookup: PathBuf,

    /// Precomputed extraction (JSON); overrides the configured extractor
    #[arg(long)]
    pub entities: Option<PathBuf>,

    /// Deanonymize the result and compare it with the input
    #[arg(long)]
    pub verify: bool,

    /// Print a summary report to stderr
    #[arg(long, value_enum)]
    pub report: Option<ReportFormat>,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    ///
    /// Returns exit code 1 when `--verify` finds a mismatch; the outputs are
    /// still written.
    pub fn execute(&self, config: &ReduxerConfig) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Anonymizing text");

        let engine = match &self.entities {
            Some(path) => {
                let extractor = PrecomputedExtractor::from_file(path)
                    .with_context(|| format!("Failed to load entities from {}", path.display()))?;
                AnonymizationEngine::from_config_with_extractor(config, Arc::new(extractor))
            }
            None => AnonymizationEngine::from_config(config),
        }
        .context("Failed to build anonymization engine")?;

        let text = read_input(&self.input)?;
        let result = engine.anonymize(&text).context("Anonymization failed")?;

        write_output(&self.output, &result.text)?;
        result
            .lookup_table
            .write_to_file(&self.lookup)
            .context("Failed to write lookup table")?;

        eprintln!(
            "✅ Issued {} placeholders using the {} extractor ({} ms)",
            result.total_detections(),
            engine.extractor_name(),
            result.processing_time_ms
        );
        eprintln!("   Lookup table: {}", self.lookup.display());

        let mut exit_code = 0;
        let round_trip = if self.verify {
            let round_trip = verify_round_trip(&text, &result);
            if round_trip.is_exact() {
                eprintln!("✅ Round trip verified");
            } else {
                eprintln!("⚠️  Round trip mismatch: restored text differs from the input");
                exit_code = 1;
            }
            Some(round_trip)
        } else {
            None
        };

        if let Some(format) = self.report {
            let mut report = AnonymizationReport::from_result(&result);
            if let Some(round_trip) = round_trip {
                report = report.with_round_trip(round_trip);
            }
            match format {
                ReportFormat::Console => eprint!("{}", report.format_console()),
                ReportFormat::Json => eprintln!(
                    "{}",
                    report.format_json().context("Failed to serialize report")?
                ),
            }
        }

        Ok(exit_code)
    }
}
