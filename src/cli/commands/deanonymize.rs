//! Deanonymize command implementation

use super::{read_input, write_output};
use crate::anonymization::{deanonymize, LookupTable};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the deanonymize command
#[derive(Args, Debug)]
pub struct DeanonymizeArgs {
    /// Anonymized text file ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Lookup table written by `anonymize`
    #[arg(long)]
    pub lookup: PathBuf,

    /// Output file for the restored text ("-" for stdout)
    #[arg(short, long, default_value = "-")]
    pub output: PathBuf,
}

impl DeanonymizeArgs {
    /// Execute the deanonymize command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Restoring text");

        let lookup_table = LookupTable::read_from_file(&self.lookup)
            .with_context(|| format!("Failed to load lookup table {}", self.lookup.display()))?;

        let collisions = lookup_table.placeholder_collisions();
        if !collisions.is_empty() {
            eprintln!(
                "⚠️  {} placeholder collision(s); restored text may be incorrect",
                collisions.len()
            );
        }

        let text = read_input(&self.input)?;
        let restored = deanonymize(&lookup_table, &text);
        write_output(&self.output, &restored)?;

        eprintln!(
            "✅ Restored text using {} placeholders",
            lookup_table.len()
        );
        Ok(0)
    }
}
