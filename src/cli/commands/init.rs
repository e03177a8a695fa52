//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::anonymization::patterns::DEFAULT_PATTERN_LIBRARY;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "reduxer.toml")]
    pub output: String,

    /// Write the built-in patterns out as editable [[patterns]] tables
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Reduxer configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!(
                    "  2. Validate configuration: reduxer -c {} validate-config",
                    self.output
                );
                println!(
                    "  3. Run: reduxer -c {} anonymize -i input.txt -o output.txt --lookup lookup.json",
                    self.output
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Reduxer Configuration File
# Reversible PII and proper-noun anonymizer

[application]
log_level = "info"

# Structured PII patterns are matched in the order listed. With no
# [[patterns]] tables the built-in set is used: phone_number, text_address,
# social_security_number, website.

[entities]
extractor = "heuristic"  # heuristic | precomputed
labels = ["ORG", "PERSON", "GPE", "LOC", "FAC", "PROPN"]
# entities_file = "entities.json"  # required for extractor = "precomputed"

[audit]
enabled = false
log_path = "./audit/reduxer-audit.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
"#
        .to_string()
    }

    /// Generate configuration with the built-in patterns spelled out
    fn generate_config_with_examples() -> String {
        let mut content = String::from(
            r#"# Reduxer Configuration File
# Reversible PII and proper-noun anonymizer
#
# Values may reference environment variables with ${VAR_NAME}, and every
# REDUXER_* variable overrides the matching setting, e.g.
#   REDUXER_ENTITIES_EXTRACTOR=precomputed
#   REDUXER_ENTITIES_FILE=/data/entities.json
#   REDUXER_AUDIT_ENABLED=true

[application]
log_level = "info"  # trace | debug | info | warn | error

[entities]
# heuristic:   built-in capitalization rules, no model needed
# precomputed: read {"entities": [...], "proper_nouns": [...]} from entities_file
extractor = "heuristic"
labels = ["ORG", "PERSON", "GPE", "LOC", "FAC", "PROPN"]
# entities_file = "${REDUXER_HOME}/entities.json"

[audit]
# One line per run; originals are stored only as SHA-256 hashes
enabled = false
log_path = "./audit/reduxer-audit.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never

"#,
        );
        content.push_str(DEFAULT_PATTERN_LIBRARY);
        content
    }
}
