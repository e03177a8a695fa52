//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Reduxer configuration file.

use crate::config::ReduxerConfig;
use crate::domain::Result;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// `config` is the outcome of loading `config_path` (or the defaults);
    /// loading already ran validation.
    pub fn execute(
        &self,
        config_path: Option<&str>,
        config: &Result<ReduxerConfig>,
    ) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("<built-in defaults>");
        tracing::info!(config_path = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let config = match config {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        let pii_config = config.pii_config()?;

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Patterns ({}):", pii_config.len());
        for pattern in pii_config.iter() {
            println!("    {} → {}<n>", pattern.name, pattern.placeholder);
        }
        println!("  Extractor: {:?}", config.entities.extractor);
        if let Some(ref path) = config.entities.entities_file {
            println!("  Entities File: {}", path.display());
        }
        println!("  Entity Labels: {}", config.entities.labels.join(", "));
        println!(
            "  Audit: {}",
            if config.audit.enabled {
                config.audit.log_path.display().to_string()
            } else {
                "disabled".to_string()
            }
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}
