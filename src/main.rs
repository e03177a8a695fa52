// Reduxer - Reversible PII and Proper-Noun Anonymizer
// Copyright (c) 2025 Reduxer Contributors
// Licensed under the MIT License

use clap::Parser;
use reduxer::cli::commands::config_error_exit;
use reduxer::cli::{Cli, Commands};
use reduxer::config::{load_config_or_default, LoggingConfig, ReduxerConfig};
use reduxer::domain::Result;
use reduxer::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = load_config_or_default(cli.config.as_deref());

    // Fall back to console-only logging when the config is unusable
    let (log_level, logging_config) = match &config {
        Ok(c) => (
            cli.log_level
                .clone()
                .unwrap_or_else(|| c.application.log_level.clone()),
            c.logging.clone(),
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            LoggingConfig::default(),
        ),
    };
    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Reduxer starting");

    let exit_code = match execute_command(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &Result<ReduxerConfig>) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Anonymize(args) => match config {
            Ok(config) => args.execute(config),
            Err(e) => Ok(config_error_exit(e)),
        },
        Commands::Deanonymize(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(cli.config.as_deref(), config),
        Commands::Init(args) => args.execute(),
    }
}
