//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Reduxer using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Reduxer - reversible PII and proper-noun anonymizer
#[derive(Parser, Debug)]
#[command(name = "reduxer")]
#[command(version, about, long_about = None)]
#[command(author = "Reduxer Contributors")]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, env = "REDUXER_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REDUXER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace PII and named entities with placeholders
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Restore text from a lookup table
    Deanonymize(commands::deanonymize::DeanonymizeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
