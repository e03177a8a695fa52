//! Configuration management for Reduxer.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Reduxer uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `REDUXER_*` environment overrides
//! - Default values for every setting
//! - Validation, including compiling every PII pattern
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use reduxer::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("reduxer.toml")?;
//!
//! println!("Extractor: {:?}", config.entities.extractor);
//! println!("Patterns: {}", config.pii_config()?.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - `patterns` - Ordered `[[patterns]]` tables (name, pattern, placeholder)
//! - [`EntityConfig`] - Extractor selection and labels to anonymize
//! - [`AuditConfig`] - Audit log settings
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [[patterns]]
//! name = "phone_number"
//! pattern = '\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b'
//! placeholder = "[PHONE]"
//!
//! [entities]
//! extractor = "heuristic"
//! labels = ["ORG", "PERSON", "GPE", "LOC", "FAC", "PROPN"]
//!
//! [audit]
//! enabled = true
//! log_path = "${REDUXER_HOME}/audit.log"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, AuditConfig, EntityConfig, ExtractorKind, LoggingConfig, ReduxerConfig,
};
