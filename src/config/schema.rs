//! Configuration schema types
//!
//! This module defines the configuration structure for Reduxer. Every section
//! is optional in TOML; an empty file yields the built-in defaults.

use crate::anonymization::labels::{default_labels, EntityPolicy};
use crate::anonymization::patterns::{PatternDefinition, PiiConfig};
use crate::domain::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Reduxer configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReduxerConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Structured PII patterns, in matching order (empty = built-in set)
    #[serde(default)]
    pub patterns: Vec<PatternDefinition>,

    /// Entity extraction settings
    #[serde(default)]
    pub entities: EntityConfig,

    /// Audit log settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ReduxerConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid, including
    /// patterns that do not compile
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.application.validate()?;
        self.entities.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        self.pii_config().map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Compile the configured patterns, falling back to the built-in set
    pub fn pii_config(&self) -> Result<PiiConfig> {
        if self.patterns.is_empty() {
            PiiConfig::default_patterns()
        } else {
            PiiConfig::from_definitions(&self.patterns)
        }
    }

    /// Entity labels to anonymize
    pub fn entity_policy(&self) -> EntityPolicy {
        EntityPolicy::from_strings(&self.entities.labels)
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Entity extractor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    /// Built-in capitalization and lexicon rules
    #[default]
    Heuristic,
    /// Extraction read from `entities_file`
    Precomputed,
}

impl std::str::FromStr for ExtractorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" => Ok(Self::Heuristic),
            "precomputed" => Ok(Self::Precomputed),
            other => Err(format!(
                "Invalid entities.extractor '{other}'. Must be one of: heuristic, precomputed"
            )),
        }
    }
}

/// Entity extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Extractor backend
    #[serde(default)]
    pub extractor: ExtractorKind,

    /// Labels to anonymize (ORG, PERSON, GPE, LOC, FAC, PROPN by default)
    #[serde(default = "default_entity_labels")]
    pub labels: Vec<String>,

    /// JSON extraction file for the precomputed extractor
    #[serde(default)]
    pub entities_file: Option<PathBuf>,
}

impl EntityConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.labels.iter().any(|l| l.trim().is_empty()) {
            return Err("entities.labels cannot contain empty labels".to_string());
        }

        if self.extractor == ExtractorKind::Precomputed && self.entities_file.is_none() {
            return Err(
                "entities.entities_file is required when entities.extractor = 'precomputed'"
                    .to_string(),
            );
        }

        Ok(())
    }
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorKind::default(),
            labels: default_entity_labels(),
            entities_file: None,
        }
    }
}

/// Audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable the audit log
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Write JSON lines instead of plain text
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl AuditConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err(
                "logging.local_path cannot be empty when local logging is enabled".to_string(),
            );
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_entity_labels() -> Vec<String> {
    default_labels().into_iter().map(String::from).collect()
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/reduxer-audit.log")
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
