//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ExtractorKind, ReduxerConfig};
use crate::domain::errors::ReduxerError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ReduxerConfig
/// 4. Applies environment variable overrides (REDUXER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails (including patterns that do not compile)
///
/// # Examples
///
/// ```no_run
/// use reduxer::config::loader::load_config;
///
/// let config = load_config("reduxer.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ReduxerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ReduxerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ReduxerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Loads configuration from `path`, or built-in defaults when no path is given
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: Option<&str>) -> Result<ReduxerConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = ReduxerConfig::default();
            apply_env_overrides(&mut config)?;
            validate(&config)?;
            Ok(config)
        }
    }
}

/// Parses configuration from TOML text
///
/// Performs the same substitution, overrides and validation as
/// [`load_config`].
pub fn parse_config(contents: &str) -> Result<ReduxerConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: ReduxerConfig = toml::from_str(&contents)
        .map_err(|e| ReduxerError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &ReduxerConfig) -> Result<()> {
    config.validate().map_err(|e| {
        ReduxerError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
pub fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ReduxerError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(ReduxerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    let mut result = lines.join("\n");
    if input.ends_with('\n') {
        result.push('\n');
    }
    Ok(result)
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        ReduxerError::Configuration(format!("{name} must be 'true' or 'false', got '{value}'"))
    })
}

/// Applies environment variable overrides using REDUXER_* prefix
///
/// Environment variables follow the pattern: REDUXER_<SECTION>_<KEY>
/// For example: REDUXER_ENTITIES_EXTRACTOR, REDUXER_AUDIT_ENABLED
pub fn apply_env_overrides(config: &mut ReduxerConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("REDUXER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Entity overrides
    if let Ok(val) = std::env::var("REDUXER_ENTITIES_EXTRACTOR") {
        config.entities.extractor = val
            .parse::<ExtractorKind>()
            .map_err(ReduxerError::Configuration)?;
    }
    if let Ok(val) = std::env::var("REDUXER_ENTITIES_FILE") {
        config.entities.entities_file = Some(PathBuf::from(val));
    }

    // Audit overrides
    if let Ok(val) = std::env::var("REDUXER_AUDIT_ENABLED") {
        config.audit.enabled = parse_bool("REDUXER_AUDIT_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("REDUXER_AUDIT_LOG_PATH") {
        config.audit.log_path = PathBuf::from(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("REDUXER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("REDUXER_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("REDUXER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
