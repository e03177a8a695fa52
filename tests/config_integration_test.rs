//! Integration tests for configuration loading

use reduxer::anonymization::AnonymizationEngine;
use reduxer::config::{load_config, load_config_or_default, ExtractorKind};
use reduxer::domain::ReduxerError;
use reduxer::nlp::HeuristicExtractor;
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_load_full_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("reduxer.toml");
    fs::write(
        &path,
        r#"
[application]
log_level = "debug"

[[patterns]]
name = "ticket"
pattern = 'TCK-\d{4}'
placeholder = "[TICKET]"

[entities]
extractor = "heuristic"
labels = ["PERSON"]

[logging]
local_rotation = "hourly"
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.patterns.len(), 1);
    assert_eq!(config.entities.extractor, ExtractorKind::Heuristic);
    assert_eq!(config.logging.local_rotation, "hourly");

    let engine = AnonymizationEngine::from_config_with_extractor(
        &config,
        Arc::new(HeuristicExtractor::new()),
    )
    .unwrap();
    let result = engine.anonymize("See TCK-1234, not 123-456-7890").unwrap();
    assert_eq!(result.text, "See [TICKET]1, not 123-456-7890");
}

#[test]
fn test_malformed_regex_is_reported_with_name() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("reduxer.toml");
    fs::write(
        &path,
        r#"
[[patterns]]
name = "account_number"
pattern = '[0-9'
placeholder = "[ACCOUNT]"
"#,
    )
    .unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ReduxerError::Configuration(_)));
    assert!(err.to_string().contains("account_number"));
}

#[test]
fn test_missing_config_file() {
    let err = load_config("/nonexistent/reduxer.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_env_substitution_in_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("reduxer.toml");
    fs::write(
        &path,
        r#"
[audit]
log_path = "${REDUXER_IT_AUDIT_DIR}/audit.log"
"#,
    )
    .unwrap();

    std::env::set_var("REDUXER_IT_AUDIT_DIR", "/var/reduxer");
    let config = load_config(&path);
    std::env::remove_var("REDUXER_IT_AUDIT_DIR");

    let config = config.unwrap();
    assert_eq!(
        config.audit.log_path,
        std::path::PathBuf::from("/var/reduxer/audit.log")
    );
}

#[test]
fn test_unset_env_variable_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("reduxer.toml");
    fs::write(&path, "[audit]\nlog_path = \"${REDUXER_IT_NEVER_SET}\"\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("REDUXER_IT_NEVER_SET"));
}

#[test]
fn test_env_overrides_apply_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();

    std::env::set_var("REDUXER_AUDIT_ENABLED", "true");
    std::env::set_var("REDUXER_AUDIT_LOG_PATH", "/tmp/reduxer-it/audit.log");
    let config = load_config_or_default(None);
    std::env::remove_var("REDUXER_AUDIT_ENABLED");
    std::env::remove_var("REDUXER_AUDIT_LOG_PATH");

    let config = config.unwrap();
    assert!(config.audit.enabled);
    assert_eq!(
        config.audit.log_path,
        std::path::PathBuf::from("/tmp/reduxer-it/audit.log")
    );
}

#[test]
fn test_invalid_bool_override() {
    let _lock = ENV_MUTEX.lock().unwrap();

    std::env::set_var("REDUXER_LOGGING_LOCAL_ENABLED", "sometimes");
    let result = load_config_or_default(None);
    std::env::remove_var("REDUXER_LOGGING_LOCAL_ENABLED");

    assert!(result.is_err());
}

#[test]
fn test_precomputed_extractor_requires_file() {
    let _lock = ENV_MUTEX.lock().unwrap();

    std::env::set_var("REDUXER_ENTITIES_EXTRACTOR", "precomputed");
    let result = load_config_or_default(None);
    std::env::remove_var("REDUXER_ENTITIES_EXTRACTOR");

    assert!(result.is_err());
}
