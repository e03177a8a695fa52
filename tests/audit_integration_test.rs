//! Audit log integration tests

use reduxer::anonymization::audit::hash_value;
use reduxer::anonymization::{AnonymizationEngine, AnonymizationReport};
use reduxer::config::ReduxerConfig;
use std::fs;
use tempfile::tempdir;

const TEXT: &str = "Contact John Doe at 123-456-7890 or jdoe@example.com.";

fn audited_config(log_path: std::path::PathBuf, json_format: bool) -> ReduxerConfig {
    let mut config = ReduxerConfig::default();
    config.audit.enabled = true;
    config.audit.log_path = log_path;
    config.audit.json_format = json_format;
    config
}

#[test]
fn test_audit_log_never_contains_plaintext() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("audit").join("reduxer-audit.log");
    let engine = AnonymizationEngine::from_config(&audited_config(log_path.clone(), true)).unwrap();
    assert!(engine.is_auditing());

    let result = engine.anonymize(TEXT).unwrap();
    assert!(result.has_detections());

    let content = fs::read_to_string(&log_path).unwrap();
    for original in ["John Doe", "123-456-7890", "jdoe@example.com"] {
        assert!(!content.contains(original), "audit log leaked {original}");
    }
    assert!(content.contains(&hash_value("John Doe")));
    assert!(content.contains(&result.run_id.to_string()));
}

#[test]
fn test_audit_log_appends_one_json_line_per_run() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("audit.log");
    let engine = AnonymizationEngine::from_config(&audited_config(log_path.clone(), true)).unwrap();

    engine.anonymize(TEXT).unwrap();
    engine.anonymize("Nothing to hide here").unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["detections"][0]["placeholder"], "[PHONE]1");
    assert_eq!(first["detections"][0]["method"], "regex");
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["detections_count"], 0);
}

#[test]
fn test_plain_text_audit_format() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("audit.log");
    let engine =
        AnonymizationEngine::from_config(&audited_config(log_path.clone(), false)).unwrap();

    engine.anonymize(TEXT).unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("Run: "));
    assert!(content.contains("Detections: "));
    assert!(!content.contains("John Doe"));
}

#[test]
fn test_report_summarizes_without_originals() {
    let engine = AnonymizationEngine::from_config(&ReduxerConfig::default()).unwrap();
    assert!(!engine.is_auditing());

    let result = engine.anonymize(TEXT).unwrap();
    let report = AnonymizationReport::from_result(&result);

    assert_eq!(report.total_detections, result.total_detections());
    let json = report.format_json().unwrap();
    assert!(!json.contains("John Doe"));
    assert!(!json.contains("123-456-7890"));
}
