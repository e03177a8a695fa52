//! Audit logger for anonymization runs

use crate::anonymization::models::{AnonymizedText, Detection};
use crate::domain::{ReduxerError, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    run_id: String,
    timestamp: String,
    detections_count: usize,
    applied_count: usize,
    processing_time_ms: u64,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed original)
#[derive(Debug, Serialize)]
struct AuditDetection {
    placeholder: String,
    kind: String,
    method: &'static str,
    applied: bool,
    /// SHA-256 hash of original value (never log plaintext)
    value_hash: String,
}

/// Append-only audit log, one line per anonymization run
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the parent directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ReduxerError::Audit(format!(
                    "Failed to create audit log directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Append an entry for one anonymization result
    pub fn log_anonymization(&self, result: &AnonymizedText) -> Result<()> {
        let entry = AuditLogEntry {
            run_id: result.run_id.to_string(),
            timestamp: result.timestamp.to_rfc3339(),
            detections_count: result.total_detections(),
            applied_count: result.applied_detections().count(),
            processing_time_ms: result.processing_time_ms,
            detections: result.detections.iter().map(audit_detection).collect(),
        };

        self.write_entry(&entry)
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                ReduxerError::Audit(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;

        let line = if self.json_format {
            serde_json::to_string(entry)
                .map_err(|e| ReduxerError::Audit(format!("Failed to serialize audit entry: {e}")))?
        } else {
            format!(
                "[{}] Run: {} | Detections: {} | Applied: {} | Time: {}ms",
                entry.timestamp,
                entry.run_id,
                entry.detections_count,
                entry.applied_count,
                entry.processing_time_ms
            )
        };

        writeln!(file, "{line}")
            .map_err(|e| ReduxerError::Audit(format!("Failed to write audit entry: {e}")))
    }
}

fn audit_detection(detection: &Detection) -> AuditDetection {
    AuditDetection {
        placeholder: detection.placeholder.clone(),
        kind: detection.kind.clone(),
        method: detection.method.as_str(),
        applied: detection.applied,
        value_hash: hash_value(&detection.original_value),
    }
}

/// Hash an original value using SHA-256
pub fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::lookup::LookupTable;
    use crate::anonymization::models::DetectionMethod;
    use tempfile::tempdir;

    fn result_with_email() -> AnonymizedText {
        let mut lookup = LookupTable::new();
        lookup.insert("[EMAIL]1", "test@example.com");
        AnonymizedText::new(
            "mail [EMAIL]1".to_string(),
            lookup,
            vec![Detection::new(
                "[EMAIL]1",
                "text_address",
                "test@example.com",
                DetectionMethod::Regex,
                true,
            )],
            5,
        )
    }

    #[test]
    fn test_hash_value() {
        assert_eq!(hash_value("test@example.com"), hash_value("test@example.com"));
        assert_ne!(hash_value("test@example.com"), hash_value("other@example.com"));
        assert_eq!(hash_value("").len(), 64);
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true).unwrap();

        logger.log_anonymization(&result_with_email()).unwrap();
        assert!(log_path.exists());
    }

    #[test]
    fn test_json_entry_has_no_plaintext() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true).unwrap();
        let result = result_with_email();

        logger.log_anonymization(&result).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let entry: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(entry["run_id"], result.run_id.to_string());
        assert_eq!(entry["detections"][0]["placeholder"], "[EMAIL]1");
        assert_eq!(entry["detections"][0]["method"], "regex");
        assert_eq!(
            entry["detections"][0]["value_hash"],
            hash_value("test@example.com")
        );
        assert!(!content.contains("test@example.com"));
    }

    #[test]
    fn test_plain_entries_append() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), false).unwrap();

        logger.log_anonymization(&result_with_email()).unwrap();
        logger.log_anonymization(&result_with_email()).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("Detections: 1"));
        assert!(!content.contains("test@example.com"));
    }
}
