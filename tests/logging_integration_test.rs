//! Integration tests for logging functionality

use reduxer::config::LoggingConfig;
use reduxer::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

// A global subscriber can only be installed once per process, so every
// init_logging call lives in this one test.
#[test]
fn test_init_logging_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "hourly".to_string(),
    };

    assert!(init_logging("verbose", &config).is_err());

    let bad_rotation = LoggingConfig {
        local_rotation: "weekly".to_string(),
        ..config.clone()
    };
    assert!(init_logging("info", &bad_rotation).is_err());
    assert!(!log_path.exists());

    let guard = init_logging("debug", &config).unwrap();
    assert!(log_path.exists());
    tracing::info!(placeholders = 3, "logging integration test event");

    let err = init_logging("debug", &config).err().unwrap();
    assert!(err.to_string().contains("Failed to initialize logging"));

    drop(guard);
}
