//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console logs on stderr
//! - Configurable log levels
//! - Local JSON file logging with rotation
//!
//! Log events carry counts, placeholders and kinds. Original values are
//! never logged.
//!
//! # Example
//!
//! ```no_run
//! use reduxer::logging::init_logging;
//! use reduxer::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the completion of an anonymization run
///
/// # Example
///
/// ```no_run
/// use reduxer::log_anonymization_complete;
///
/// let run_id = uuid::Uuid::new_v4();
/// log_anonymization_complete!(run_id, 12, 3);
/// ```
#[macro_export]
macro_rules! log_anonymization_complete {
    ($run_id:expr, $count:expr, $duration_ms:expr) => {
        tracing::info!(
            run_id = %$run_id,
            detections = $count,
            duration_ms = $duration_ms,
            "Anonymization completed"
        );
    };
}

/// Log a failed round-trip verification
///
/// # Example
///
/// ```no_run
/// use reduxer::log_round_trip_mismatch;
///
/// let run_id = uuid::Uuid::new_v4();
/// log_round_trip_mismatch!(run_id, 17, 120, 122);
/// ```
#[macro_export]
macro_rules! log_round_trip_mismatch {
    ($run_id:expr, $first_divergence:expr, $original_len:expr, $restored_len:expr) => {
        tracing::warn!(
            run_id = %$run_id,
            first_divergence = $first_divergence,
            original_len = $original_len,
            restored_len = $restored_len,
            "Restored text does not match the original"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use reduxer::log_error_with_context;
/// use reduxer::domain::ReduxerError;
///
/// let error = ReduxerError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
