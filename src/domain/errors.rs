//! Domain error types
//!
//! This module defines the error hierarchy for Reduxer. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Reduxer error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum ReduxerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A PII pattern failed to compile or is otherwise malformed
    #[error("Invalid pattern '{name}': {message}")]
    Pattern { name: String, message: String },

    /// Entity extractor errors
    #[error("Entity extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Audit logging errors
    #[error("Audit error: {0}")]
    Audit(String),
}

/// Entity extractor errors
///
/// An extractor that cannot run at all is reported separately from one that
/// ran and failed on a particular text.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The extractor backend is not loaded or cannot be reached
    #[error("Extractor '{extractor}' is unavailable: {reason}")]
    Unavailable { extractor: String, reason: String },

    /// The extractor ran but failed to process the text
    #[error("Extractor '{extractor}' failed: {reason}")]
    ExtractionFailed { extractor: String, reason: String },
}

impl ExtractorError {
    /// Build an [`ExtractorError::Unavailable`]
    pub fn unavailable(extractor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            extractor: extractor.into(),
            reason: reason.into(),
        }
    }

    /// Build an [`ExtractorError::ExtractionFailed`]
    pub fn failed(extractor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            extractor: extractor.into(),
            reason: reason.into(),
        }
    }

    /// Name of the extractor that raised the error
    pub fn extractor(&self) -> &str {
        match self {
            Self::Unavailable { extractor, .. } | Self::ExtractionFailed { extractor, .. } => {
                extractor
            }
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ReduxerError {
    fn from(err: std::io::Error) -> Self {
        ReduxerError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ReduxerError {
    fn from(err: serde_json::Error) -> Self {
        ReduxerError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ReduxerError {
    fn from(err: toml::de::Error) -> Self {
        ReduxerError::Configuration(format!("TOML parse error: {err}"))
    }
}
