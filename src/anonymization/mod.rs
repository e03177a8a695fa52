//! Reversible anonymization
//!
//! Replaces structured PII (phone numbers, emails, SSNs, websites) and named
//! entities in free text with placeholders, and keeps a lookup table that
//! restores the original.
//!
//! # Architecture
//!
//! - **Patterns**: ordered, compiled regex set ([`PiiConfig`])
//! - **Engine**: regex pass, then entity/proper-noun pass ([`AnonymizationEngine`])
//! - **Lookup**: insertion-ordered placeholder table ([`LookupTable`])
//! - **Deanonymize**: reverse substitution and round-trip checks
//! - **Audit**: append-only log with hashed originals
//!
//! # Usage
//!
//! ```rust,ignore
//! use reduxer::anonymization::{deanonymize, AnonymizationEngine};
//! use reduxer::config::ReduxerConfig;
//!
//! let engine = AnonymizationEngine::from_config(&ReduxerConfig::default())?;
//! let result = engine.anonymize(text)?;
//! let restored = deanonymize(&result.lookup_table, &result.text);
//! ```

pub mod audit;
pub mod candidates;
pub mod deanonymize;
pub mod engine;
pub mod labels;
pub mod lookup;
pub mod models;
pub mod patterns;
pub mod placeholder;
pub mod report;

pub use deanonymize::{deanonymize, verify_round_trip, RoundTrip};
pub use engine::{anonymize, AnonymizationEngine};
pub use labels::{EntityLabel, EntityPolicy};
pub use lookup::{LookupTable, PlaceholderCollision};
pub use models::{AnonymizedText, Detection, DetectionMethod};
pub use patterns::{PatternDefinition, PiiConfig};
pub use report::AnonymizationReport;
