// Reduxer - Reversible PII and Proper-Noun Anonymizer
// Copyright (c) 2025 Reduxer Contributors
// Licensed under the MIT License

//! # Reduxer - Reversible Text Anonymization
//!
//! Reduxer replaces personally identifiable information and proper nouns in
//! free text with placeholders, and returns a lookup table that restores the
//! original text.
//!
//! ## Overview
//!
//! Anonymization runs in two passes:
//! - **Structured PII**: ordered regex patterns (phone, email, SSN, website)
//!   replace matches with `[PHONE]1`, `[EMAIL]1`, ...
//! - **Entities**: an [`nlp::EntityExtractor`] reports named entities and
//!   proper nouns, which are replaced longest first with `[PERSON1]`,
//!   `[ORG1]`, ...
//!
//! Deanonymization substitutes every placeholder back in lookup-table order.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Patterns, engine, lookup table, deanonymization, audit
//! - [`nlp`] - Entity extractor trait and built-in extractors
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use reduxer::anonymization::{anonymize, deanonymize, PiiConfig};
//! use reduxer::nlp::HeuristicExtractor;
//!
//! # fn main() -> reduxer::domain::Result<()> {
//! let pii_config = PiiConfig::default_patterns()?;
//! let extractor = HeuristicExtractor::new();
//!
//! let text = "Call 123-456-7890 or email a@b.com";
//! let (anonymized, lookup) = anonymize(text, &pii_config, &extractor)?;
//! assert_eq!(anonymized, "Call [PHONE]1 or email [EMAIL]1");
//!
//! assert_eq!(deanonymize(&lookup, &anonymized), text);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`], whose error type is
//! [`domain::ReduxerError`]. Extractor failures are split into
//! [`domain::ExtractorError::Unavailable`] and
//! [`domain::ExtractorError::ExtractionFailed`].
//!
//! ## Logging
//!
//! Reduxer uses structured logging with the `tracing` crate. Events carry
//! counts, placeholders and kinds, never original values.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod nlp;
