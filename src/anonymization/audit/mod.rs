//! Audit logging module
//!
//! Records each anonymization run with hashed originals.

pub mod logger;

pub use logger::{hash_value, AuditLogger};
