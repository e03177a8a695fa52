//! Domain types shared across Reduxer.
//!
//! The domain layer provides:
//! - **Error types** ([`ReduxerError`], [`ExtractorError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, ReduxerError>`]:
//!
//! ```rust
//! use reduxer::domain::{ReduxerError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = reduxer::config::ReduxerConfig::default();
//!     config.validate().map_err(ReduxerError::Configuration)?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::{ExtractorError, ReduxerError};
pub use result::Result;
