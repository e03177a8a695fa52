//! Result type alias for Reduxer

use super::errors::ReduxerError;

/// Result type alias for Reduxer operations
///
/// # Examples
///
/// ```
/// use reduxer::domain::result::Result;
/// use reduxer::domain::errors::ReduxerError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ReduxerError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ReduxerError>;
