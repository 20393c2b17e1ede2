//! Result type alias for sheetflow
//!
//! Convenience alias that uses SheetflowError as the error type.

use super::errors::SheetflowError;

/// Result type alias for sheetflow operations
///
/// # Examples
///
/// ```
/// use sheetflow::domain::result::Result;
/// use sheetflow::domain::errors::SheetflowError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SheetflowError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SheetflowError>;
