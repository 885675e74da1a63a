//! Numeric validation shared by the wire layers.

use crate::error::{CoreError, CoreResult};

/// Validates that a wire integer is a non-negative value that fits in `u32`.
///
/// ## Errors
/// Returns `CoreError::ValidationError` naming `field` if the value is negative
/// or too large.
pub fn validate_unsigned(field: &str, value: i64) -> CoreResult<u32> {
    if value < 0 {
        return Err(CoreError::ValidationError(format!(
            "{field} must be an unsigned integer, got {value}"
        )));
    }
    u32::try_from(value)
        .map_err(|e| CoreError::ValidationError(format!("{field} out of range ({value}): {e}")))
}

/// Validates that a wire integer is strictly positive and fits in `u32`.
///
/// ## Errors
/// Returns `CoreError::ValidationError` naming `field` if the value is zero,
/// negative or too large.
pub fn validate_positive(field: &str, value: i64) -> CoreResult<u32> {
    match validate_unsigned(field, value)? {
        0 => Err(CoreError::ValidationError(format!(
            "{field} must be a positive integer"
        ))),
        v => Ok(v),
    }
}
