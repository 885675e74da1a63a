//! Model validation errors.

use thiserror::Error;

/// Errors raised by model setters that validate their input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid byMonth value {0:?}: expected a month number with an optional \"L\" suffix")]
    InvalidMonth(String),

    #[error("{0} must be a positive integer")]
    ZeroValue(&'static str),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("{0} must not be negative")]
    NegativeDuration(&'static str),

    #[error("missing required property: {0}")]
    MissingProperty(&'static str),
}
