use thiserror::Error;

use crate::rfc::ical;
use crate::rfc::jscal::core::{ArithmeticError, ModelError};
use crate::rfc::jscal::parse::ParseError;

/// RFC parsing, mapping and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("iCalendar parse error: {0}")]
    ICalParseError(#[from] ical::parse::ParseError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ModelError),

    #[error("Arithmetic error: {0}")]
    ArithmeticError(#[from] ArithmeticError),

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Mapping error: {0}")]
    MappingError(String),

    #[error(transparent)]
    CoreError(#[from] calmap_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
