//! JSCalendar parse error types.

use std::fmt;

/// Result type for JSCalendar value parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a JSCalendar value or object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The offending input, or the property path for object-level errors.
    pub input: String,
    /// Additional context.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a missing property error.
    #[must_use]
    pub fn missing_property(object: &str, name: &str) -> Self {
        Self::new(ParseErrorKind::MissingProperty, name)
            .with_context(format!("required on {object}"))
    }

    /// Creates an unexpected type error.
    #[must_use]
    pub fn unexpected_type(found: &str) -> Self {
        Self::new(ParseErrorKind::UnexpectedType, found)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.input)?;
        if let Some(context) = &self.context {
            write!(f, ": {context}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Text does not follow the ISO 8601 duration grammar.
    InvalidDuration,
    /// Text is not a `YYYY-MM-DDTHH:MM:SS` local date-time.
    InvalidLocalDateTime,
    /// Text is not a `YYYY-MM-DDTHH:MM:SSZ` UTC date-time.
    InvalidUtcDateTime,
    /// An `@type` value that the reader does not handle.
    UnexpectedType,
    /// A required property is absent.
    MissingProperty,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration => write!(f, "invalid duration"),
            Self::InvalidLocalDateTime => write!(f, "invalid local date-time"),
            Self::InvalidUtcDateTime => write!(f, "invalid UTC date-time"),
            Self::UnexpectedType => write!(f, "unexpected @type"),
            Self::MissingProperty => write!(f, "missing property"),
        }
    }
}
