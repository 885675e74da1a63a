//! iCalendar parse error types.

use std::fmt;

/// Result type for iCalendar parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during iCalendar parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based, before unfolding).
    pub line: usize,
    /// Column within the unfolded line (1-based).
    pub column: usize,
    /// Additional context.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: {}", self.line, self.column, self.kind)?;
        if let Some(context) = &self.context {
            write!(f, " ({context})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A property name contains a character outside `[A-Za-z0-9-]`.
    InvalidPropertyName,
    /// A content line starts with `;` or `:`.
    MissingPropertyName,
    /// A content line has no `:` before its value.
    MissingColon,
    /// A malformed parameter.
    InvalidParameter,
    /// A quoted parameter value is not closed.
    UnclosedQuote,
    /// Input does not start with `BEGIN:VCALENDAR`.
    MissingBegin,
    /// A component is not closed before the end of input.
    MissingEnd,
    /// `END` does not match the open component.
    MismatchedComponent,
    /// Content after the closing `END:VCALENDAR`.
    TrailingContent,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::MissingPropertyName => write!(f, "missing property name"),
            Self::MissingColon => write!(f, "missing ':'"),
            Self::InvalidParameter => write!(f, "invalid parameter"),
            Self::UnclosedQuote => write!(f, "unclosed quote"),
            Self::MissingBegin => write!(f, "missing BEGIN"),
            Self::MissingEnd => write!(f, "missing END"),
            Self::MismatchedComponent => write!(f, "mismatched component"),
            Self::TrailingContent => write!(f, "content after END:VCALENDAR"),
        }
    }
}
