//! `Task` object (RFC 8984 §5.2).

use chrono::NaiveDateTime;

use calmap_core::util::uid::generate_uid;

use super::{Alert, Anchored, ArithmeticError, Duration, RecurrenceRule, Token, apply_duration};

/// An action item, assignment or to-do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    pub uid: String,
    pub title: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub due: Option<NaiveDateTime>,
    pub time_zone: Option<String>,
    pub estimated_duration: Option<Duration>,
    /// 0 to 100.
    pub percent_complete: Option<u8>,
    pub progress: Option<Token>,
    pub recurrence_rules: Vec<RecurrenceRule>,
    pub alerts: Vec<Alert>,
}

impl Task {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }

    /// Creates a task with a freshly generated UID.
    #[must_use]
    pub fn with_generated_uid() -> Self {
        Self::new(generate_uid())
    }

    /// Returns `due - estimatedDuration`, or `None` unless both are set.
    ///
    /// ## Errors
    /// Returns an error if the arithmetic overflows.
    pub fn estimated_start(&self) -> Result<Option<NaiveDateTime>, ArithmeticError> {
        match (self.due, self.estimated_duration.as_ref()) {
            (Some(due), Some(duration)) => apply_duration(due, duration, true).map(Some),
            _ => Ok(None),
        }
    }

    /// Returns `start + estimatedDuration`, or `None` unless both are set.
    /// `due` plays no part.
    ///
    /// ## Errors
    /// Returns an error if the arithmetic overflows.
    pub fn estimated_end(&self) -> Result<Option<NaiveDateTime>, ArithmeticError> {
        match (self.start, self.estimated_duration.as_ref()) {
            (Some(start), Some(duration)) => apply_duration(start, duration, false).map(Some),
            _ => Ok(None),
        }
    }
}

impl Anchored for Task {
    fn anchor_start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    /// A task ends when it is due.
    fn anchor_end(&self) -> Result<Option<NaiveDateTime>, ArithmeticError> {
        Ok(self.due)
    }
}
