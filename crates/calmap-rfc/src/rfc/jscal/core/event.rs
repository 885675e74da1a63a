//! `Event` object (RFC 8984 §5.1).

use chrono::NaiveDateTime;

use calmap_core::util::uid::generate_uid;

use super::{
    Alert, Anchored, ArithmeticError, DefaultPolicy, Duration, RecurrenceRule, apply_duration,
};

/// A scheduled amount of time on a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    pub uid: String,
    pub title: Option<String>,
    /// Wall-clock start, interpreted in `time_zone` (floating if unset).
    pub start: Option<NaiveDateTime>,
    pub time_zone: Option<String>,
    pub duration: Option<Duration>,
    pub show_without_time: Option<bool>,
    pub recurrence_rules: Vec<RecurrenceRule>,
    pub alerts: Vec<Alert>,
}

impl Event {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }

    /// Creates an event with a freshly generated UID.
    #[must_use]
    pub fn with_generated_uid() -> Self {
        Self::new(generate_uid())
    }

    #[must_use]
    pub fn duration_with(&self, policy: DefaultPolicy) -> Option<Duration> {
        policy.apply(self.duration, Duration::zero)
    }

    #[must_use]
    pub fn show_without_time_with(&self, policy: DefaultPolicy) -> Option<bool> {
        policy.apply(self.show_without_time, || false)
    }

    /// Returns `start + duration`, or `None` unless both are set.
    ///
    /// ## Errors
    /// Returns an error if the arithmetic overflows.
    pub fn estimated_end(&self) -> Result<Option<NaiveDateTime>, ArithmeticError> {
        match (self.start, self.duration.as_ref()) {
            (Some(start), Some(duration)) => apply_duration(start, duration, false).map(Some),
            _ => Ok(None),
        }
    }
}

impl Anchored for Event {
    fn anchor_start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    fn anchor_end(&self) -> Result<Option<NaiveDateTime>, ArithmeticError> {
        self.estimated_end()
    }
}
