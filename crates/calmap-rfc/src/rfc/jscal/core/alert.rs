//! Alerts and their triggers (RFC 8984 §4.5.2).

use calmap_core::constants::DEFAULT_RELATIVE_TO;
use chrono::{DateTime, NaiveDateTime, Utc};

use super::{ArithmeticError, DefaultPolicy, Duration, RelativeTo, Token, apply_duration};

const DEFAULT_ACTION: &str = "display";

/// An object that offset triggers can be anchored to.
pub trait Anchored {
    /// The instant a `start`-relative trigger counts from.
    fn anchor_start(&self) -> Option<NaiveDateTime>;

    /// The instant an `end`-relative trigger counts from.
    ///
    /// ## Errors
    /// Returns an error if deriving the end overflows.
    fn anchor_end(&self) -> Result<Option<NaiveDateTime>, ArithmeticError>;
}

/// A trigger relative to the start or end of the owning object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTrigger {
    /// Signed offset; negative offsets fire before the anchor.
    pub offset: Duration,
    pub relative_to: Option<Token>,
}

impl OffsetTrigger {
    #[must_use]
    pub fn new(offset: Duration) -> Self {
        Self {
            offset,
            relative_to: None,
        }
    }

    #[must_use]
    pub fn relative_to_with(&self, policy: DefaultPolicy) -> Option<&str> {
        policy.apply(self.relative_to.as_ref().map(Token::as_str), || DEFAULT_RELATIVE_TO)
    }

    /// Returns the typed anchor; an unset value means `start`.
    #[must_use]
    pub fn relative_to_kind(&self) -> Option<RelativeTo> {
        RelativeTo::parse(self.relative_to_with(DefaultPolicy::Substitute)?)
    }

    /// Computes when this trigger fires for `object`.
    ///
    /// Returns `Ok(None)` when the anchor is undefined or the stored
    /// `relativeTo` value is not recognized.
    ///
    /// ## Errors
    /// Returns an error if the arithmetic overflows.
    pub fn trigger_time(
        &self,
        object: &impl Anchored,
    ) -> Result<Option<NaiveDateTime>, ArithmeticError> {
        let anchor = match self.relative_to_kind() {
            Some(RelativeTo::Start) => object.anchor_start(),
            Some(RelativeTo::End) => object.anchor_end()?,
            None => None,
        };
        anchor
            .map(|a| apply_duration(a, &self.offset, false))
            .transpose()
    }
}

/// When an alert fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Offset(OffsetTrigger),
    Absolute(DateTime<Utc>),
}

/// A reminder attached to an event or task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Key of this alert in the owning object's `alerts` map.
    pub id: String,
    pub trigger: Trigger,
    pub action: Option<Token>,
}

impl Alert {
    #[must_use]
    pub fn new(id: impl Into<String>, trigger: Trigger) -> Self {
        Self {
            id: id.into(),
            trigger,
            action: None,
        }
    }

    #[must_use]
    pub fn action_with(&self, policy: DefaultPolicy) -> Option<&str> {
        policy.apply(self.action.as_ref().map(Token::as_str), || DEFAULT_ACTION)
    }
}
