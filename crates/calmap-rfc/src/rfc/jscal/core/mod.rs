//! JSCalendar core model (RFC 8984).
//!
//! Value objects are created by a parse or build step and mutated only
//! through their own setters. Each object exclusively owns its nested values.

mod alert;
mod arithmetic;
mod datetime;
mod defaults;
mod duration;
mod error;
mod event;
mod group;
mod nday;
mod recurrence;
mod task;
mod token;

pub use alert::{Alert, Anchored, OffsetTrigger, Trigger};
pub use arithmetic::{ArithmeticError, apply_duration, truncate_subsec};
pub use datetime::{format_local_datetime, format_utc_datetime};
pub use defaults::{DefaultPolicy, get_or_default};
pub use duration::{Duration, DurationBuilder};
pub use error::ModelError;
pub use event::Event;
pub use group::{CalendarObject, Group};
pub use nday::NDay;
pub use recurrence::RecurrenceRule;
pub use task::Task;
pub use token::{Frequency, RelativeTo, Skip, Token, Weekday};

#[cfg(test)]
#[path = "estimate_tests.rs"]
mod estimate_tests;
