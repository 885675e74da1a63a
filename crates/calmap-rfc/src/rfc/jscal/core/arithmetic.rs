//! Calendar-unit arithmetic on local date-times.
//!
//! A duration is applied component by component: years, months, days,
//! hours, minutes, seconds. Years and months move the calendar date, so
//! `2020-01-31 + P1M` lands on the last day of February rather than 30 days
//! later. Day-of-month overflow is clamped to the last valid day, which is
//! chrono's `checked_add_months` behavior; this module adds no rounding of
//! its own. Weeks reach this module already folded into days.

use chrono::{Days, Months, NaiveDateTime, TimeDelta, Timelike};
use thiserror::Error;

use super::Duration;

/// Failure applying a duration to a date-time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("date-time out of range applying {0} component")]
    OutOfRange(&'static str),
}

/// Drops fractional seconds from a date-time.
#[must_use]
pub fn truncate_subsec(instant: NaiveDateTime) -> NaiveDateTime {
    instant.with_nanosecond(0).unwrap_or(instant)
}

/// Applies `duration` to `instant`.
///
/// Components are subtracted when exactly one of `duration.negative` and
/// `invert` is set, so `invert` counts an inverted duration forward again.
/// Zero components are skipped. Fractional seconds of `instant` are dropped
/// before the first step and the duration's own sub-second part is ignored.
///
/// ## Errors
/// Returns `ArithmeticError::OutOfRange` if any step leaves chrono's
/// representable range.
pub fn apply_duration(
    instant: NaiveDateTime,
    duration: &Duration,
    invert: bool,
) -> Result<NaiveDateTime, ArithmeticError> {
    let subtract = duration.negative != invert;
    let mut result = truncate_subsec(instant);

    if duration.years > 0 {
        let months = duration
            .years
            .checked_mul(12)
            .ok_or(ArithmeticError::OutOfRange("years"))?;
        result = shift_months(result, months, subtract).ok_or(ArithmeticError::OutOfRange("years"))?;
    }
    if duration.months > 0 {
        result = shift_months(result, duration.months, subtract)
            .ok_or(ArithmeticError::OutOfRange("months"))?;
    }

    let days = duration.calendar_days();
    if days > 0 {
        let days = Days::new(days);
        let shifted = if subtract {
            result.checked_sub_days(days)
        } else {
            result.checked_add_days(days)
        };
        result = shifted.ok_or(ArithmeticError::OutOfRange("days"))?;
    }

    let time_steps = [
        (duration.hours, TimeDelta::try_hours(i64::from(duration.hours)), "hours"),
        (duration.minutes, TimeDelta::try_minutes(i64::from(duration.minutes)), "minutes"),
        (duration.seconds, TimeDelta::try_seconds(i64::from(duration.seconds)), "seconds"),
    ];
    for (value, delta, component) in time_steps {
        if value == 0 {
            continue;
        }
        let delta = delta.ok_or(ArithmeticError::OutOfRange(component))?;
        let shifted = if subtract {
            result.checked_sub_signed(delta)
        } else {
            result.checked_add_signed(delta)
        };
        result = shifted.ok_or(ArithmeticError::OutOfRange(component))?;
    }

    Ok(result)
}

fn shift_months(instant: NaiveDateTime, months: u32, subtract: bool) -> Option<NaiveDateTime> {
    if subtract {
        instant.checked_sub_months(Months::new(months))
    } else {
        instant.checked_add_months(Months::new(months))
    }
}

#[cfg(test)]
#[path = "arithmetic_tests.rs"]
mod tests;
