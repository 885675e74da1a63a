//! Calendar durations (RFC 8984 §1.4.6, §1.4.7).

use std::fmt;
use std::str::FromStr;

use crate::rfc::jscal::parse::{ParseError, parse_duration};

/// A calendar-unit span of time.
///
/// Components are unsigned magnitudes; `negative` inverts the whole span. A
/// month is a calendar month rather than a fixed number of seconds, so a
/// `Duration` only gains a length once applied to a date-time (see
/// [`apply_duration`](super::apply_duration)).
///
/// `weeks` is kept as parsed so that `P2W` formats back as `P2W`. Arithmetic
/// folds it into days via [`Duration::calendar_days`].
///
/// Sub-second precision is accepted by the parser into `microseconds` but is
/// never formatted and never applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    /// Whether this duration counts backwards.
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub microseconds: u32,
}

impl Duration {
    /// Creates a new zero duration.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            negative: false,
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            microseconds: 0,
        }
    }

    /// Creates a duration from days.
    #[must_use]
    pub const fn days(days: u32) -> Self {
        Self {
            days,
            ..Self::zero()
        }
    }

    /// Creates a duration from hours.
    #[must_use]
    pub const fn hours(hours: u32) -> Self {
        Self {
            hours,
            ..Self::zero()
        }
    }

    /// Creates a duration from minutes.
    #[must_use]
    pub const fn minutes(minutes: u32) -> Self {
        Self {
            minutes,
            ..Self::zero()
        }
    }

    /// Creates a new duration builder.
    #[must_use]
    pub const fn builder() -> DurationBuilder {
        DurationBuilder::new()
    }

    /// Negates this duration.
    #[must_use]
    pub const fn negate(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    /// Returns whether every whole component is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
    }

    /// Returns the day count applied by calendar arithmetic (weeks folded into days).
    #[must_use]
    pub const fn calendar_days(&self) -> u64 {
        self.weeks as u64 * 7 + self.days as u64
    }

    /// Returns this duration with the sub-second component dropped.
    #[must_use]
    pub const fn truncate_subsec(mut self) -> Self {
        self.microseconds = 0;
        self
    }

    /// Formats this duration in canonical ISO 8601 form.
    ///
    /// Zero components are omitted and the time designator is only written
    /// when a time component is non-zero. An all-zero duration is `P0D`.
    /// With `signed`, an inverted duration is prefixed with `-`; unsigned
    /// output never carries a sign.
    #[must_use]
    pub fn format(&self, signed: bool) -> String {
        let mut out = String::with_capacity(16);
        if signed && self.negative && !self.is_zero() {
            out.push('-');
        }
        out.push('P');

        if self.is_zero() {
            out.push_str("0D");
            return out;
        }

        for (value, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value > 0 {
                out.push_str(&value.to_string());
                out.push(designator);
            }
        }

        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 {
            out.push('T');
            for (value, designator) in [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')] {
                if value > 0 {
                    out.push_str(&value.to_string());
                    out.push(designator);
                }
            }
        }

        out
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}

/// Builder for constructing `Duration` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationBuilder {
    inner: Duration,
}

impl DurationBuilder {
    /// Creates a new duration builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Duration::zero(),
        }
    }

    /// Sets the duration as negative.
    #[must_use]
    pub const fn negative(mut self) -> Self {
        self.inner.negative = true;
        self
    }

    #[must_use]
    pub const fn years(mut self, years: u32) -> Self {
        self.inner.years = years;
        self
    }

    #[must_use]
    pub const fn months(mut self, months: u32) -> Self {
        self.inner.months = months;
        self
    }

    #[must_use]
    pub const fn weeks(mut self, weeks: u32) -> Self {
        self.inner.weeks = weeks;
        self
    }

    #[must_use]
    pub const fn days(mut self, days: u32) -> Self {
        self.inner.days = days;
        self
    }

    #[must_use]
    pub const fn hours(mut self, hours: u32) -> Self {
        self.inner.hours = hours;
        self
    }

    #[must_use]
    pub const fn minutes(mut self, minutes: u32) -> Self {
        self.inner.minutes = minutes;
        self
    }

    #[must_use]
    pub const fn seconds(mut self, seconds: u32) -> Self {
        self.inner.seconds = seconds;
        self
    }

    /// Builds the duration.
    #[must_use]
    pub const fn build(self) -> Duration {
        self.inner
    }
}
