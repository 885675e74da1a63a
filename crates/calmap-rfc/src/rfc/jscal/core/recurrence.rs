//! `RecurrenceRule` (RFC 8984 §4.3.3).
//!
//! The rule stores its parameters only; expanding occurrences is left to
//! consumers. Every write goes through a setter that normalizes the input:
//! enumerations are lower-cased, list fields are filled one entry at a time
//! through their `add_*` method, and `byMonth` entries are checked for the
//! month-number-plus-optional-`L` form.

use calmap_core::constants::{
    DEFAULT_FIRST_DAY_OF_WEEK, DEFAULT_INTERVAL, DEFAULT_RSCALE, DEFAULT_SKIP,
};
use chrono::{DateTime, NaiveDateTime, Utc};

use super::arithmetic::truncate_subsec;
use super::{DefaultPolicy, Frequency, ModelError, NDay, Skip, Token, Weekday};

/// A recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecurrenceRule {
    frequency: Option<Token>,
    interval: Option<u32>,
    rscale: Option<Token>,
    skip: Option<Token>,
    first_day_of_week: Option<Token>,
    by_day: Vec<NDay>,
    by_month: Vec<String>,
    by_month_day: Vec<i32>,
    by_year_day: Vec<i32>,
    by_week_no: Vec<i32>,
    by_hour: Vec<i32>,
    by_minute: Vec<i32>,
    by_second: Vec<i32>,
    by_set_position: Vec<i32>,
    count: Option<u32>,
    until: Option<DateTime<Utc>>,
}

macro_rules! int_list_accessors {
    ($($field:ident, $add:ident, $set:ident, $is_set:ident;)*) => {
        $(
            #[must_use]
            pub fn $field(&self) -> &[i32] {
                &self.$field
            }

            pub fn $add(&mut self, value: i32) {
                self.$field.push(value);
            }

            /// Replaces the list, adding each value in order.
            pub fn $set(&mut self, values: impl IntoIterator<Item = i32>) {
                self.$field.clear();
                for value in values {
                    self.$add(value);
                }
            }

            #[must_use]
            pub fn $is_set(&self) -> bool {
                !self.$field.is_empty()
            }
        )*
    };
}

impl RecurrenceRule {
    /// Creates an empty rule with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rule with the given frequency.
    #[must_use]
    pub fn with_frequency(frequency: Frequency) -> Self {
        let mut rule = Self::new();
        rule.set_frequency(frequency.as_str());
        rule
    }

    // frequency

    #[must_use]
    pub fn frequency(&self) -> Option<&Token> {
        self.frequency.as_ref()
    }

    /// Returns the typed frequency, or `None` if unset or not a known value.
    #[must_use]
    pub fn frequency_kind(&self) -> Option<Frequency> {
        self.frequency.as_ref().and_then(|f| Frequency::parse(f.as_str()))
    }

    pub fn set_frequency(&mut self, frequency: impl AsRef<str>) {
        self.frequency = Some(Token::new(frequency));
    }

    #[must_use]
    pub fn is_frequency_set(&self) -> bool {
        self.frequency.is_some()
    }

    // interval

    #[must_use]
    pub fn interval(&self) -> Option<u32> {
        self.interval
    }

    #[must_use]
    pub fn interval_with(&self, policy: DefaultPolicy) -> Option<u32> {
        policy.apply(self.interval, || DEFAULT_INTERVAL)
    }

    #[must_use]
    pub fn interval_or_default(&self) -> u32 {
        self.interval.unwrap_or(DEFAULT_INTERVAL)
    }

    /// ## Errors
    /// Returns `ModelError::ZeroValue` for an interval of zero.
    pub fn set_interval(&mut self, interval: u32) -> Result<(), ModelError> {
        if interval == 0 {
            return Err(ModelError::ZeroValue("interval"));
        }
        self.interval = Some(interval);
        Ok(())
    }

    #[must_use]
    pub fn is_interval_set(&self) -> bool {
        self.interval.is_some()
    }

    // rscale

    #[must_use]
    pub fn rscale(&self) -> Option<&Token> {
        self.rscale.as_ref()
    }

    #[must_use]
    pub fn rscale_with(&self, policy: DefaultPolicy) -> Option<&str> {
        policy.apply(self.rscale.as_ref().map(Token::as_str), || DEFAULT_RSCALE)
    }

    pub fn set_rscale(&mut self, rscale: impl AsRef<str>) {
        self.rscale = Some(Token::new(rscale));
    }

    #[must_use]
    pub fn is_rscale_set(&self) -> bool {
        self.rscale.is_some()
    }

    // skip

    #[must_use]
    pub fn skip(&self) -> Option<&Token> {
        self.skip.as_ref()
    }

    #[must_use]
    pub fn skip_with(&self, policy: DefaultPolicy) -> Option<&str> {
        policy.apply(self.skip.as_ref().map(Token::as_str), || DEFAULT_SKIP)
    }

    #[must_use]
    pub fn skip_kind(&self) -> Option<Skip> {
        self.skip.as_ref().and_then(|s| Skip::parse(s.as_str()))
    }

    pub fn set_skip(&mut self, skip: impl AsRef<str>) {
        self.skip = Some(Token::new(skip));
    }

    #[must_use]
    pub fn is_skip_set(&self) -> bool {
        self.skip.is_some()
    }

    // firstDayOfWeek

    #[must_use]
    pub fn first_day_of_week(&self) -> Option<&Token> {
        self.first_day_of_week.as_ref()
    }

    #[must_use]
    pub fn first_day_of_week_with(&self, policy: DefaultPolicy) -> Option<&str> {
        policy.apply(
            self.first_day_of_week.as_ref().map(Token::as_str),
            || DEFAULT_FIRST_DAY_OF_WEEK,
        )
    }

    #[must_use]
    pub fn first_weekday(&self) -> Option<Weekday> {
        self.first_day_of_week
            .as_ref()
            .and_then(|d| Weekday::parse(d.as_str()))
    }

    pub fn set_first_day_of_week(&mut self, day: impl AsRef<str>) {
        self.first_day_of_week = Some(Token::new(day));
    }

    #[must_use]
    pub fn is_first_day_of_week_set(&self) -> bool {
        self.first_day_of_week.is_some()
    }

    // byDay

    #[must_use]
    pub fn by_day(&self) -> &[NDay] {
        &self.by_day
    }

    pub fn add_by_day(&mut self, nday: NDay) {
        self.by_day.push(nday);
    }

    /// Replaces the list, adding each entry in order.
    pub fn set_by_day(&mut self, ndays: impl IntoIterator<Item = NDay>) {
        self.by_day.clear();
        for nday in ndays {
            self.add_by_day(nday);
        }
    }

    #[must_use]
    pub fn is_by_day_set(&self) -> bool {
        !self.by_day.is_empty()
    }

    // byMonth

    #[must_use]
    pub fn by_month(&self) -> &[String] {
        &self.by_month
    }

    /// Adds a month given as text: a month number with an optional leap-month
    /// `L` suffix (`"3"`, `"3L"`). A lower-case `l` is upper-cased.
    ///
    /// ## Errors
    /// Returns `ModelError::InvalidMonth` for any other form.
    pub fn add_by_month(&mut self, month: impl AsRef<str>) -> Result<(), ModelError> {
        let month = month.as_ref().trim();
        let (digits, leap) = match month.strip_suffix(['L', 'l']) {
            Some(digits) => (digits, true),
            None => (month, false),
        };
        let valid = !digits.is_empty()
            && digits.len() <= 2
            && digits.bytes().all(|b| b.is_ascii_digit())
            && digits.bytes().any(|b| b != b'0');
        if !valid {
            return Err(ModelError::InvalidMonth(month.to_string()));
        }
        let normalized = if leap {
            format!("{digits}L")
        } else {
            digits.to_string()
        };
        self.by_month.push(normalized);
        Ok(())
    }

    /// Adds a month given as a number.
    ///
    /// ## Errors
    /// Returns `ModelError::InvalidMonth` for month zero or numbers above 99.
    pub fn add_by_month_number(&mut self, month: u8) -> Result<(), ModelError> {
        self.add_by_month(month.to_string())
    }

    /// Replaces the list, adding each entry in order.
    ///
    /// ## Errors
    /// Returns the first entry's `ModelError::InvalidMonth`; entries before it
    /// remain added.
    pub fn set_by_month<S: AsRef<str>>(
        &mut self,
        months: impl IntoIterator<Item = S>,
    ) -> Result<(), ModelError> {
        self.by_month.clear();
        for month in months {
            self.add_by_month(month)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_by_month_set(&self) -> bool {
        !self.by_month.is_empty()
    }

    int_list_accessors! {
        by_month_day, add_by_month_day, set_by_month_day, is_by_month_day_set;
        by_year_day, add_by_year_day, set_by_year_day, is_by_year_day_set;
        by_week_no, add_by_week_no, set_by_week_no, is_by_week_no_set;
        by_hour, add_by_hour, set_by_hour, is_by_hour_set;
        by_minute, add_by_minute, set_by_minute, is_by_minute_set;
        by_second, add_by_second, set_by_second, is_by_second_set;
        by_set_position, add_by_set_position, set_by_set_position, is_by_set_position_set;
    }

    // count / until. Both may be set; rejecting that combination is left to callers.

    #[must_use]
    pub fn count(&self) -> Option<u32> {
        self.count
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = Some(count);
    }

    #[must_use]
    pub fn is_count_set(&self) -> bool {
        self.count.is_some()
    }

    /// Returns the end of the recurrence as the wall-clock value it was set with.
    #[must_use]
    pub fn until(&self) -> Option<NaiveDateTime> {
        self.until.map(|u| u.naive_utc())
    }

    /// Returns the stored UTC-normalized form of `until`.
    #[must_use]
    pub fn until_utc(&self) -> Option<DateTime<Utc>> {
        self.until
    }

    /// Sets the end of the recurrence. Fractional seconds are dropped.
    pub fn set_until(&mut self, until: NaiveDateTime) {
        self.until = Some(truncate_subsec(until).and_utc());
    }

    #[must_use]
    pub fn is_until_set(&self) -> bool {
        self.until.is_some()
    }
}

#[cfg(test)]
#[path = "recurrence_tests.rs"]
mod tests;
