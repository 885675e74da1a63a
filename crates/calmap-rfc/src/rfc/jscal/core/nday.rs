//! `NDay` by-day selector (RFC 8984 §4.3.3).

use super::{Token, Weekday};

/// A day of the week, optionally restricted to its n-th occurrence within
/// the rule's period (`2` for the second Tuesday, `-1` for the last Friday).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NDay {
    day: Token,
    nth_of_period: Option<i32>,
}

impl NDay {
    /// Creates a selector for every occurrence of `day`.
    #[must_use]
    pub fn new(day: impl AsRef<str>) -> Self {
        Self {
            day: Token::new(day),
            nth_of_period: None,
        }
    }

    /// Creates a selector for the `nth` occurrence of `day` (zero selects every occurrence).
    #[must_use]
    pub fn nth(day: impl AsRef<str>, nth: i32) -> Self {
        let mut nday = Self::new(day);
        nday.set_nth_of_period(nth);
        nday
    }

    #[must_use]
    pub fn day(&self) -> &Token {
        &self.day
    }

    /// Returns the typed day, or `None` if the stored code is not a known weekday.
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::parse(self.day.as_str())
    }

    pub fn set_day(&mut self, day: impl AsRef<str>) {
        self.day = Token::new(day);
    }

    #[must_use]
    pub fn nth_of_period(&self) -> Option<i32> {
        self.nth_of_period
    }

    /// Sets the ordinal. Zero is not a valid ordinal and is ignored, leaving
    /// the previous value (or unset) in place.
    pub fn set_nth_of_period(&mut self, nth: i32) {
        if nth != 0 {
            self.nth_of_period = Some(nth);
        }
    }

    #[must_use]
    pub fn is_nth_of_period_set(&self) -> bool {
        self.nth_of_period.is_some()
    }

    pub fn clear_nth_of_period(&mut self) {
        self.nth_of_period = None;
    }
}
