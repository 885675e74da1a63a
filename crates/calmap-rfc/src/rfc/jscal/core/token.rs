//! Lower-cased enumerated string values (RFC 8984 §1.4.7).
//!
//! JSCalendar enumerations are compared case-insensitively and written in
//! lowercase. Values outside the known set are still storable so that data
//! from newer producers survives a round trip; the typed views below return
//! `None` for them.

use std::fmt;

/// A string token normalized to lowercase at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    /// Creates a token, lower-casing the input.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token upper-cased, as iCalendar writes enumerations.
    #[must_use]
    pub fn to_ical(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recurrence frequency (RFC 8984 §4.3.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Minutely,
    Secondly,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
            Self::Daily => "daily",
            Self::Hourly => "hourly",
            Self::Minutely => "minutely",
            Self::Secondly => "secondly",
        }
    }

    /// Parses a frequency (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "yearly" => Self::Yearly,
            "monthly" => Self::Monthly,
            "weekly" => Self::Weekly,
            "daily" => Self::Daily,
            "hourly" => Self::Hourly,
            "minutely" => Self::Minutely,
            "secondly" => Self::Secondly,
            _ => return None,
        })
    }
}

/// Skip policy for invalid dates in non-Gregorian scales (RFC 8984 §4.3.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skip {
    Omit,
    Backward,
    Forward,
}

impl Skip {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Omit => "omit",
            Self::Backward => "backward",
            Self::Forward => "forward",
        }
    }

    /// Parses a skip policy (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "omit" => Self::Omit,
            "backward" => Self::Backward,
            "forward" => Self::Forward,
            _ => return None,
        })
    }
}

/// Two-letter day-of-week code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "mo",
            Self::Tuesday => "tu",
            Self::Wednesday => "we",
            Self::Thursday => "th",
            Self::Friday => "fr",
            Self::Saturday => "sa",
            Self::Sunday => "su",
        }
    }

    /// Parses a two-letter day code (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "mo" => Self::Monday,
            "tu" => Self::Tuesday,
            "we" => Self::Wednesday,
            "th" => Self::Thursday,
            "fr" => Self::Friday,
            "sa" => Self::Saturday,
            "su" => Self::Sunday,
            _ => return None,
        })
    }
}

/// Anchor of an offset trigger (RFC 8984 §4.5.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeTo {
    Start,
    End,
}

impl RelativeTo {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }

    /// Parses a trigger anchor (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "start" => Self::Start,
            "end" => Self::End,
            _ => return None,
        })
    }
}

macro_rules! token_from_enum {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Token {
                fn from(value: $ty) -> Self {
                    Self(value.as_str().to_string())
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

token_from_enum!(Frequency, Skip, Weekday, RelativeTo);
