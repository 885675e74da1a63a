//! JSCalendar parsing.
//!
//! - `values`: ISO 8601 durations and RFC 8984 date-time strings
//! - `json`: the JSON object reader

mod error;
mod json;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use json::{from_json, from_value};
pub(crate) use json::{non_negative_duration, percent_from_wire};
pub use values::{parse_duration, parse_local_datetime, parse_utc_datetime};
