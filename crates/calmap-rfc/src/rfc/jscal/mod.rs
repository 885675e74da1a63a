//! JSCalendar (RFC 8984) implementation.
//!
//! - `core`: the object model, durations, calendar arithmetic and recurrence rules
//! - `parse`: duration/date-time value parsers and the JSON reader
//! - `build`: the JSON writer

pub mod build;
pub mod core;
mod dto;
pub mod parse;

pub use build::{WriteOptions, to_json, to_value};
pub use parse::{from_json, from_value};
