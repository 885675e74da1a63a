//! iCalendar (RFC 5545) implementation.
//!
//! - `core`: components, properties and parameters as raw content lines
//! - `parse`: unfolding, content-line lexing and component nesting
//! - `build`: escaping, folding and serialization
//! - `map`: conversion between iCalendar components and the JSCalendar model

pub mod build;
pub mod core;
pub mod map;
pub mod parse;

pub use map::{IcalOptions, from_ical, from_ical_str, to_ical, to_ical_string};
