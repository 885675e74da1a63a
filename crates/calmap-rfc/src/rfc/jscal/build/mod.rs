//! JSCalendar serialization.

mod json;

pub use json::{WriteOptions, to_json, to_value};
