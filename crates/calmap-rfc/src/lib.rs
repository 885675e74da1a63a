//! JSCalendar (RFC 8984) and iCalendar (RFC 5545) data-model mapping.
//!
//! - `rfc::jscal`: the in-memory object model, duration and recurrence
//!   semantics, and the JSON wire format
//! - `rfc::ical`: iCalendar content lines and the adapter onto the model

pub mod error;
pub mod rfc;
