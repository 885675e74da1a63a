//! Mapping between iCalendar components and the JSCalendar model.
//!
//! | JSCalendar            | iCalendar                        |
//! |-----------------------|----------------------------------|
//! | `Group`               | `VCALENDAR` (`UID`, `NAME`)      |
//! | `Event`               | `VEVENT`                         |
//! | `Task`                | `VTODO`                          |
//! | `Alert`               | `VALARM`                         |
//! | `RecurrenceRule`      | `RRULE`                          |
//! | `start` + `timeZone`  | `DTSTART;TZID=...`               |
//! | `duration`            | `DURATION` (or `DTEND`)          |

mod alarm;
mod calendar;
mod datetime;
mod event;
mod rrule;
mod task;

pub use calendar::{IcalOptions, from_ical, from_ical_str, to_ical, to_ical_string};
pub use rrule::{rrule_to_rule, rule_to_rrule};
