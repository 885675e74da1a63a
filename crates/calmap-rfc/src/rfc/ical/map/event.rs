//! VEVENT components (RFC 5545 §3.6.1) for events.

use chrono::NaiveTime;

use super::alarm::{alert_to_valarm, valarms_to_alerts};
use super::calendar::{IcalOptions, add_identity, required_uid};
use super::datetime::{
    duration_between, format_duration, read_datetime, read_datetime_in,
    read_non_negative_duration, write_datetime,
};
use super::rrule::{rrule_to_rule, rule_to_rrule};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{Component, Property, names};
use crate::rfc::jscal::core::Event;

/// Writes an event as a VEVENT.
///
/// The duration goes to `DURATION`. A duration with years or months has no
/// RFC 5545 form, so the end is computed and written as `DTEND` instead.
/// A floating start at midnight with `showWithoutTime` set is written as a
/// DATE. DATE values carry no `TZID`, so any other `showWithoutTime` start
/// keeps its date-time form and the flag goes to `X-MICROSOFT-CDO-ALLDAYEVENT`.
///
/// ## Errors
/// Returns an error for unknown zones, rules without a frequency, or
/// durations that cannot be written.
pub(super) fn event_to_vevent(event: &Event, options: &IcalOptions) -> RfcResult<Component> {
    let mut vevent = Component::event();
    add_identity(&mut vevent, &event.uid, event.title.as_deref(), options);

    let time_zone = event.time_zone.as_deref();
    let show_without_time = event.show_without_time == Some(true);
    let date_only = show_without_time
        && time_zone.is_none()
        && event.start.is_some_and(|start| start.time() == NaiveTime::MIN);

    if let Some(start) = event.start {
        vevent.add_property(write_datetime(names::DTSTART, start, time_zone, date_only)?);
    }
    if show_without_time && !date_only {
        vevent.add_property(Property::new(names::ALL_DAY, "TRUE"));
    }

    if let Some(duration) = &event.duration {
        match format_duration(duration, false) {
            Some(value) => vevent.add_property(Property::new(names::DURATION, value)),
            None => {
                let end = event.estimated_end()?.ok_or_else(|| {
                    RfcError::MappingError(format!(
                        "event {}: duration {duration} needs a start to be written",
                        event.uid
                    ))
                })?;
                tracing::debug!(uid = %event.uid, "Writing calendar duration as DTEND");
                vevent.add_property(write_datetime(names::DTEND, end, time_zone, date_only)?);
            }
        }
    }

    for rule in &event.recurrence_rules {
        vevent.add_property(Property::new(names::RRULE, rule_to_rrule(rule, time_zone)?));
    }
    for alert in &event.alerts {
        vevent.add_child(alert_to_valarm(alert)?);
    }
    Ok(vevent)
}

/// Reads a VEVENT into an event.
///
/// `DURATION` wins over `DTEND`. A `DTEND` is converted into the start's
/// zone and stored as the fixed-unit distance from the start.
///
/// ## Errors
/// Returns an error for a missing `UID`, malformed values, a negative
/// duration, or an end before the start.
pub(super) fn vevent_to_event(vevent: &Component) -> RfcResult<Event> {
    let mut event = Event::new(required_uid(vevent)?);
    event.title = vevent.get_property(names::SUMMARY).map(Property::as_text);

    if let Some(dtstart) = vevent.get_property(names::DTSTART) {
        let start = read_datetime(dtstart)?;
        event.start = Some(start.local);
        event.time_zone = start.time_zone;
        if start.date_only {
            event.show_without_time = Some(true);
        }
    }
    let all_day = vevent
        .get_property(names::ALL_DAY)
        .is_some_and(|p| p.value.eq_ignore_ascii_case("TRUE"));
    if all_day {
        event.show_without_time = Some(true);
    }

    if let Some(duration) = vevent.get_property(names::DURATION) {
        event.duration = Some(read_non_negative_duration(&duration.value, "duration")?);
    } else if let Some(dtend) = vevent.get_property(names::DTEND) {
        match event.start {
            Some(start) => {
                let end = read_datetime_in(dtend, event.time_zone.as_deref())?;
                let duration = duration_between(start, end).ok_or_else(|| {
                    RfcError::MappingError(format!("event {}: DTEND is before DTSTART", event.uid))
                })?;
                event.duration = Some(duration);
            }
            None => tracing::warn!(uid = %event.uid, "Ignoring DTEND without DTSTART"),
        }
    }

    for rrule in vevent.get_properties(names::RRULE) {
        event
            .recurrence_rules
            .push(rrule_to_rule(&rrule.value, event.time_zone.as_deref())?);
    }
    event.alerts = valarms_to_alerts(vevent)?;

    tracing::trace!(uid = %event.uid, "Read VEVENT");
    Ok(event)
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
