//! VTODO components (RFC 5545 §3.6.2) for tasks.

use super::alarm::{alert_to_valarm, valarms_to_alerts};
use super::calendar::{IcalOptions, add_identity, required_uid};
use super::datetime::{
    format_duration, read_datetime, read_datetime_in, read_non_negative_duration, write_datetime,
};
use super::rrule::{rrule_to_rule, rule_to_rrule};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{Component, Property, names};
use crate::rfc::jscal::core::{Task, Token};
use crate::rfc::jscal::parse::percent_from_wire;

/// Writes a task as a VTODO. `progress` becomes `STATUS`.
///
/// ## Errors
/// Returns an error for unknown zones, rules without a frequency, or an
/// estimated duration with years or months.
pub(super) fn task_to_vtodo(task: &Task, options: &IcalOptions) -> RfcResult<Component> {
    let mut vtodo = Component::todo();
    add_identity(&mut vtodo, &task.uid, task.title.as_deref(), options);

    let time_zone = task.time_zone.as_deref();
    if let Some(start) = task.start {
        vtodo.add_property(write_datetime(names::DTSTART, start, time_zone, false)?);
    }
    if let Some(due) = task.due {
        vtodo.add_property(write_datetime(names::DUE, due, time_zone, false)?);
    }
    if let Some(duration) = &task.estimated_duration {
        let value = format_duration(duration, false).ok_or_else(|| {
            RfcError::MappingError(format!(
                "task {}: estimated duration {duration} has no iCalendar form",
                task.uid
            ))
        })?;
        vtodo.add_property(Property::new(names::ESTIMATED_DURATION, value));
    }
    if let Some(percent) = task.percent_complete {
        vtodo.add_property(Property::new(names::PERCENT_COMPLETE, percent.to_string()));
    }
    if let Some(progress) = &task.progress {
        vtodo.add_property(Property::new(names::STATUS, progress.to_ical()));
    }

    for rule in &task.recurrence_rules {
        vtodo.add_property(Property::new(names::RRULE, rule_to_rrule(rule, time_zone)?));
    }
    for alert in &task.alerts {
        vtodo.add_child(alert_to_valarm(alert)?);
    }
    Ok(vtodo)
}

/// Reads a VTODO into a task.
///
/// The task's zone comes from `DTSTART`, or from `DUE` when there is no
/// start; the other value is converted into it.
///
/// ## Errors
/// Returns an error for a missing `UID`, malformed values, a negative
/// estimated duration, or a percentage outside 0 to 100.
pub(super) fn vtodo_to_task(vtodo: &Component) -> RfcResult<Task> {
    let mut task = Task::new(required_uid(vtodo)?);
    task.title = vtodo.get_property(names::SUMMARY).map(Property::as_text);

    let dtstart = vtodo.get_property(names::DTSTART);
    let due = vtodo.get_property(names::DUE);
    if let Some(anchor) = dtstart.or(due) {
        task.time_zone = read_datetime(anchor)?.time_zone;
    }
    let time_zone = task.time_zone.as_deref();
    task.start = dtstart.map(|p| read_datetime_in(p, time_zone)).transpose()?;
    task.due = due.map(|p| read_datetime_in(p, time_zone)).transpose()?;

    task.estimated_duration = vtodo
        .get_property(names::ESTIMATED_DURATION)
        .map(|p| read_non_negative_duration(&p.value, "estimatedDuration"))
        .transpose()?;
    if let Some(percent) = vtodo.get_property(names::PERCENT_COMPLETE) {
        let value: i64 = percent.value.trim().parse().map_err(|e| {
            RfcError::MappingError(format!("invalid PERCENT-COMPLETE {:?}: {e}", percent.value))
        })?;
        task.percent_complete = Some(percent_from_wire(value)?);
    }
    task.progress = vtodo
        .get_property(names::STATUS)
        .map(|status| Token::new(&status.value));

    for rrule in vtodo.get_properties(names::RRULE) {
        task.recurrence_rules
            .push(rrule_to_rule(&rrule.value, task.time_zone.as_deref())?);
    }
    task.alerts = valarms_to_alerts(vtodo)?;

    tracing::trace!(uid = %task.uid, "Read VTODO");
    Ok(task)
}
