//! JSCalendar JSON reader.
//!
//! Objects are decoded into the serde shapes of `dto` and then moved into the
//! model through its setters, so list entries pass the same single-item
//! validation as programmatic callers.

use std::collections::BTreeMap;

use calmap_core::constants::{TYPE_EVENT, TYPE_GROUP, TYPE_TASK};
use calmap_core::util::validate::{validate_positive, validate_unsigned};
use serde_json::Value;

use super::error::{ParseError, ParseErrorKind};
use super::values::{parse_duration, parse_local_datetime, parse_utc_datetime};
use crate::error::{RfcError, RfcResult};
use crate::rfc::jscal::core::{
    Alert, CalendarObject, Duration, Event, Group, ModelError, NDay, OffsetTrigger,
    RecurrenceRule, Task, Token, Trigger,
};
use crate::rfc::jscal::dto::{
    AlertDto, EventDto, GroupDto, MonthDto, NDayDto, RecurrenceRuleDto, TaskDto, TriggerDto,
};

/// Parses a JSCalendar object (`Event`, `Task` or `Group`) from JSON text.
///
/// ## Errors
/// Returns an error if the text is not JSON, the `@type` is not handled, or
/// any property fails validation.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn from_json(input: &str) -> RfcResult<CalendarObject> {
    let value: Value = serde_json::from_str(input)?;
    from_value(value)
}

/// Parses a JSCalendar object from a decoded JSON value.
///
/// ## Errors
/// Returns an error if the `@type` is not handled or any property fails
/// validation.
pub fn from_value(value: Value) -> RfcResult<CalendarObject> {
    let type_name = value
        .get("@type")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::missing_property("object", "@type"))?
        .to_string();

    tracing::debug!(%type_name, "Reading JSCalendar object");

    match type_name.as_str() {
        TYPE_EVENT => Ok(event_from_dto(serde_json::from_value(value)?)?.into()),
        TYPE_TASK => Ok(task_from_dto(serde_json::from_value(value)?)?.into()),
        TYPE_GROUP => Ok(group_from_dto(serde_json::from_value(value)?)?.into()),
        other => Err(ParseError::unexpected_type(other).into()),
    }
}

fn required_uid(uid: Option<String>, object: &str) -> RfcResult<String> {
    uid.filter(|u| !u.is_empty())
        .ok_or_else(|| ParseError::missing_property(object, "uid").into())
}

/// Parses a duration that must not be negative.
pub(crate) fn non_negative_duration(text: &str, field: &'static str) -> RfcResult<Duration> {
    let duration = parse_duration(text)?;
    if duration.negative && !duration.is_zero() {
        return Err(ModelError::NegativeDuration(field).into());
    }
    Ok(duration)
}

fn event_from_dto(dto: EventDto) -> RfcResult<Event> {
    let mut event = Event::new(required_uid(dto.uid, TYPE_EVENT)?);
    event.title = dto.title;
    event.start = dto.start.as_deref().map(parse_local_datetime).transpose()?;
    event.time_zone = dto.time_zone;
    event.duration = dto
        .duration
        .as_deref()
        .map(|d| non_negative_duration(d, "duration"))
        .transpose()?;
    event.show_without_time = dto.show_without_time;
    event.recurrence_rules = rules_from_dtos(dto.recurrence_rules)?;
    event.alerts = alerts_from_dtos(dto.alerts)?;
    Ok(event)
}

fn task_from_dto(dto: TaskDto) -> RfcResult<Task> {
    let mut task = Task::new(required_uid(dto.uid, TYPE_TASK)?);
    task.title = dto.title;
    task.start = dto.start.as_deref().map(parse_local_datetime).transpose()?;
    task.due = dto.due.as_deref().map(parse_local_datetime).transpose()?;
    task.time_zone = dto.time_zone;
    task.estimated_duration = dto
        .estimated_duration
        .as_deref()
        .map(|d| non_negative_duration(d, "estimatedDuration"))
        .transpose()?;
    task.percent_complete = dto
        .percent_complete
        .map(percent_from_wire)
        .transpose()?;
    task.progress = dto.progress.map(Token::new);
    task.recurrence_rules = rules_from_dtos(dto.recurrence_rules)?;
    task.alerts = alerts_from_dtos(dto.alerts)?;
    Ok(task)
}

/// Validates a `percentComplete` wire value (0 to 100).
pub(crate) fn percent_from_wire(value: i64) -> RfcResult<u8> {
    let percent = validate_unsigned("percentComplete", value)?;
    u8::try_from(percent)
        .ok()
        .filter(|p| *p <= 100)
        .ok_or_else(|| {
            ModelError::OutOfRange {
                field: "percentComplete",
                value,
            }
            .into()
        })
}

fn group_from_dto(dto: GroupDto) -> RfcResult<Group> {
    let mut group = Group::new(required_uid(dto.uid, TYPE_GROUP)?);
    group.title = dto.title;

    for entry in dto.entries {
        match from_value(entry) {
            Ok(object) => group.entries.push(object),
            Err(RfcError::ParseError(e)) if e.kind == ParseErrorKind::UnexpectedType => {
                tracing::warn!(type_name = %e.input, "Skipping group entry of unknown type");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(group)
}

fn rules_from_dtos(dtos: Vec<RecurrenceRuleDto>) -> RfcResult<Vec<RecurrenceRule>> {
    dtos.into_iter().map(rule_from_dto).collect()
}

fn rule_from_dto(dto: RecurrenceRuleDto) -> RfcResult<RecurrenceRule> {
    let mut rule = RecurrenceRule::new();

    if let Some(frequency) = dto.frequency {
        rule.set_frequency(frequency);
    }
    if let Some(interval) = dto.interval {
        rule.set_interval(validate_positive("interval", interval)?)?;
    }
    if let Some(rscale) = dto.rscale {
        rule.set_rscale(rscale);
    }
    if let Some(skip) = dto.skip {
        rule.set_skip(skip);
    }
    if let Some(day) = dto.first_day_of_week {
        rule.set_first_day_of_week(day);
    }

    for nday in dto.by_day {
        rule.add_by_day(nday_from_dto(nday));
    }
    for month in dto.by_month {
        match month {
            MonthDto::Number(n) => rule.add_by_month_number(n)?,
            MonthDto::Text(text) => rule.add_by_month(text)?,
        }
    }
    rule.set_by_month_day(dto.by_month_day);
    rule.set_by_year_day(dto.by_year_day);
    rule.set_by_week_no(dto.by_week_no);
    rule.set_by_hour(dto.by_hour);
    rule.set_by_minute(dto.by_minute);
    rule.set_by_second(dto.by_second);
    rule.set_by_set_position(dto.by_set_position);

    if let Some(count) = dto.count {
        rule.set_count(validate_unsigned("count", count)?);
    }
    if let Some(until) = dto.until {
        rule.set_until(parse_local_datetime(&until)?);
    }

    tracing::trace!(?rule, "Decoded recurrence rule");
    Ok(rule)
}

fn nday_from_dto(dto: NDayDto) -> NDay {
    let mut nday = NDay::new(dto.day);
    if let Some(nth) = dto.nth_of_period {
        nday.set_nth_of_period(nth);
    }
    nday
}

fn alerts_from_dtos(dtos: BTreeMap<String, AlertDto>) -> RfcResult<Vec<Alert>> {
    dtos.into_iter()
        .map(|(id, dto)| {
            let trigger = match dto.trigger {
                TriggerDto::OffsetTrigger {
                    offset,
                    relative_to,
                } => Trigger::Offset(OffsetTrigger {
                    offset: parse_duration(&offset)?,
                    relative_to: relative_to.map(Token::new),
                }),
                TriggerDto::AbsoluteTrigger { when } => {
                    Trigger::Absolute(parse_utc_datetime(&when)?)
                }
            };
            let mut alert = Alert::new(id, trigger);
            alert.action = dto.action.map(Token::new);
            Ok(alert)
        })
        .collect()
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
