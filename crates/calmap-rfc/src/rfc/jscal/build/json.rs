//! JSCalendar JSON writer.
//!
//! Unset properties are omitted. With `include_defaults`, defaultable
//! properties that are unset are written with their RFC 8984 default instead.

use calmap_core::config::OutputConfig;
use calmap_core::constants::{
    TYPE_ALERT, TYPE_EVENT, TYPE_GROUP, TYPE_NDAY, TYPE_RECURRENCE_RULE, TYPE_TASK,
};
use serde_json::Value;

use crate::error::RfcResult;
use crate::rfc::jscal::core::{
    Alert, CalendarObject, DefaultPolicy, Event, Group, RecurrenceRule, Task, Token, Trigger,
    format_local_datetime, format_utc_datetime,
};
use crate::rfc::jscal::dto::{
    AlertDto, EventDto, GroupDto, MonthDto, NDayDto, RecurrenceRuleDto, TaskDto, TriggerDto,
};

/// Options for the JSON writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Write documented defaults for unset defaultable properties.
    pub include_defaults: bool,
    /// Indent the output.
    pub pretty: bool,
}

impl WriteOptions {
    #[must_use]
    pub const fn policy(&self) -> DefaultPolicy {
        DefaultPolicy::from_flag(self.include_defaults)
    }
}

impl From<&OutputConfig> for WriteOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            include_defaults: config.include_defaults,
            pretty: config.pretty,
        }
    }
}

/// Serializes a calendar object to JSON text.
///
/// ## Errors
/// Returns an error if serialization fails.
pub fn to_json(object: &CalendarObject, options: &WriteOptions) -> RfcResult<String> {
    let value = to_value(object, options)?;
    let text = if options.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Serializes a calendar object to a JSON value.
///
/// ## Errors
/// Returns an error if serialization fails.
#[tracing::instrument(skip_all, fields(uid = object.uid(), type_name = object.type_name()))]
pub fn to_value(object: &CalendarObject, options: &WriteOptions) -> RfcResult<Value> {
    tracing::debug!("Writing JSCalendar object");

    let policy = options.policy();
    let value = match object {
        CalendarObject::Event(event) => serde_json::to_value(event_to_dto(event, policy))?,
        CalendarObject::Task(task) => serde_json::to_value(task_to_dto(task, policy))?,
        CalendarObject::Group(group) => serde_json::to_value(group_to_dto(group, options)?)?,
    };
    Ok(value)
}

fn event_to_dto(event: &Event, policy: DefaultPolicy) -> EventDto {
    EventDto {
        type_name: TYPE_EVENT.to_string(),
        uid: Some(event.uid.clone()),
        title: event.title.clone(),
        start: event.start.as_ref().map(format_local_datetime),
        time_zone: event.time_zone.clone(),
        duration: event.duration_with(policy).map(|d| d.format(false)),
        show_without_time: event.show_without_time_with(policy),
        recurrence_rules: event
            .recurrence_rules
            .iter()
            .map(|rule| rule_to_dto(rule, policy))
            .collect(),
        alerts: event
            .alerts
            .iter()
            .map(|alert| (alert.id.clone(), alert_to_dto(alert, policy)))
            .collect(),
    }
}

fn task_to_dto(task: &Task, policy: DefaultPolicy) -> TaskDto {
    TaskDto {
        type_name: TYPE_TASK.to_string(),
        uid: Some(task.uid.clone()),
        title: task.title.clone(),
        start: task.start.as_ref().map(format_local_datetime),
        due: task.due.as_ref().map(format_local_datetime),
        time_zone: task.time_zone.clone(),
        estimated_duration: task.estimated_duration.map(|d| d.format(false)),
        percent_complete: task.percent_complete.map(i64::from),
        progress: task.progress.as_ref().map(Token::to_string),
        recurrence_rules: task
            .recurrence_rules
            .iter()
            .map(|rule| rule_to_dto(rule, policy))
            .collect(),
        alerts: task
            .alerts
            .iter()
            .map(|alert| (alert.id.clone(), alert_to_dto(alert, policy)))
            .collect(),
    }
}

fn group_to_dto(group: &Group, options: &WriteOptions) -> RfcResult<GroupDto> {
    Ok(GroupDto {
        type_name: TYPE_GROUP.to_string(),
        uid: Some(group.uid.clone()),
        title: group.title.clone(),
        entries: group
            .entries
            .iter()
            .map(|entry| to_value(entry, options))
            .collect::<RfcResult<_>>()?,
    })
}

fn rule_to_dto(rule: &RecurrenceRule, policy: DefaultPolicy) -> RecurrenceRuleDto {
    RecurrenceRuleDto {
        type_name: Some(TYPE_RECURRENCE_RULE.to_string()),
        frequency: rule.frequency().map(Token::to_string),
        interval: rule.interval_with(policy).map(i64::from),
        rscale: rule.rscale_with(policy).map(str::to_string),
        skip: rule.skip_with(policy).map(str::to_string),
        first_day_of_week: rule.first_day_of_week_with(policy).map(str::to_string),
        by_day: rule
            .by_day()
            .iter()
            .map(|nday| NDayDto {
                type_name: Some(TYPE_NDAY.to_string()),
                day: nday.day().to_string(),
                nth_of_period: nday.nth_of_period(),
            })
            .collect(),
        by_month: rule
            .by_month()
            .iter()
            .cloned()
            .map(MonthDto::Text)
            .collect(),
        by_month_day: rule.by_month_day().to_vec(),
        by_year_day: rule.by_year_day().to_vec(),
        by_week_no: rule.by_week_no().to_vec(),
        by_hour: rule.by_hour().to_vec(),
        by_minute: rule.by_minute().to_vec(),
        by_second: rule.by_second().to_vec(),
        by_set_position: rule.by_set_position().to_vec(),
        count: rule.count().map(i64::from),
        until: rule.until().as_ref().map(format_local_datetime),
    }
}

fn alert_to_dto(alert: &Alert, policy: DefaultPolicy) -> AlertDto {
    let trigger = match &alert.trigger {
        Trigger::Offset(offset) => TriggerDto::OffsetTrigger {
            offset: offset.offset.format(true),
            relative_to: offset.relative_to_with(policy).map(str::to_string),
        },
        Trigger::Absolute(when) => TriggerDto::AbsoluteTrigger {
            when: format_utc_datetime(when),
        },
    };
    AlertDto {
        type_name: Some(TYPE_ALERT.to_string()),
        trigger,
        action: alert.action_with(policy).map(str::to_string),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
