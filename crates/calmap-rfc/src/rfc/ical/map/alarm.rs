//! VALARM components (RFC 5545 §3.6.6) for alerts.

use chrono::{DateTime, Utc};

use super::datetime::{format_duration, format_utc, parse_utc, read_duration};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{Component, ComponentKind, Parameter, Property, names};
use crate::rfc::jscal::core::{Alert, DefaultPolicy, OffsetTrigger, RelativeTo, Token, Trigger};

const DISPLAY_ACTION: &str = "DISPLAY";
const DEFAULT_DESCRIPTION: &str = "Reminder";

/// Writes an alert as a VALARM.
///
/// The alert id is kept in the alarm's `UID`. Display alarms get the
/// `DESCRIPTION` RFC 5545 requires of them.
///
/// ## Errors
/// Returns `RfcError::MappingError` for an offset with years or months.
pub(super) fn alert_to_valarm(alert: &Alert) -> RfcResult<Component> {
    let mut alarm = Component::alarm();
    alarm.add_property(Property::text(names::UID, &alert.id));

    let action = alert
        .action_with(DefaultPolicy::Substitute)
        .unwrap_or("display")
        .to_ascii_uppercase();
    alarm.add_property(Property::new(names::ACTION, action.as_str()));
    alarm.add_property(trigger_to_ical(&alert.trigger, &alert.id)?);

    if action == DISPLAY_ACTION {
        alarm.add_property(Property::text(names::DESCRIPTION, DEFAULT_DESCRIPTION));
    }
    Ok(alarm)
}

fn trigger_to_ical(trigger: &Trigger, id: &str) -> RfcResult<Property> {
    match trigger {
        Trigger::Absolute(when) => Ok(Property::new(names::TRIGGER, format_utc(&when.naive_utc()))
            .with_param(Parameter::value_type("DATE-TIME"))),
        Trigger::Offset(offset) => {
            let value = format_duration(&offset.offset, true).ok_or_else(|| {
                RfcError::MappingError(format!(
                    "alert {id}: offset {} has no iCalendar form",
                    offset.offset
                ))
            })?;
            let prop = Property::new(names::TRIGGER, value);
            Ok(match offset.relative_to_kind() {
                Some(RelativeTo::End) => prop.with_param(Parameter::related("END")),
                Some(RelativeTo::Start) => prop,
                None => {
                    tracing::warn!(id, "Dropping unknown relativeTo on alarm trigger");
                    prop
                }
            })
        }
    }
}

/// Reads the VALARM children of `component` in order.
///
/// Alarms without a `UID` get `alert-N` ids, numbered from one.
///
/// ## Errors
/// Returns an error for an alarm without a readable `TRIGGER`.
pub(super) fn valarms_to_alerts(component: &Component) -> RfcResult<Vec<Alert>> {
    component
        .children_of_kind(ComponentKind::Alarm)
        .enumerate()
        .map(|(index, alarm)| {
            let id = alarm.uid().unwrap_or_else(|| format!("alert-{}", index + 1));
            valarm_to_alert(alarm, id)
        })
        .collect()
}

fn valarm_to_alert(alarm: &Component, id: String) -> RfcResult<Alert> {
    let trigger = alarm.get_property(names::TRIGGER).ok_or_else(|| {
        RfcError::MappingError(format!("alarm {id} has no TRIGGER"))
    })?;

    let mut alert = Alert::new(id, trigger_from_ical(trigger)?);
    alert.action = alarm
        .get_property(names::ACTION)
        .map(|action| Token::new(&action.value));
    Ok(alert)
}

fn trigger_from_ical(prop: &Property) -> RfcResult<Trigger> {
    let absolute = prop
        .value_type()
        .is_some_and(|v| v.eq_ignore_ascii_case("DATE-TIME"));
    if absolute {
        let utc = parse_utc(&prop.value).ok_or_else(|| {
            RfcError::MappingError(format!("absolute TRIGGER must be UTC, got {:?}", prop.value))
        })?;
        return Ok(Trigger::Absolute(DateTime::<Utc>::from_naive_utc_and_offset(utc, Utc)));
    }

    let mut offset = OffsetTrigger::new(read_duration(&prop.value)?);
    offset.relative_to = prop.get_param_value("RELATED").map(Token::new);
    Ok(Trigger::Offset(offset))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::rfc::jscal::core::Duration;

    fn offset_alert(id: &str, minutes: u32, relative_to: Option<&str>) -> Alert {
        let mut offset = OffsetTrigger::new(Duration::minutes(minutes).negate());
        offset.relative_to = relative_to.map(Token::new);
        Alert::new(id, Trigger::Offset(offset))
    }

    #[test]
    fn write_offset_alarm() {
        let alarm = alert_to_valarm(&offset_alert("a1", 15, None)).unwrap();
        let trigger = alarm.get_property(names::TRIGGER).unwrap();
        assert_eq!(trigger.value, "-PT15M");
        assert!(trigger.get_param("RELATED").is_none());
        assert_eq!(alarm.get_property(names::ACTION).unwrap().value, "DISPLAY");
        assert_eq!(alarm.uid().as_deref(), Some("a1"));
        assert!(alarm.get_property(names::DESCRIPTION).is_some());
    }

    #[test]
    fn write_end_relative_alarm() {
        let alarm = alert_to_valarm(&offset_alert("a1", 5, Some("end"))).unwrap();
        let trigger = alarm.get_property(names::TRIGGER).unwrap();
        assert_eq!(trigger.get_param_value("RELATED"), Some("END"));
    }

    #[test]
    fn write_absolute_alarm() {
        let when = Utc.with_ymd_and_hms(2020, 1, 15, 12, 0, 0).unwrap();
        let mut alert = Alert::new("a2", Trigger::Absolute(when));
        alert.action = Some(Token::new("email"));

        let alarm = alert_to_valarm(&alert).unwrap();
        let trigger = alarm.get_property(names::TRIGGER).unwrap();
        assert_eq!(trigger.value, "20200115T120000Z");
        assert_eq!(trigger.value_type(), Some("DATE-TIME"));
        assert_eq!(alarm.get_property(names::ACTION).unwrap().value, "EMAIL");
        assert!(alarm.get_property(names::DESCRIPTION).is_none());
    }

    #[test]
    fn month_offset_has_no_alarm_form() {
        let alert = Alert::new(
            "a3",
            Trigger::Offset(OffsetTrigger::new(Duration::builder().months(1).build())),
        );
        assert!(matches!(
            alert_to_valarm(&alert),
            Err(RfcError::MappingError(_))
        ));
    }

    #[test]
    fn read_alarms() {
        let mut event = Component::event();
        event.add_child(alert_to_valarm(&offset_alert("a1", 15, Some("end"))).unwrap());

        let mut anonymous = Component::alarm();
        anonymous.add_property(Property::new(names::ACTION, "AUDIO"));
        anonymous.add_property(Property::new(names::TRIGGER, "+PT5M"));
        event.add_child(anonymous);

        let alerts = valarms_to_alerts(&event).unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].id, "a1");
        let Trigger::Offset(first) = &alerts[0].trigger else {
            panic!("expected offset trigger");
        };
        assert_eq!(first.offset.format(true), "-PT15M");
        assert_eq!(first.relative_to_kind(), Some(RelativeTo::End));

        assert_eq!(alerts[1].id, "alert-2");
        assert_eq!(alerts[1].action_with(DefaultPolicy::Unset), Some("audio"));
    }

    #[test]
    fn read_alarm_without_trigger_fails() {
        let mut event = Component::event();
        event.add_child(Component::alarm());
        assert!(valarms_to_alerts(&event).is_err());
    }
}
