//! End-to-end conversions between JSCalendar JSON, the model and iCalendar.

use calmap_rfc::rfc::ical::{IcalOptions, from_ical_str, to_ical_string};
use calmap_rfc::rfc::jscal::core::{CalendarObject, Event, Task};
use calmap_rfc::rfc::jscal::{WriteOptions, from_json, to_json};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

const LUNCH_JSON: &str = r#"{
    "@type": "Event",
    "uid": "lunch-1",
    "title": "Lunch",
    "start": "2020-01-15T13:00:00",
    "timeZone": "America/New_York",
    "duration": "PT1H",
    "recurrenceRules": [
        {"@type": "RecurrenceRule", "frequency": "weekly", "byDay": [{"@type": "NDay", "day": "we"}], "count": 4}
    ],
    "alerts": {
        "a1": {"@type": "Alert", "trigger": {"@type": "OffsetTrigger", "offset": "-PT15M"}, "action": "display"}
    }
}"#;

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid test date-time")
}

fn options() -> IcalOptions {
    IcalOptions::new(
        "-//calmap//tests//EN",
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
    )
}

fn as_event(object: &CalendarObject) -> &Event {
    match object {
        CalendarObject::Event(event) => event,
        other => panic!("expected an event, got {other:?}"),
    }
}

#[test]
fn json_round_trip_is_stable() {
    let object = from_json(LUNCH_JSON).unwrap();
    let written = to_json(&object, &WriteOptions::default()).unwrap();
    assert_eq!(from_json(&written).unwrap(), object);
    assert_eq!(to_json(&from_json(&written).unwrap(), &WriteOptions::default()).unwrap(), written);
}

#[test]
fn json_to_ical_and_back() {
    let object = from_json(LUNCH_JSON).unwrap();
    let ical = to_ical_string(&object, &options()).unwrap();

    assert!(ical.contains("DTSTART;TZID=America/New_York:20200115T130000\r\n"));
    assert!(ical.contains("DURATION:PT1H\r\n"));
    assert!(ical.contains("RRULE:FREQ=WEEKLY;BYDAY=WE;COUNT=4\r\n"));
    assert!(ical.contains("TRIGGER:-PT15M\r\n"));

    assert_eq!(from_ical_str(&ical).unwrap(), object);
}

#[test]
fn event_end_is_start_plus_duration() {
    let object = from_json(LUNCH_JSON).unwrap();
    let event = as_event(&object);
    assert_eq!(event.estimated_end().unwrap(), Some(local(2020, 1, 15, 14, 0)));
}

#[test]
fn task_start_is_due_minus_estimate() {
    let object = from_json(
        r#"{"@type": "Task", "uid": "t1", "due": "2020-01-15T18:00:00", "estimatedDuration": "PT1H"}"#,
    )
    .unwrap();
    let CalendarObject::Task(task) = &object else {
        panic!("expected a task");
    };
    assert_eq!(task.estimated_start().unwrap(), Some(local(2020, 1, 15, 17, 0)));
    assert_eq!(task.estimated_end().unwrap(), None);

    let back = from_ical_str(&to_ical_string(&object, &options()).unwrap()).unwrap();
    assert_eq!(back, object);
}

#[test]
fn leap_month_survives_both_formats() {
    let object = from_json(
        r#"{"@type": "Event", "uid": "e1", "recurrenceRules": [
            {"@type": "RecurrenceRule", "frequency": "yearly", "rscale": "chinese", "byMonth": ["3L"]}
        ]}"#,
    )
    .unwrap();

    let json = to_json(&object, &WriteOptions::default()).unwrap();
    assert!(json.contains(r#""byMonth":["3L"]"#));

    let ical = to_ical_string(&object, &options()).unwrap();
    assert!(ical.contains("RRULE:FREQ=YEARLY;RSCALE=CHINESE;BYMONTH=3L\r\n"));
    assert_eq!(from_ical_str(&ical).unwrap(), object);
}

#[test]
fn group_round_trip_through_ical() {
    let mut task = Task::new("t1");
    task.title = Some("Pack".to_string());
    let object = from_json(
        r#"{"@type": "Group", "uid": "g1", "title": "Trip", "entries": [
            {"@type": "Event", "uid": "e1", "start": "2020-03-01T09:00:00", "duration": "P1D"},
            {"@type": "Task", "uid": "t1", "title": "Pack"}
        ]}"#,
    )
    .unwrap();

    let back = from_ical_str(&to_ical_string(&object, &options()).unwrap()).unwrap();
    assert_eq!(back, object);
    let CalendarObject::Group(group) = back else {
        panic!("expected a group");
    };
    assert_eq!(group.entries[1], CalendarObject::Task(task));
}

#[test]
fn defaults_are_written_only_on_request() {
    let object = from_json(r#"{"@type": "Event", "uid": "e1"}"#).unwrap();

    let plain = to_json(&object, &WriteOptions::default()).unwrap();
    assert!(!plain.contains("duration"));

    let with_defaults = to_json(
        &object,
        &WriteOptions {
            include_defaults: true,
            pretty: false,
        },
    )
    .unwrap();
    assert!(with_defaults.contains(r#""duration":"P0D""#));
}
