//! Tests for derived start/end values and trigger times.

use chrono::{NaiveDate, NaiveDateTime};

use super::*;

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid test date-time")
}

#[test]
fn event_estimated_end() {
    let mut event = Event::new("e1");
    event.start = Some(local(2020, 1, 15, 13, 0));
    event.duration = Some(Duration::hours(1));
    assert_eq!(event.estimated_end().unwrap(), Some(local(2020, 1, 15, 14, 0)));
}

#[test]
fn event_estimated_end_requires_both_fields() {
    let mut event = Event::new("e1");
    event.duration = Some(Duration::hours(1));
    assert_eq!(event.estimated_end().unwrap(), None);

    let mut event = Event::new("e1");
    event.start = Some(local(2020, 1, 15, 13, 0));
    assert_eq!(event.estimated_end().unwrap(), None);
}

#[test]
fn event_duration_default_policy() {
    let event = Event::new("e1");
    assert_eq!(event.duration_with(DefaultPolicy::Unset), None);
    assert_eq!(
        event.duration_with(DefaultPolicy::Substitute),
        Some(Duration::zero())
    );
    assert_eq!(event.show_without_time_with(DefaultPolicy::Substitute), Some(false));
}

#[test]
fn task_estimated_start_counts_back_from_due() {
    let mut task = Task::new("t1");
    task.due = Some(local(2020, 1, 19, 18, 0));
    task.estimated_duration = Some(Duration::hours(1));
    assert_eq!(task.estimated_start().unwrap(), Some(local(2020, 1, 19, 17, 0)));
    assert_eq!(task.estimated_end().unwrap(), None);
}

#[test]
fn task_estimated_end_ignores_due() {
    let mut task = Task::new("t1");
    task.start = Some(local(2020, 1, 19, 9, 0));
    task.due = Some(local(2020, 1, 25, 9, 0));
    task.estimated_duration = Some(Duration::builder().hours(2).minutes(30).build());
    assert_eq!(task.estimated_end().unwrap(), Some(local(2020, 1, 19, 11, 30)));
}

#[test]
fn task_estimates_undefined_without_duration() {
    let mut task = Task::new("t1");
    task.start = Some(local(2020, 1, 19, 9, 0));
    task.due = Some(local(2020, 1, 19, 18, 0));
    assert_eq!(task.estimated_start().unwrap(), None);
    assert_eq!(task.estimated_end().unwrap(), None);
}

#[test]
fn offset_trigger_before_start() {
    let mut event = Event::new("e1");
    event.start = Some(local(2020, 1, 15, 13, 0));
    let trigger = OffsetTrigger::new(Duration::minutes(15).negate());
    assert_eq!(
        trigger.trigger_time(&event).unwrap(),
        Some(local(2020, 1, 15, 12, 45))
    );
}

#[test]
fn offset_trigger_relative_to_end() {
    let mut event = Event::new("e1");
    event.start = Some(local(2020, 1, 15, 13, 0));
    event.duration = Some(Duration::hours(1));
    let mut trigger = OffsetTrigger::new(Duration::minutes(5));
    trigger.relative_to = Some(Token::new("END"));
    assert_eq!(
        trigger.trigger_time(&event).unwrap(),
        Some(local(2020, 1, 15, 14, 5))
    );
}

#[test]
fn task_end_trigger_uses_due() {
    let mut task = Task::new("t1");
    task.due = Some(local(2020, 1, 19, 18, 0));
    let mut trigger = OffsetTrigger::new(Duration::hours(1).negate());
    trigger.relative_to = Some(RelativeTo::End.into());
    assert_eq!(
        trigger.trigger_time(&task).unwrap(),
        Some(local(2020, 1, 19, 17, 0))
    );
}

#[test]
fn offset_trigger_without_anchor() {
    let event = Event::new("e1");
    let trigger = OffsetTrigger::new(Duration::minutes(10));
    assert_eq!(trigger.trigger_time(&event).unwrap(), None);
}

#[test]
fn group_leaves_flatten_nested_groups() {
    let mut inner = Group::new("inner");
    inner.entries.push(Task::new("t1").into());
    let mut outer = Group::new("outer");
    outer.entries.push(Event::new("e1").into());
    outer.entries.push(inner.into());

    let uids: Vec<_> = outer.leaves().iter().map(|o| o.uid()).collect();
    assert_eq!(uids, ["e1", "t1"]);
}

#[test]
fn generated_uids_are_distinct() {
    assert_ne!(Event::with_generated_uid().uid, Event::with_generated_uid().uid);
    assert!(!Group::with_generated_uid().uid.is_empty());
}
