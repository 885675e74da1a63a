//! Tests for `RecurrenceRule`.

use chrono::{NaiveDate, Timelike};

use super::*;

fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("valid test date-time")
}

#[test]
fn new_rule_is_entirely_unset() {
    let rule = RecurrenceRule::new();
    assert!(!rule.is_frequency_set());
    assert!(!rule.is_interval_set());
    assert!(!rule.is_rscale_set());
    assert!(!rule.is_skip_set());
    assert!(!rule.is_first_day_of_week_set());
    assert!(!rule.is_by_day_set());
    assert!(!rule.is_by_month_set());
    assert!(!rule.is_by_set_position_set());
    assert!(!rule.is_count_set());
    assert!(!rule.is_until_set());
}

#[test]
fn enumerations_are_lowercased() {
    let mut rule = RecurrenceRule::new();
    rule.set_frequency("YEARLY");
    rule.set_rscale("Chinese");
    rule.set_skip("Forward");
    rule.set_first_day_of_week("SU");

    assert_eq!(rule.frequency().map(Token::as_str), Some("yearly"));
    assert_eq!(rule.frequency_kind(), Some(Frequency::Yearly));
    assert_eq!(rule.rscale().map(Token::as_str), Some("chinese"));
    assert_eq!(rule.skip_kind(), Some(Skip::Forward));
    assert_eq!(rule.first_weekday(), Some(Weekday::Sunday));
}

#[test]
fn unknown_frequency_is_stored() {
    let mut rule = RecurrenceRule::new();
    rule.set_frequency("Fortnightly");
    assert!(rule.is_frequency_set());
    assert_eq!(rule.frequency().map(Token::as_str), Some("fortnightly"));
    assert_eq!(rule.frequency_kind(), None);
}

#[test]
fn interval_default_policy() {
    let mut rule = RecurrenceRule::new();
    assert_eq!(rule.interval_with(DefaultPolicy::Unset), None);
    assert_eq!(rule.interval_with(DefaultPolicy::Substitute), Some(1));
    assert_eq!(rule.interval_or_default(), 1);

    rule.set_interval(5).unwrap();
    assert_eq!(rule.interval_with(DefaultPolicy::Unset), Some(5));
    assert_eq!(rule.interval_with(DefaultPolicy::Substitute), Some(5));
}

#[test]
fn zero_interval_rejected() {
    let mut rule = RecurrenceRule::new();
    assert_eq!(rule.set_interval(0), Err(ModelError::ZeroValue("interval")));
    assert!(!rule.is_interval_set());
}

#[test]
fn string_defaults() {
    let rule = RecurrenceRule::new();
    assert_eq!(rule.rscale_with(DefaultPolicy::Unset), None);
    assert_eq!(rule.rscale_with(DefaultPolicy::Substitute), Some("gregorian"));
    assert_eq!(rule.skip_with(DefaultPolicy::Substitute), Some("omit"));
    assert_eq!(
        rule.first_day_of_week_with(DefaultPolicy::Substitute),
        Some("mo")
    );

    let mut rule = RecurrenceRule::new();
    rule.set_skip("backward");
    assert_eq!(rule.skip_with(DefaultPolicy::Substitute), Some("backward"));
}

#[test]
fn by_day_preserves_insertion_order() {
    let mut rule = RecurrenceRule::with_frequency(Frequency::Monthly);
    rule.add_by_day(NDay::nth("fr", -1));
    rule.add_by_day(NDay::new("MO"));
    rule.add_by_day(NDay::nth("tu", 2));

    let days: Vec<_> = rule.by_day().iter().map(|d| d.day().as_str()).collect();
    assert_eq!(days, ["fr", "mo", "tu"]);
    assert_eq!(rule.by_day()[0].nth_of_period(), Some(-1));
}

#[test]
fn set_by_day_replaces() {
    let mut rule = RecurrenceRule::new();
    rule.add_by_day(NDay::new("mo"));
    rule.set_by_day([NDay::new("we"), NDay::new("fr")]);
    assert_eq!(rule.by_day().len(), 2);
    assert_eq!(rule.by_day()[0].day().as_str(), "we");
}

#[test]
fn by_month_keeps_leap_suffix() {
    let mut rule = RecurrenceRule::with_frequency(Frequency::Yearly);
    rule.add_by_month("3L").unwrap();
    rule.add_by_month_number(4).unwrap();
    rule.add_by_month("5l").unwrap();
    assert_eq!(rule.by_month(), ["3L", "4", "5L"]);
}

#[test]
fn by_month_rejects_other_forms() {
    let mut rule = RecurrenceRule::new();
    for bad in ["", "L", "3X", "abc", "0", "123", "3LL"] {
        assert!(
            matches!(rule.add_by_month(bad), Err(ModelError::InvalidMonth(_))),
            "{bad:?} should be rejected"
        );
    }
    assert!(!rule.is_by_month_set());
}

#[test]
fn set_by_month_routes_through_add() {
    let mut rule = RecurrenceRule::new();
    rule.set_by_month(["1", "2L"]).unwrap();
    assert_eq!(rule.by_month(), ["1", "2L"]);
    assert!(rule.set_by_month(["1", "x"]).is_err());
    assert_eq!(rule.by_month(), ["1"]);
}

#[test]
fn integer_lists_keep_order_and_sign() {
    let mut rule = RecurrenceRule::new();
    rule.set_by_month_day([1, -1, 15]);
    rule.add_by_year_day(-366);
    rule.set_by_week_no([20]);
    rule.set_by_hour([9, 17]);
    rule.set_by_minute([0, 30]);
    rule.set_by_second([0]);
    rule.set_by_set_position([-1]);

    assert_eq!(rule.by_month_day(), [1, -1, 15]);
    assert_eq!(rule.by_year_day(), [-366]);
    assert_eq!(rule.by_week_no(), [20]);
    assert_eq!(rule.by_hour(), [9, 17]);
    assert_eq!(rule.by_minute(), [0, 30]);
    assert_eq!(rule.by_second(), [0]);
    assert_eq!(rule.by_set_position(), [-1]);
    assert!(rule.is_by_second_set());
}

#[test]
fn zero_values_are_set_not_unset() {
    let mut rule = RecurrenceRule::new();
    rule.set_count(0);
    rule.add_by_second(0);
    assert!(rule.is_count_set());
    assert_eq!(rule.count(), Some(0));
    assert!(rule.is_by_second_set());
}

#[test]
fn until_reads_back_as_wall_clock() {
    let mut rule = RecurrenceRule::new();
    let until = local(2024, 12, 31, 23, 59, 59);
    rule.set_until(until);

    assert_eq!(rule.until(), Some(until));
    assert_eq!(rule.until_utc().map(|u| u.naive_utc()), Some(until));
}

#[test]
fn until_drops_fraction() {
    let mut rule = RecurrenceRule::new();
    let until = local(2024, 1, 1, 0, 0, 0).with_nanosecond(123_000_000).unwrap();
    rule.set_until(until);
    assert_eq!(rule.until(), Some(local(2024, 1, 1, 0, 0, 0)));
}

#[test]
fn count_and_until_may_coexist() {
    let mut rule = RecurrenceRule::new();
    rule.set_count(10);
    rule.set_until(local(2024, 1, 1, 0, 0, 0));
    assert!(rule.is_count_set());
    assert!(rule.is_until_set());
}
