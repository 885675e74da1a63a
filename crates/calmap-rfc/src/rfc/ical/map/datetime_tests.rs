//! Tests for iCalendar date-time and duration values.

use chrono::NaiveDate;

use super::*;

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid test date-time")
}

#[test]
fn read_floating() {
    let value = read_datetime(&Property::new("DTSTART", "20200115T130000")).unwrap();
    assert_eq!(value.local, local(2020, 1, 15, 13, 0));
    assert_eq!(value.time_zone, None);
    assert!(!value.date_only);
}

#[test]
fn read_zoned() {
    let prop = Property::new("DTSTART", "20200115T130000")
        .with_param(Parameter::tzid("America/New_York"));
    let value = read_datetime(&prop).unwrap();
    assert_eq!(value.time_zone.as_deref(), Some("America/New_York"));
}

#[test]
fn read_utc() {
    let value = read_datetime(&Property::new("DTSTART", "20200115T180000Z")).unwrap();
    assert_eq!(value.local, local(2020, 1, 15, 18, 0));
    assert_eq!(value.time_zone.as_deref(), Some(UTC_TIME_ZONE));
}

#[test]
fn read_date() {
    let prop = Property::new("DTSTART", "20200115").with_param(Parameter::value_type("DATE"));
    let value = read_datetime(&prop).unwrap();
    assert_eq!(value.local, local(2020, 1, 15, 0, 0));
    assert!(value.date_only);
}

#[test]
fn unknown_zone_is_an_error() {
    let prop = Property::new("DTSTART", "20200115T130000").with_param(Parameter::tzid("Mars/Olympus"));
    assert!(matches!(
        read_datetime(&prop),
        Err(RfcError::UnknownTimeZone(_))
    ));
    assert!(matches!(
        write_datetime("DTSTART", local(2020, 1, 15, 13, 0), Some("Mars/Olympus"), false),
        Err(RfcError::UnknownTimeZone(_))
    ));
}

#[test]
fn malformed_value_is_an_error() {
    assert!(read_datetime(&Property::new("DTSTART", "2020-01-15T13:00:00")).is_err());
    assert!(read_datetime(&Property::new("DTSTART", "20201315T130000")).is_err());
}

#[test]
fn write_forms() {
    let start = local(2020, 1, 15, 13, 0);
    let floating = write_datetime("DTSTART", start, None, false).unwrap();
    assert_eq!(floating.value, "20200115T130000");
    assert!(floating.params.is_empty());

    let utc = write_datetime("DTSTART", start, Some("Etc/UTC"), false).unwrap();
    assert_eq!(utc.value, "20200115T130000Z");

    let zoned = write_datetime("DTSTART", start, Some("Europe/Berlin"), false).unwrap();
    assert_eq!(zoned.tzid(), Some("Europe/Berlin"));

    let date = write_datetime("DTSTART", local(2020, 1, 15, 0, 0), None, true).unwrap();
    assert_eq!(date.value, "20200115");
    assert_eq!(date.value_type(), Some("DATE"));
}

#[test]
fn utc_conversion() {
    // New York is UTC-5 in January.
    let utc = to_utc(local(2020, 1, 15, 13, 0), Some("America/New_York")).unwrap();
    assert_eq!(utc, local(2020, 1, 15, 18, 0));
    assert_eq!(
        from_utc(utc, Some("America/New_York")).unwrap(),
        local(2020, 1, 15, 13, 0)
    );
    assert_eq!(to_utc(utc, None).unwrap(), utc);
}

#[test]
fn skipped_local_time_uses_offset_before_gap() {
    // 02:30 does not exist on 2020-03-08 in New York; EST (-05:00) applies.
    assert_eq!(
        to_utc(local(2020, 3, 8, 2, 30), Some("America/New_York")).unwrap(),
        local(2020, 3, 8, 7, 30)
    );
}

#[test]
fn repeated_local_time_uses_first_occurrence() {
    // 01:30 occurs twice on 2020-11-01 in New York; EDT (-04:00) comes first.
    assert_eq!(
        to_utc(local(2020, 11, 1, 1, 30), Some("America/New_York")).unwrap(),
        local(2020, 11, 1, 5, 30)
    );
}

#[test]
fn read_in_other_zone() {
    let prop = Property::new("DUE", "20200115T180000Z");
    assert_eq!(
        read_datetime_in(&prop, Some("America/New_York")).unwrap(),
        local(2020, 1, 15, 13, 0)
    );
}

#[test]
fn ical_duration_format() {
    assert_eq!(format_duration(&Duration::hours(1), false).as_deref(), Some("PT1H"));
    assert_eq!(
        format_duration(&Duration::builder().weeks(2).build(), false).as_deref(),
        Some("P2W")
    );
    assert_eq!(
        format_duration(&Duration::builder().weeks(1).days(2).build(), false).as_deref(),
        Some("P9D")
    );
    assert_eq!(
        format_duration(&Duration::minutes(15).negate(), true).as_deref(),
        Some("-PT15M")
    );
    assert_eq!(format_duration(&Duration::builder().months(1).build(), false), None);
}

#[test]
fn ical_duration_read() {
    assert_eq!(read_duration("+PT1H").unwrap(), Duration::hours(1));
    assert!(read_duration("-P1D").unwrap().negative);
    assert!(read_duration("1H").is_err());
}

#[test]
fn duration_between_values() {
    let start = local(2020, 1, 15, 13, 0);
    assert_eq!(
        duration_between(start, local(2020, 1, 16, 14, 30)),
        Some(Duration::builder().days(1).hours(1).minutes(30).build())
    );
    assert_eq!(duration_between(start, start), Some(Duration::zero()));
    assert_eq!(duration_between(start, local(2020, 1, 15, 12, 0)), None);
}

#[test]
fn negative_ical_duration_is_rejected_where_required() {
    assert_eq!(
        read_non_negative_duration("+PT1H", "duration").unwrap(),
        Duration::hours(1)
    );
    assert!(read_non_negative_duration("-PT1H", "duration").is_err());
}
