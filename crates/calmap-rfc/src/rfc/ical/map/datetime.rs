//! DATE, DATE-TIME and DURATION values (RFC 5545 §3.3.4, §3.3.5, §3.3.6).
//!
//! The model keeps wall-clock values plus an IANA zone name. `Etc/UTC` (or
//! `UTC`) maps to the `Z` form; any other zone maps to a `TZID` parameter and
//! must be known to the time zone database.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{Parameter, Property};
use crate::rfc::jscal::core::Duration;
use crate::rfc::jscal::parse::{non_negative_duration, parse_duration};

const DATE_FORMAT: &str = "%Y%m%d";
const DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Zone name used for values read in the `Z` form.
pub(super) const UTC_TIME_ZONE: &str = "Etc/UTC";

/// A DATE or DATE-TIME value in model terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct LocalValue {
    pub local: NaiveDateTime,
    pub time_zone: Option<String>,
    pub date_only: bool,
}

pub(super) fn is_utc_zone(time_zone: &str) -> bool {
    time_zone.eq_ignore_ascii_case(UTC_TIME_ZONE) || time_zone.eq_ignore_ascii_case("UTC")
}

/// Looks up an IANA zone.
///
/// ## Errors
/// Returns `RfcError::UnknownTimeZone` if the zone is not in the database.
pub(super) fn resolve_time_zone(time_zone: &str) -> RfcResult<Tz> {
    time_zone
        .parse::<Tz>()
        .map_err(|e| RfcError::UnknownTimeZone(format!("{time_zone} ({e})")))
}

fn invalid_value(property: &str, value: &str) -> RfcError {
    RfcError::MappingError(format!("invalid {property} value {value:?}"))
}

/// Parses `YYYYMMDD`, `YYYYMMDDTHHMMSS` or `YYYYMMDDTHHMMSSZ`.
///
/// Returns the wall-clock value, whether it had the `Z` suffix, and whether
/// it was a DATE.
fn parse_date_or_datetime(value: &str) -> Option<(NaiveDateTime, bool, bool)> {
    if value.len() == 8 {
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT).ok()?;
        return Some((date.and_time(NaiveTime::MIN), false, true));
    }
    match value.strip_suffix('Z') {
        Some(utc) => NaiveDateTime::parse_from_str(utc, DATETIME_FORMAT)
            .ok()
            .map(|local| (local, true, false)),
        None => NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
            .ok()
            .map(|local| (local, false, false)),
    }
}

/// Reads a DATE or DATE-TIME property.
///
/// ## Errors
/// Returns an error for malformed values or an unknown `TZID`.
pub(super) fn read_datetime(property: &Property) -> RfcResult<LocalValue> {
    let (local, utc, date_only) = parse_date_or_datetime(&property.value)
        .ok_or_else(|| invalid_value(&property.name, &property.value))?;

    let time_zone = if utc {
        Some(UTC_TIME_ZONE.to_string())
    } else if date_only {
        None
    } else {
        match property.tzid() {
            Some(tzid) => {
                resolve_time_zone(tzid)?;
                Some(tzid.to_string())
            }
            None => None,
        }
    };

    Ok(LocalValue {
        local,
        time_zone,
        date_only,
    })
}

/// Reads a DATE or DATE-TIME property as wall-clock time in `time_zone`,
/// converting from the property's own zone when the two differ. DATE and
/// floating values are taken as they are.
///
/// ## Errors
/// Returns an error for malformed values or unknown zones.
pub(super) fn read_datetime_in(
    property: &Property,
    time_zone: Option<&str>,
) -> RfcResult<NaiveDateTime> {
    let value = read_datetime(property)?;
    if value.date_only || value.time_zone.is_none() || value.time_zone.as_deref() == time_zone {
        return Ok(value.local);
    }
    let utc = to_utc(value.local, value.time_zone.as_deref())?;
    from_utc(utc, time_zone)
}

/// Writes a DATE or DATE-TIME property for a wall-clock value.
///
/// ## Errors
/// Returns `RfcError::UnknownTimeZone` for a zone outside the database.
pub(super) fn write_datetime(
    name: &str,
    local: NaiveDateTime,
    time_zone: Option<&str>,
    date_only: bool,
) -> RfcResult<Property> {
    if date_only {
        return Ok(Property::new(name, local.format(DATE_FORMAT).to_string())
            .with_param(Parameter::value_type("DATE")));
    }
    match time_zone {
        Some(tz) if is_utc_zone(tz) => Ok(Property::new(
            name,
            local.format(UTC_DATETIME_FORMAT).to_string(),
        )),
        Some(tz) => {
            resolve_time_zone(tz)?;
            Ok(Property::new(name, local.format(DATETIME_FORMAT).to_string())
                .with_param(Parameter::tzid(tz)))
        }
        None => Ok(Property::new(
            name,
            local.format(DATETIME_FORMAT).to_string(),
        )),
    }
}

/// Formats a UTC value in the `Z` form.
pub(super) fn format_utc(value: &NaiveDateTime) -> String {
    value.format(UTC_DATETIME_FORMAT).to_string()
}

/// Parses a value in the `Z` form.
pub(super) fn parse_utc(value: &str) -> Option<NaiveDateTime> {
    match parse_date_or_datetime(value)? {
        (local, true, false) => Some(local),
        _ => None,
    }
}

/// Converts wall-clock time in `time_zone` to UTC. Floating values are taken
/// as UTC.
///
/// An ambiguous time resolves to its first occurrence. A time skipped by a
/// transition uses the UTC offset in effect before the gap (RFC 5545 §3.3.5).
///
/// ## Errors
/// Returns an error for an unknown zone or a value at the edge of chrono's
/// range.
pub(super) fn to_utc(local: NaiveDateTime, time_zone: Option<&str>) -> RfcResult<NaiveDateTime> {
    let Some(tz) = time_zone.filter(|tz| !is_utc_zone(tz)) else {
        return Ok(local);
    };
    let zone = resolve_time_zone(tz)?;
    if let Some(zoned) = zone.from_local_datetime(&local).earliest() {
        return Ok(zoned.naive_utc());
    }

    let out_of_range = || RfcError::MappingError(format!("{local} is out of range in {tz}"));
    let before_gap = TimeDelta::try_days(1)
        .and_then(|day| local.checked_sub_signed(day))
        .and_then(|earlier| zone.from_local_datetime(&earlier).earliest())
        .ok_or_else(out_of_range)?;
    let offset = TimeDelta::try_seconds(i64::from(before_gap.offset().fix().local_minus_utc()))
        .ok_or_else(out_of_range)?;
    tracing::debug!(%local, tz, "Local time falls in a gap, using the offset before it");
    local.checked_sub_signed(offset).ok_or_else(out_of_range)
}

/// Converts UTC to wall-clock time in `time_zone`. Floating targets keep the
/// UTC value.
///
/// ## Errors
/// Returns an error for an unknown zone.
pub(super) fn from_utc(utc: NaiveDateTime, time_zone: Option<&str>) -> RfcResult<NaiveDateTime> {
    match time_zone {
        Some(tz) if !is_utc_zone(tz) => Ok(resolve_time_zone(tz)?
            .from_utc_datetime(&utc)
            .naive_local()),
        _ => Ok(utc),
    }
}

/// Formats a duration in the RFC 5545 grammar.
///
/// RFC 5545 has no year or month designators and does not combine weeks
/// with other components. Returns `None` for durations with years or
/// months; weeks are folded into days unless they stand alone.
pub(super) fn format_duration(duration: &Duration, signed: bool) -> Option<String> {
    if duration.years > 0 || duration.months > 0 {
        return None;
    }
    let weeks_only = duration.weeks > 0
        && duration.days == 0
        && duration.hours == 0
        && duration.minutes == 0
        && duration.seconds == 0;
    if weeks_only {
        return Some(duration.format(signed));
    }
    let folded = Duration {
        weeks: 0,
        days: u32::try_from(duration.calendar_days()).ok()?,
        ..*duration
    };
    Some(folded.format(signed))
}

/// Reads a DURATION value, accepting an explicit `+` sign.
///
/// ## Errors
/// Returns a parse error for malformed text.
pub(super) fn read_duration(value: &str) -> RfcResult<Duration> {
    Ok(parse_duration(value.strip_prefix('+').unwrap_or(value))?)
}

/// Reads a DURATION value that must not be negative.
///
/// ## Errors
/// Returns a parse error for malformed text or
/// `ModelError::NegativeDuration` naming `field`.
pub(super) fn read_non_negative_duration(value: &str, field: &'static str) -> RfcResult<Duration> {
    non_negative_duration(value.strip_prefix('+').unwrap_or(value), field)
}

/// Returns the fixed-unit duration from `start` to `end`, or `None` if `end`
/// is earlier.
pub(super) fn duration_between(start: NaiveDateTime, end: NaiveDateTime) -> Option<Duration> {
    let delta = end.signed_duration_since(start);
    if delta < TimeDelta::zero() {
        return None;
    }
    let days = delta.num_days();
    let rest = delta - TimeDelta::try_days(days)?;
    let seconds = rest.num_seconds();
    Some(Duration {
        days: u32::try_from(days).ok()?,
        hours: u32::try_from(seconds / 3600).ok()?,
        minutes: u32::try_from(seconds % 3600 / 60).ok()?,
        seconds: u32::try_from(seconds % 60).ok()?,
        ..Duration::zero()
    })
}

#[cfg(test)]
#[path = "datetime_tests.rs"]
mod tests;
