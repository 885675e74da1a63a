//! RRULE values (RFC 5545 §3.3.10, RFC 7529).
//!
//! Keys are written upper-case in a fixed order and matched
//! case-insensitively on input. Values are lower-cased into the model by its
//! setters. `UNTIL` is written in the `Z` form when the owning object has a
//! time zone and floating otherwise.

use calmap_core::constants::DEFAULT_RSCALE;
use calmap_core::util::validate::{validate_positive, validate_unsigned};
use chrono::{NaiveDateTime, NaiveTime};

use super::datetime::{format_utc, from_utc, parse_utc, to_utc};
use crate::error::{RfcError, RfcResult};
use crate::rfc::jscal::core::{ModelError, NDay, RecurrenceRule, Weekday};

const FLOATING_FORMAT: &str = "%Y%m%dT%H%M%S";
const DATE_FORMAT: &str = "%Y%m%d";

fn invalid(key: &str, value: &str, reason: impl std::fmt::Display) -> RfcError {
    RfcError::MappingError(format!("invalid RRULE {key} value {value:?}: {reason}"))
}

/// Encodes a rule as an RRULE value.
///
/// ## Errors
/// Returns an error if the rule has no frequency or its `until` cannot be
/// placed in `time_zone`.
pub fn rule_to_rrule(rule: &RecurrenceRule, time_zone: Option<&str>) -> RfcResult<String> {
    let frequency = rule
        .frequency()
        .ok_or(ModelError::MissingProperty("frequency"))?;

    let mut parts = vec![format!("FREQ={}", frequency.to_ical())];
    if let Some(interval) = rule.interval() {
        parts.push(format!("INTERVAL={interval}"));
    }
    // RFC 7529 only allows leap months alongside RSCALE.
    let leap_month = rule.by_month().iter().any(|month| month.ends_with('L'));
    let rscale = match rule.rscale() {
        Some(rscale) => Some(rscale.to_ical()),
        None if leap_month => {
            tracing::debug!("Writing RSCALE for a leap month without a calendar scale");
            Some(DEFAULT_RSCALE.to_ascii_uppercase())
        }
        None => None,
    };
    if let Some(rscale) = rscale {
        parts.push(format!("RSCALE={rscale}"));
        if let Some(skip) = rule.skip() {
            parts.push(format!("SKIP={}", skip.to_ical()));
        }
    } else if rule.is_skip_set() {
        tracing::warn!("Dropping SKIP from a rule without RSCALE");
    }
    if let Some(day) = rule.first_day_of_week() {
        parts.push(format!("WKST={}", day.to_ical()));
    }

    push_list(&mut parts, "BYDAY", rule.by_day().iter().map(nday_to_ical));
    push_list(&mut parts, "BYMONTH", rule.by_month().iter().cloned());
    for (key, values) in [
        ("BYMONTHDAY", rule.by_month_day()),
        ("BYYEARDAY", rule.by_year_day()),
        ("BYWEEKNO", rule.by_week_no()),
        ("BYHOUR", rule.by_hour()),
        ("BYMINUTE", rule.by_minute()),
        ("BYSECOND", rule.by_second()),
        ("BYSETPOS", rule.by_set_position()),
    ] {
        push_list(&mut parts, key, values.iter().map(i32::to_string));
    }

    if let Some(count) = rule.count() {
        parts.push(format!("COUNT={count}"));
    }
    if let Some(until) = rule.until() {
        let text = match time_zone {
            Some(_) => format_utc(&to_utc(until, time_zone)?),
            None => until.format(FLOATING_FORMAT).to_string(),
        };
        parts.push(format!("UNTIL={text}"));
    }

    Ok(parts.join(";"))
}

fn push_list(parts: &mut Vec<String>, key: &str, values: impl Iterator<Item = String>) {
    let values: Vec<String> = values.collect();
    if !values.is_empty() {
        parts.push(format!("{key}={}", values.join(",")));
    }
}

fn nday_to_ical(nday: &NDay) -> String {
    match nday.nth_of_period() {
        Some(nth) => format!("{nth}{}", nday.day().to_ical()),
        None => nday.day().to_ical(),
    }
}

/// Decodes an RRULE value into a rule.
///
/// Unknown parts are skipped with a warning. A `Z`-form `UNTIL` is converted
/// to wall-clock time in `time_zone`; a DATE `UNTIL` reads as the start of
/// that day.
///
/// ## Errors
/// Returns an error for a missing `FREQ`, malformed parts, or values the
/// model rejects.
pub fn rrule_to_rule(value: &str, time_zone: Option<&str>) -> RfcResult<RecurrenceRule> {
    let mut rule = RecurrenceRule::new();

    for part in value.split(';').filter(|p| !p.is_empty()) {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| invalid(part, "", "expected KEY=VALUE"))?;
        let key = key.to_ascii_uppercase();
        tracing::trace!(%key, %value, "RRULE part");

        match key.as_str() {
            "FREQ" => rule.set_frequency(value),
            "INTERVAL" => {
                rule.set_interval(validate_positive("INTERVAL", parse_int(&key, value)?)?)?;
            }
            "RSCALE" => rule.set_rscale(value),
            "SKIP" => rule.set_skip(value),
            "WKST" => rule.set_first_day_of_week(value),
            "BYDAY" => {
                for item in value.split(',') {
                    rule.add_by_day(parse_nday(item)?);
                }
            }
            "BYMONTH" => {
                for month in value.split(',') {
                    rule.add_by_month(month)?;
                }
            }
            "BYMONTHDAY" => rule.set_by_month_day(parse_int_list(&key, value)?),
            "BYYEARDAY" => rule.set_by_year_day(parse_int_list(&key, value)?),
            "BYWEEKNO" => rule.set_by_week_no(parse_int_list(&key, value)?),
            "BYHOUR" => rule.set_by_hour(parse_int_list(&key, value)?),
            "BYMINUTE" => rule.set_by_minute(parse_int_list(&key, value)?),
            "BYSECOND" => rule.set_by_second(parse_int_list(&key, value)?),
            "BYSETPOS" => rule.set_by_set_position(parse_int_list(&key, value)?),
            "COUNT" => rule.set_count(validate_unsigned("COUNT", parse_int(&key, value)?)?),
            "UNTIL" => rule.set_until(parse_until(value, time_zone)?),
            _ => tracing::warn!(part, "Ignoring unknown RRULE part"),
        }
    }

    if !rule.is_frequency_set() {
        return Err(ModelError::MissingProperty("frequency").into());
    }
    Ok(rule)
}

fn parse_int(key: &str, value: &str) -> RfcResult<i64> {
    value.trim().parse().map_err(|e| invalid(key, value, e))
}

fn parse_int_list(key: &str, value: &str) -> RfcResult<Vec<i32>> {
    value
        .split(',')
        .map(|item| item.trim().parse().map_err(|e| invalid(key, value, e)))
        .collect()
}

/// Parses a BYDAY entry such as `MO`, `2TU` or `-1FR`.
fn parse_nday(item: &str) -> RfcResult<NDay> {
    let item = item.trim();
    let split = item
        .len()
        .checked_sub(2)
        .filter(|&i| item.is_char_boundary(i))
        .ok_or_else(|| invalid("BYDAY", item, "too short"))?;
    let (ordinal, day) = item.split_at(split);
    if Weekday::parse(day).is_none() {
        return Err(invalid("BYDAY", item, "unknown day"));
    }

    let mut nday = NDay::new(day);
    if !ordinal.is_empty() {
        let nth: i32 = ordinal.parse().map_err(|e| invalid("BYDAY", item, e))?;
        nday.set_nth_of_period(nth);
    }
    Ok(nday)
}

fn parse_until(value: &str, time_zone: Option<&str>) -> RfcResult<NaiveDateTime> {
    if let Some(utc) = parse_utc(value) {
        return from_utc(utc, time_zone);
    }
    if value.len() == 8 {
        return chrono::NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(|date| date.and_time(NaiveTime::MIN))
            .map_err(|e| invalid("UNTIL", value, e));
    }
    NaiveDateTime::parse_from_str(value, FLOATING_FORMAT).map_err(|e| invalid("UNTIL", value, e))
}

#[cfg(test)]
#[path = "rrule_tests.rs"]
mod tests;
