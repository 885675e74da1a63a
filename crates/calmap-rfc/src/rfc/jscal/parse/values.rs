//! Value parsers for JSCalendar (RFC 8984 §1.4).

use chrono::{DateTime, NaiveDateTime, Utc};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::jscal::core::{Duration, truncate_subsec};

/// Input format for local date-times; the fraction is optional.
const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const DATE_DESIGNATORS: [char; 4] = ['Y', 'M', 'W', 'D'];
const TIME_DESIGNATORS: [char; 3] = ['H', 'M', 'S'];

/// Parses an ISO 8601 duration (RFC 8984 §1.4.6, §1.4.7).
///
/// Format: `[-]P[nY][nM][nW][nD][T[nH][nM][nS]]`, at least one component,
/// designators in that order. The seconds may carry a fraction, which is kept
/// in [`Duration::microseconds`] (truncated to six digits).
///
/// ## Errors
/// Returns an error if the text does not follow the grammar or a component
/// does not fit in 32 bits.
pub fn parse_duration(s: &str) -> ParseResult<Duration> {
    let invalid = |context: &str| {
        ParseError::new(ParseErrorKind::InvalidDuration, s).with_context(context.to_string())
    };

    let mut dur = Duration::zero();
    let mut rest = s;
    if let Some(stripped) = rest.strip_prefix('-') {
        dur.negative = true;
        rest = stripped;
    }
    let rest = rest
        .strip_prefix('P')
        .ok_or_else(|| invalid("expected 'P'"))?;

    let (date_part, time_part) = match rest.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };
    if date_part.is_empty() && time_part.is_none_or(str::is_empty) {
        return Err(invalid("no components"));
    }

    let date_components = split_components(date_part, &DATE_DESIGNATORS)
        .ok_or_else(|| invalid("malformed date part"))?;
    for (designator, number) in date_components {
        let value = parse_component(number).ok_or_else(|| invalid("bad date component"))?;
        match designator {
            'Y' => dur.years = value,
            'M' => dur.months = value,
            'W' => dur.weeks = value,
            _ => dur.days = value,
        }
    }

    if let Some(time_part) = time_part {
        if time_part.is_empty() {
            return Err(invalid("empty time part"));
        }
        let time_components = split_components(time_part, &TIME_DESIGNATORS)
            .ok_or_else(|| invalid("malformed time part"))?;
        for (designator, number) in time_components {
            match designator {
                'H' => dur.hours = parse_component(number).ok_or_else(|| invalid("bad hours"))?,
                'M' => {
                    dur.minutes = parse_component(number).ok_or_else(|| invalid("bad minutes"))?;
                }
                _ => {
                    let (seconds, micros) =
                        parse_seconds(number).ok_or_else(|| invalid("bad seconds"))?;
                    dur.seconds = seconds;
                    dur.microseconds = micros;
                }
            }
        }
    }

    // `-P0D` and `P0D` are the same value.
    if dur.is_zero() {
        dur.negative = false;
    }
    Ok(dur)
}

/// Splits `part` into `(designator, number)` pairs, requiring every
/// designator to come from `order` and appear after the previous one.
fn split_components<'a>(part: &'a str, order: &[char]) -> Option<Vec<(char, &'a str)>> {
    let mut components = Vec::new();
    let mut next = 0;
    let mut rest = part;

    while !rest.is_empty() {
        let end = rest.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
        let (number, tail) = rest.split_at(end);
        if number.is_empty() {
            return None;
        }
        let mut tail_chars = tail.chars();
        let designator = tail_chars.next()?;
        let position = next + order.get(next..)?.iter().position(|&d| d == designator)?;

        components.push((designator, number));
        next = position + 1;
        rest = tail_chars.as_str();
    }

    Some(components)
}

fn parse_component(number: &str) -> Option<u32> {
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

/// Parses `n[.fff]` seconds into whole seconds and microseconds.
fn parse_seconds(number: &str) -> Option<(u32, u32)> {
    let Some((whole, fraction)) = number.split_once('.') else {
        return Some((parse_component(number)?, 0));
    };
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let micros = fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(6)
        .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'));
    Some((parse_component(whole)?, micros))
}

/// Parses a `LocalDateTime` (RFC 8984 §1.4.4).
///
/// Format: `YYYY-MM-DDTHH:MM:SS[.fff]`. Fractional seconds are accepted and
/// dropped. A trailing `Z` is rejected.
///
/// ## Errors
/// Returns an error if the text is not a valid local date-time.
pub fn parse_local_datetime(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, LOCAL_INPUT_FORMAT)
        .map(truncate_subsec)
        .map_err(|e| {
            ParseError::new(ParseErrorKind::InvalidLocalDateTime, s).with_context(e.to_string())
        })
}

/// Parses a `UTCDateTime` (RFC 8984 §1.4.3).
///
/// Format: `YYYY-MM-DDTHH:MM:SS[.fff]Z`. Fractional seconds are dropped.
///
/// ## Errors
/// Returns an error if the text is not a valid UTC date-time.
pub fn parse_utc_datetime(s: &str) -> ParseResult<DateTime<Utc>> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidUtcDateTime, s);
    let local = s
        .strip_suffix('Z')
        .ok_or_else(|| invalid().with_context("expected 'Z' suffix"))?;
    NaiveDateTime::parse_from_str(local, LOCAL_INPUT_FORMAT)
        .map(|value| truncate_subsec(value).and_utc())
        .map_err(|e| invalid().with_context(e.to_string()))
}

#[cfg(test)]
#[path = "values_tests.rs"]
mod tests;
