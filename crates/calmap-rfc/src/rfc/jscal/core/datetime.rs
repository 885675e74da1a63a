//! `LocalDateTime` and `UTCDateTime` text forms (RFC 8984 §1.4.3, §1.4.4).

use chrono::{DateTime, NaiveDateTime, Utc};

/// Wall-clock date-time without offset, e.g. `2020-01-15T13:00:00`.
const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// UTC date-time, e.g. `2020-01-15T13:00:00Z`.
const UTC_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Formats a wall-clock date-time. Fractional seconds are not written.
#[must_use]
pub fn format_local_datetime(value: &NaiveDateTime) -> String {
    value.format(LOCAL_DATETIME_FORMAT).to_string()
}

/// Formats a UTC date-time with the `Z` suffix. Fractional seconds are not written.
#[must_use]
pub fn format_utc_datetime(value: &DateTime<Utc>) -> String {
    value.format(UTC_DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn local_format_has_no_suffix() {
        let dt = NaiveDate::from_ymd_opt(2020, 1, 15)
            .and_then(|d| d.and_hms_milli_opt(13, 0, 0, 500))
            .unwrap();
        assert_eq!(format_local_datetime(&dt), "2020-01-15T13:00:00");
    }

    #[test]
    fn utc_format_has_z() {
        let dt = NaiveDate::from_ymd_opt(2020, 1, 15)
            .and_then(|d| d.and_hms_opt(13, 0, 0))
            .unwrap()
            .and_utc();
        assert_eq!(format_utc_datetime(&dt), "2020-01-15T13:00:00Z");
    }
}
