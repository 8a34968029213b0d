//! Timestamp parsing.
//!
//! Form inputs deliver timestamps in a handful of shapes depending on the
//! widget: full RFC 3339 instants, `datetime-local` values without an
//! offset, bare dates, and bare times. The parser tries the accepted
//! layouts in fixed priority order and returns the first success.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Parses `raw` against the accepted timestamp layouts.
///
/// Layouts, in priority order:
///
/// 1. RFC 3339 with an explicit offset or `Z` (`2006-01-02T15:04:05Z`).
/// 2. Date and minute without offset (`2006-01-02T15:04`), read as UTC.
/// 3. Date only (`2006-01-02`), producing midnight UTC.
/// 4. Time only (`15:04`), anchored to the Unix epoch date. The anchor is
///    deliberately fixed rather than "today" so stored values compare
///    deterministically.
///
/// The empty string is the caller's concern; here it fails like any other
/// unmatched input.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use trellis_bind::parse_timestamp;
///
/// let parsed = parse_timestamp("2006-01-02").unwrap();
/// assert_eq!(parsed, Utc.with_ymd_and_hms(2006, 1, 2, 0, 0, 0).unwrap());
///
/// assert!(parse_timestamp("not a time").is_err());
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, crate::BindError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Ok(minute) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(Utc.from_utc_datetime(&minute));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    if let Ok(time) = NaiveTime::parse_from_str(raw, "%H:%M") {
        let date = DateTime::<Utc>::UNIX_EPOCH.date_naive();
        return Ok(Utc.from_utc_datetime(&date.and_time(time)));
    }

    Err(crate::BindError::InvalidTimestamp {
        value: raw.to_string(),
    })
}
