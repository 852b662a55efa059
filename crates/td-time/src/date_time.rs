//! Local date-time parsing and formatting.
//!
//! Values are naive local date-times; no time-zone conversion takes place.
//! Accepted inputs:
//!
//! * `yyyy-MM-dd` (takes the caller's default time of day)
//! * `yyyy-MM-ddTHH:mm`
//! * `yyyy-MM-ddTHH:mm:ss[.fff]`
//!
//! A trailing `Z` or `±hh:mm` offset is dropped. Output is always
//! [`DATE_TIME_FORMAT`].

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use td_core::errors::{Error, Result};

/// Output format, `yyyy-MM-ddTHH:mm`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date or date-time fact value.
///
/// `field` names the fact in errors; `default_time` is used for date-only
/// values.
pub fn parse_date_time(field: &str, value: &str, default_time: NaiveTime) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    let (date_part, time_part) = match trimmed.split_once(['T', ' ']) {
        Some((d, t)) => (d, Some(t)),
        None => (trimmed, None),
    };
    let date = NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|e| Error::parse(field, value, format!("invalid date: {e}")))?;
    let time = match time_part {
        Some(t) => parse_time(field, strip_offset(t))?,
        None => default_time,
    };
    Ok(date.and_time(time))
}

/// Parse a time-of-day fact value, `HH:mm` or `HH:mm:ss[.fff]`.
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f"))
        .map_err(|e| Error::parse(field, value, format!("invalid time: {e}")))
}

/// Format as `yyyy-MM-ddTHH:mm`.
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

/// Keep the date of `base` and replace its time with `time`, if given.
pub fn merge_time(base: NaiveDateTime, time: Option<NaiveTime>) -> NaiveDateTime {
    match time {
        Some(t) => base.date().and_time(t),
        None => base,
    }
}

/// Shift `date` by a signed number of calendar days.
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| Error::Calendar(format!("{date} shifted by {days} days is out of range")))
}

fn strip_offset(time: &str) -> &str {
    let time = time.strip_suffix(['Z', 'z']).unwrap_or(time);
    match time.find(['+', '-']) {
        Some(i) => &time[..i],
        None => time,
    }
}
