//! Calendar-day helpers used by the pay-cycle and savings projections.
//!
//! Every projection works at calendar-day granularity in UTC: timestamps are
//! reduced to their UTC civil date on the way in, and computed paydays are
//! emitted as UTC midnight on the way out. Stepping past the end of jiff's
//! calendar (9999-12-31) is an error, never a wraparound.

use jiff::civil::{Date, Weekday};
use jiff::tz::TimeZone;
use jiff::{Span, Timestamp, Unit};

/// Number of days from `d1` to `d2` (positive when `d2 > d1`).
#[inline]
pub fn days_between(d1: Date, d2: Date) -> Result<i32, jiff::Error> {
    Ok(d1.until((Unit::Day, d2))?.get_days())
}

/// Add `n` days to a date.
#[inline]
pub fn add_days(d: Date, n: i32) -> Result<Date, jiff::Error> {
    d.checked_add(Span::new().try_days(n)?)
}

/// Add `n` calendar months, clamping the day to the target month's length
/// (Jan 31 + 1 month = Feb 28/29).
#[inline]
pub fn add_months(d: Date, n: i32) -> Result<Date, jiff::Error> {
    d.checked_add(Span::new().try_months(n)?)
}

/// First day of the month containing `d`.
#[inline]
pub fn month_begin(d: Date) -> Date {
    d.first_of_month()
}

/// First day of the month following the one containing `d`.
#[inline]
pub fn next_month_begin(d: Date) -> Result<Date, jiff::Error> {
    add_months(d.first_of_month(), 1)
}

/// Count of Monday-Friday days in the month containing `d`.
pub fn weekdays_in_month(d: Date) -> u32 {
    let first = month_begin(d).weekday().to_monday_zero_offset() as i32;
    let len = d.days_in_month() as i32;
    (0..len).filter(|k| (first + k) % 7 < 5).count() as u32
}

/// Days to move forward from `from` to reach the next `target` weekday (0..=6).
#[inline]
pub fn days_until_weekday(from: Weekday, target: Weekday) -> i32 {
    (target.to_monday_zero_offset() as i32 - from.to_monday_zero_offset() as i32).rem_euclid(7)
}

/// Calendar date of an instant in UTC.
#[inline]
pub fn utc_date(ts: Timestamp) -> Date {
    ts.to_zoned(TimeZone::UTC).date()
}

/// Start of the given calendar date in UTC.
pub fn utc_midnight(d: Date) -> Result<Timestamp, jiff::Error> {
    Ok(d.to_zoned(TimeZone::UTC)?.timestamp())
}
