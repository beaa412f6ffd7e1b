//! Calendar-day arithmetic
//!
//! All day-level math works on `chrono::NaiveDate`. Timestamped values
//! are reduced to their local calendar day exactly once, at the boundary
//! (`local_calendar_date`); after that, day equality is plain `NaiveDate`
//! equality and no call site needs to strip time-of-day again.
//!
//! Weekday convention is Monday-first everywhere: index 0 = Monday,
//! 6 = Sunday.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone};

use super::{AppError, AppResult};

/// Calendar day of a timestamped value, in the value's own timezone.
///
/// Never derive the day from a UTC serialization: for an instant shortly
/// after local midnight west of UTC, the UTC day is already tomorrow.
pub fn local_calendar_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> NaiveDate {
    dt.date_naive()
}

/// Whether two timestamped values fall on the same local calendar day
pub fn is_same_day<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Whether `date` is the current day. `today` is injected by the caller
/// so the engine never reads the system clock.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Format a calendar day for storage (YYYY-MM-DD).
///
/// Built from date components, so it cannot shift by a day the way a
/// UTC-based ISO serialization of a local midnight can.
pub fn format_storage_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse a stored calendar day (YYYY-MM-DD)
pub fn parse_storage_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::invalid_date(s))
}

/// Parse a zero-padded HH:MM time-of-day string
pub fn parse_time_hm(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| AppError::invalid_time(s))
}

/// Monday-first weekday index (0 = Monday, 6 = Sunday)
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Monday-first weekday index of the 1st of the month containing `date`
pub fn first_weekday_of_month(date: NaiveDate) -> u32 {
    weekday_index(start_of_month(date))
}

/// Monday of the week containing `date`
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(weekday_index(date) as i64)
}

/// Sunday of the week containing `date`
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

/// First day of the month containing `date`
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date)).unwrap_or(date)
}

/// Same day one month later, clamped to the target month's length
/// (Jan 31 -> Feb 28/29)
pub fn next_month(date: NaiveDate) -> NaiveDate {
    shift_months(date, 1)
}

/// Same day one month earlier, clamped to the target month's length
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    shift_months(date, -1)
}

fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return date,
    };
    let day = date.day().min(days_in_month(first));
    first.with_day(day).unwrap_or(first)
}
