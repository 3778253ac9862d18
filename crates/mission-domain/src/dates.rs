//! Calendar helpers shared by the calendar and Gantt views.
//!
//! Weeks start on Sunday. All dates are UTC calendar dates.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};

/// Sunday on or before `date`. `None` near the start of the calendar range.
pub fn start_of_week(date: NaiveDate) -> Option<NaiveDate> {
    let back = Duration::days(date.weekday().num_days_from_sunday() as i64);
    date.checked_sub_signed(back)
}

pub fn end_of_week(date: NaiveDate) -> Option<NaiveDate> {
    start_of_week(date)?.checked_add_signed(Duration::days(6))
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn end_of_month(date: NaiveDate) -> Option<NaiveDate> {
    start_of_month(date)
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// `date` moved by `days`, `None` past the calendar range.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// `start` moved by `days` whole days, `None` past the calendar range.
pub fn add_days_utc(start: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    start.checked_add_signed(Duration::try_days(days)?)
}

pub fn start_of_quarter(date: NaiveDate) -> Option<NaiveDate> {
    let first_month = (date.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), first_month, 1)
}

pub fn end_of_quarter(date: NaiveDate) -> Option<NaiveDate> {
    let next = start_of_quarter(date)?.checked_add_months(Months::new(3))?;
    next.pred_opt()
}

pub fn start_of_year(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 1, 1)
}

pub fn end_of_year(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 12, 31)
}

/// Whole days from `from` to `to`, negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Every date from `start` to `end`, both included.
pub fn each_day(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
