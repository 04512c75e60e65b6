//! Calendar-day helpers.
//!
//! All dates are plain calendar days (`NaiveDate`); nothing here knows about
//! time zones beyond asking the local clock what today is.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::error::{ChoreCalError, ChoreCalResult};

/// Number of cells in a month grid: six weeks of seven days.
pub const GRID_DAYS: usize = 42;

const DATE_FORMAT: &str = "%Y-%m-%d";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string. Inverse of [`format_date`].
pub fn parse_date(s: &str) -> ChoreCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ChoreCalError::InvalidDate(s.to_string()))
}

/// The 42 days shown in a month grid for `month` (1-based) of `year`.
///
/// The grid starts on the Sunday on or before the 1st and runs for six full
/// weeks, so it includes trailing days of the previous month and leading days
/// of the next one.
pub fn month_days(year: i32, month: u32) -> ChoreCalResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ChoreCalError::InvalidDate(format!("{year:04}-{month:02}")))?;

    let lead = u64::from(first.weekday().num_days_from_sunday());
    let Some(grid_start) = first.checked_sub_days(Days::new(lead)) else {
        return Err(ChoreCalError::InvalidDate(format!("{year:04}-{month:02}")));
    };

    Ok(grid_start.iter_days().take(GRID_DAYS).collect())
}

pub fn is_same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}

/// English name of a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}
