//! Closed date windows for range queries.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::date::{format_date, parse_date, today};
use crate::error::{ChoreCalError, ChoreCalResult};

/// Days of padding the month view shows on each side of the month.
pub const WINDOW_PADDING_DAYS: u64 = 7;

/// Default length of a `list` window when no end date is given.
pub const DEFAULT_LIST_DAYS: u64 = 7;

/// Closed interval `[start, end]` of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Window the month view queries: the 1st of the month minus a week,
    /// through the 7th of the following month.
    pub fn visible_window(year: i32, month: u32) -> ChoreCalResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ChoreCalError::InvalidDate(format!("{year:04}-{month:02}")))?;

        let out_of_range = || ChoreCalError::InvalidDate(format!("{year:04}-{month:02}"));

        let start = first
            .checked_sub_days(Days::new(WINDOW_PADDING_DAYS))
            .ok_or_else(out_of_range)?;
        let end = first
            .checked_add_months(Months::new(1))
            .and_then(|d| d.with_day(7))
            .ok_or_else(out_of_range)?;

        Ok(DateRange { start, end })
    }

    /// Build a range from optional `YYYY-MM-DD` arguments.
    /// - `from` defaults to today
    /// - `to` defaults to DEFAULT_LIST_DAYS after `from`
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> ChoreCalResult<Self> {
        let start = match from {
            Some(s) => parse_date(s)?,
            None => today(),
        };

        let end = match to {
            Some(s) => parse_date(s)?,
            None => start
                .checked_add_days(Days::new(DEFAULT_LIST_DAYS))
                .ok_or_else(|| ChoreCalError::InvalidDate(format_date(start)))?,
        };

        Ok(DateRange { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// A range whose start lies after its end contains no days.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}
