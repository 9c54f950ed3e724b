//! Calendar arithmetic for month boundaries and half-open query windows.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// Truncates the day-of-month to 1.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// First day of the month after `date`, rolling December into January of the
/// following year.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifies one calendar month; orders chronologically.
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First calendar day of this month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// The following month, rolling over year boundaries.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Half-open date interval `[start, stop)` scoping a query.
pub struct CalendarWindow {
    pub start: NaiveDate,
    pub stop: NaiveDate,
}

impl CalendarWindow {
    /// Day-granularity window. An empty window (`start == stop`) is legal.
    pub fn new(start: NaiveDate, stop: NaiveDate) -> Result<Self> {
        if start > stop {
            return Err(LedgerError::InvalidWindow { start, stop });
        }
        Ok(Self { start, stop })
    }

    /// Month-granularity window: both endpoints are normalized to the first
    /// day of their month before validation.
    pub fn months(start: NaiveDate, stop: NaiveDate) -> Result<Self> {
        Self::new(first_of_month(start), first_of_month(stop))
    }

    /// The one-month window `[first_of_month, first_of_next_month)`.
    pub fn single_month(month: NaiveDate) -> Self {
        Self {
            start: first_of_month(month),
            stop: first_of_next_month(month),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.stop
    }

    /// Every calendar month overlapping the window, ascending. Months with
    /// no matching transactions are included; averaging uses this as its
    /// denominator set.
    pub fn month_span(&self) -> Vec<MonthKey> {
        let mut months = Vec::new();
        if self.start == self.stop {
            return months;
        }
        let mut key = MonthKey::from_date(self.start);
        while key.first_day() < self.stop {
            months.push(key);
            key = key.next();
        }
        months
    }
}

impl fmt::Display for CalendarWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}
