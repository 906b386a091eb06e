//! Closed date windows.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// Returns midnight UTC at the start of `date`.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    NaiveDateTime::from(date).and_utc()
}

/// Returns the last representable instant of `date` (23:59:59.999999999 UTC).
#[must_use]
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .map_or_else(|| start_of_day(date), |last| last.and_utc())
}

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the last day of the month containing `date`.
#[must_use]
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Returns the first day of the calendar quarter containing `date`.
#[must_use]
pub fn first_day_of_quarter(date: NaiveDate) -> NaiveDate {
    let first = first_day_of_month(date);
    first.with_month0(date.month0() / 3 * 3).unwrap_or(first)
}

/// Returns January 1 of the year containing `date`.
#[must_use]
pub fn first_day_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

/// Returns the Monday on or before `date`, or the earliest representable date
/// when that Monday does not exist.
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(NaiveDate::MIN)
}

/// A closed `[start, end]` time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant included in the window.
    pub start: DateTime<Utc>,
    /// Last instant included in the window.
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a window, rejecting `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window spanning whole days, from the start of `start` to the end of `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        Self::new(start_of_day(start), end_of_day(end))
    }

    /// A single calendar day.
    #[must_use]
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: start_of_day(date),
            end: end_of_day(date),
        }
    }

    /// A calendar month.
    pub fn month(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::OutOfRange)?;
        Self::spanning_months(first, 1)
    }

    /// A calendar quarter: Q1 starts in January, Q2 in April, Q3 in July, Q4 in October.
    pub fn quarter(year: i32, quarter: u32) -> Result<Self, PeriodError> {
        if !(1..=4).contains(&quarter) {
            return Err(PeriodError::InvalidQuarter(quarter));
        }
        let first_month = (quarter - 1) * 3 + 1;
        let first = NaiveDate::from_ymd_opt(year, first_month, 1).ok_or(PeriodError::OutOfRange)?;
        Self::spanning_months(first, 3)
    }

    /// A calendar year, January 1 to December 31.
    pub fn year(year: i32) -> Result<Self, PeriodError> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(PeriodError::OutOfRange)?;
        Self::spanning_months(first, 12)
    }

    fn spanning_months(first: NaiveDate, months: u32) -> Result<Self, PeriodError> {
        let last = first
            .checked_add_months(Months::new(months - 1))
            .map(last_day_of_month)
            .ok_or(PeriodError::OutOfRange)?;
        Ok(Self {
            start: start_of_day(first),
            end: end_of_day(last),
        })
    }

    /// Calendar date of the first instant.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Calendar date of the last instant.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// Returns true if `instant` falls inside the window (both ends inclusive).
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Returns true if the two windows share at least one instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns the shared part of two windows, if any.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Self { start, end })
    }

    /// The window of equal length that ends immediately before this one.
    ///
    /// Returns `None` when that window would start before the earliest
    /// representable instant.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        let span = self.end.signed_duration_since(self.start);
        let end = self.start.checked_sub_signed(TimeDelta::nanoseconds(1))?;
        let start = end.checked_sub_signed(span)?;
        Some(Self { start, end })
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start_date(), self.end_date())
    }
}
