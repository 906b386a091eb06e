//! Monthly and weekly trend series.
//!
//! A window is split into calendar months (or ISO weeks) starting from the
//! month (or week) containing its start. The first and last sub-periods are
//! clamped to the window, so no transaction outside it is ever counted.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use finlens_shared::types::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::metrics::PeriodTotals;
use crate::error::QueryError;
use crate::period::{DateRange, end_of_day, first_day_of_month, start_of_day, start_of_week};
use crate::transaction::{TransactionFilter, TransactionQuery};

/// Sub-period size of a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendGranularity {
    /// ISO weeks starting Monday.
    Weekly,
    /// Calendar months.
    Monthly,
}

impl TrendGranularity {
    /// `weekly`/`week` select weekly; anything else is monthly.
    #[must_use]
    pub fn from_period_label(period: &str) -> Self {
        match period.trim().to_ascii_lowercase().as_str() {
            "weekly" | "week" => Self::Weekly,
            _ => Self::Monthly,
        }
    }
}

/// Totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// `YYYY-MM` label.
    pub month: String,
    /// Clamped sub-period start.
    pub period_start: DateTime<Utc>,
    /// Clamped sub-period end.
    pub period_end: DateTime<Utc>,
    /// Income in the month.
    pub income: Decimal,
    /// Expenses in the month.
    pub expenses: Decimal,
    /// Income minus expenses.
    pub net_income: Decimal,
    /// Savings rate of the month.
    pub savings_rate: Decimal,
}

/// Totals for one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    /// ISO `YYYY-Www` label.
    pub week: String,
    /// Clamped sub-period start.
    pub period_start: DateTime<Utc>,
    /// Clamped sub-period end.
    pub period_end: DateTime<Utc>,
    /// Income in the week.
    pub income: Decimal,
    /// Expenses in the week.
    pub expenses: Decimal,
    /// Income minus expenses.
    pub net_income: Decimal,
    /// Transactions in the week.
    pub transaction_count: u64,
}

/// A trend series of either granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "granularity", content = "entries", rename_all = "snake_case")]
pub enum TrendSeries {
    /// Weekly entries.
    Weekly(Vec<WeeklyTrend>),
    /// Monthly entries.
    Monthly(Vec<MonthlyTrend>),
}

impl TrendSeries {
    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Weekly(entries) => entries.len(),
            Self::Monthly(entries) => entries.len(),
        }
    }

    /// Returns true when the series has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `range` into calendar months, each clamped to `range`.
///
/// Returns the first day of each month alongside its clamped window.
#[must_use]
pub fn month_windows(range: DateRange) -> Vec<(NaiveDate, DateRange)> {
    windows(range, first_day_of_month(range.start_date()), |d| {
        d.checked_add_months(Months::new(1))
    })
}

/// Splits `range` into ISO weeks, each clamped to `range`.
///
/// Returns the Monday of each week alongside its clamped window.
#[must_use]
pub fn week_windows(range: DateRange) -> Vec<(NaiveDate, DateRange)> {
    windows(range, start_of_week(range.start_date()), |d| {
        d.checked_add_days(Days::new(7))
    })
}

fn windows(
    range: DateRange,
    first: NaiveDate,
    step: impl Fn(NaiveDate) -> Option<NaiveDate>,
) -> Vec<(NaiveDate, DateRange)> {
    let mut out = Vec::new();
    let mut cursor = first;
    while start_of_day(cursor) <= range.end {
        let next = step(cursor);
        // The final sub-period runs to the window end when the calendar has no next step.
        let end = next
            .and_then(|n| n.pred_opt())
            .map_or(range.end, |last| end_of_day(last).min(range.end));
        out.push((
            cursor,
            DateRange {
                start: start_of_day(cursor).max(range.start),
                end,
            },
        ));
        match next {
            Some(n) => cursor = n,
            None => break,
        }
    }
    out
}

/// Builds trend series by querying each sub-period.
pub struct TrendBuilder<T: TransactionQuery> {
    transactions: Arc<T>,
}

impl<T: TransactionQuery> TrendBuilder<T> {
    /// Creates a new builder.
    #[must_use]
    pub fn new(transactions: Arc<T>) -> Self {
        Self { transactions }
    }

    async fn totals(&self, user_id: UserId, window: DateRange) -> Result<PeriodTotals, QueryError> {
        let transactions = self
            .transactions
            .get_transactions(user_id, window, TransactionFilter::all())
            .await?;
        Ok(PeriodTotals::from_transactions(&transactions))
    }

    /// One entry per calendar month overlapping `range`.
    pub async fn monthly(
        &self,
        user_id: UserId,
        range: DateRange,
    ) -> Result<Vec<MonthlyTrend>, QueryError> {
        let mut trends = Vec::new();
        for (month, window) in month_windows(range) {
            let totals = self.totals(user_id, window).await?;
            trends.push(MonthlyTrend {
                month: month.format("%Y-%m").to_string(),
                period_start: window.start,
                period_end: window.end,
                income: totals.income,
                expenses: totals.expenses,
                net_income: totals.net_income(),
                savings_rate: totals.savings_rate(),
            });
        }
        Ok(trends)
    }

    /// One entry per ISO week overlapping `range`.
    pub async fn weekly(
        &self,
        user_id: UserId,
        range: DateRange,
    ) -> Result<Vec<WeeklyTrend>, QueryError> {
        let mut trends = Vec::new();
        for (monday, window) in week_windows(range) {
            let totals = self.totals(user_id, window).await?;
            let iso = monday.iso_week();
            trends.push(WeeklyTrend {
                week: format!("{}-W{:02}", iso.year(), iso.week()),
                period_start: window.start,
                period_end: window.end,
                income: totals.income,
                expenses: totals.expenses,
                net_income: totals.net_income(),
                transaction_count: totals.transaction_count(),
            });
        }
        Ok(trends)
    }

    /// Series of the given granularity.
    pub async fn series(
        &self,
        user_id: UserId,
        range: DateRange,
        granularity: TrendGranularity,
    ) -> Result<TrendSeries, QueryError> {
        Ok(match granularity {
            TrendGranularity::Weekly => TrendSeries::Weekly(self.weekly(user_id, range).await?),
            TrendGranularity::Monthly => TrendSeries::Monthly(self.monthly(user_id, range).await?),
        })
    }
}
