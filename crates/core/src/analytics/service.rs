//! Analytics operations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use finlens_shared::types::{CategoryId, UserId, percent_of, round_amount};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::breakdown::{TrendDirection, category_breakdown_against};
use super::error::AnalyticsError;
use super::metrics::{FinancialMetrics, PeriodTotals};
use super::trend::{TrendBuilder, TrendGranularity, month_windows};
use super::types::{CategoryMetrics, CategoryPeriodTotal, IncomeExpenseAnalysis};
use crate::period::DateRange;
use crate::transaction::{CategoryQuery, Transaction, TransactionFilter, TransactionQuery, TransactionType};

/// Service for financial metrics and income/expense/category analysis.
pub struct AnalyticsService<T: TransactionQuery, C: CategoryQuery> {
    transactions: Arc<T>,
    categories: Arc<C>,
}

impl<T: TransactionQuery, C: CategoryQuery> AnalyticsService<T, C> {
    /// Creates a new analytics service.
    #[must_use]
    pub fn new(transactions: Arc<T>, categories: Arc<C>) -> Self {
        Self {
            transactions,
            categories,
        }
    }

    async fn fetch(
        &self,
        user_id: UserId,
        range: DateRange,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, AnalyticsError> {
        Ok(self
            .transactions
            .get_transactions(user_id, range, filter)
            .await?)
    }

    /// Transactions in the window before `range`; empty when no earlier window exists.
    async fn fetch_previous(
        &self,
        user_id: UserId,
        range: DateRange,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, AnalyticsError> {
        match range.previous() {
            Some(previous) => self.fetch(user_id, previous, filter).await,
            None => Ok(Vec::new()),
        }
    }

    /// Headline metrics for `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when `start > end`, before any query is issued.
    #[instrument(skip(self))]
    pub async fn get_financial_metrics(
        &self,
        user_id: UserId,
        period: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<FinancialMetrics, AnalyticsError> {
        let range = DateRange::new(start, end)?;
        let transactions = self.fetch(user_id, range, TransactionFilter::all()).await?;
        let metrics = FinancialMetrics::from_transactions(period, range, &transactions);

        debug!(
            income = %metrics.total_income,
            expenses = %metrics.total_expenses,
            count = metrics.transaction_count,
            "Computed financial metrics"
        );
        Ok(metrics)
    }

    /// Metrics, per-type breakdowns, a trend series and change versus the
    /// previous window of equal length.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when `start > end`, or the first query failure.
    #[instrument(skip(self))]
    pub async fn get_income_expense_analysis(
        &self,
        user_id: UserId,
        period: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<IncomeExpenseAnalysis, AnalyticsError> {
        let range = DateRange::new(start, end)?;

        let current = self.fetch(user_id, range, TransactionFilter::all()).await?;
        let previous = self
            .fetch_previous(user_id, range, TransactionFilter::all())
            .await?;

        let metrics = FinancialMetrics::from_transactions(period, range, &current);
        let before = PeriodTotals::from_transactions(&previous);

        let (current_income, current_expenses) = split_by_type(&current);
        let (previous_income, previous_expenses) = split_by_type(&previous);

        let trends = TrendBuilder::new(Arc::clone(&self.transactions))
            .series(user_id, range, TrendGranularity::from_period_label(period))
            .await?;

        let analysis = IncomeExpenseAnalysis {
            income_breakdown: category_breakdown_against(&current_income, &previous_income),
            expense_breakdown: category_breakdown_against(&current_expenses, &previous_expenses),
            trends,
            previous_income: before.income,
            previous_expenses: before.expenses,
            income_change_percentage: percent_of(metrics.total_income - before.income, before.income),
            expense_change_percentage: percent_of(
                metrics.total_expenses - before.expenses,
                before.expenses,
            ),
            income_trend: TrendDirection::classify(metrics.total_income, before.income),
            expense_trend: TrendDirection::classify(metrics.total_expenses, before.expenses),
            metrics,
        };

        debug!(
            income_categories = analysis.income_breakdown.len(),
            expense_categories = analysis.expense_breakdown.len(),
            trend_entries = analysis.trends.len(),
            "Computed income/expense analysis"
        );
        Ok(analysis)
    }

    /// Detailed analysis of one category over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when `start > end`, `CategoryNotFound` when the
    /// lookup returns nothing, or the first query failure.
    #[instrument(skip(self))]
    pub async fn get_category_analysis(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<CategoryMetrics, AnalyticsError> {
        let range = DateRange::new(start, end)?;
        let category = self
            .categories
            .get_category(user_id, category_id)
            .await?
            .ok_or(AnalyticsError::CategoryNotFound(category_id))?;

        let in_category = TransactionFilter::for_category(category_id);
        let transactions = self.fetch(user_id, range, in_category).await?;
        let previous = self.fetch_previous(user_id, range, in_category).await?;
        let same_type = self
            .fetch(user_id, range, TransactionFilter::of_type(category.category_type))
            .await?;

        let total_amount: Decimal = transactions.iter().map(Transaction::magnitude).sum();
        let previous_total: Decimal = previous.iter().map(Transaction::magnitude).sum();
        let type_total: Decimal = same_type.iter().map(Transaction::magnitude).sum();
        let transaction_count = transactions.len() as u64;

        let metrics = CategoryMetrics {
            category_id,
            category_name: category.name,
            category_type: category.category_type,
            start_date: range.start,
            end_date: range.end,
            total_amount,
            transaction_count,
            average_amount: if transaction_count == 0 {
                Decimal::ZERO
            } else {
                round_amount(total_amount / Decimal::from(transaction_count))
            },
            largest_transaction: transactions
                .iter()
                .map(Transaction::magnitude)
                .max()
                .unwrap_or(Decimal::ZERO),
            percentage_of_type_total: percent_of(total_amount, type_total),
            previous_total,
            trend: TrendDirection::classify(total_amount, previous_total),
            monthly_totals: monthly_category_totals(range, &transactions),
        };

        debug!(
            total = %metrics.total_amount,
            count = metrics.transaction_count,
            "Computed category analysis"
        );
        Ok(metrics)
    }
}

fn split_by_type(transactions: &[Transaction]) -> (Vec<Transaction>, Vec<Transaction>) {
    transactions
        .iter()
        .cloned()
        .partition(|tx| tx.transaction_type == TransactionType::Income)
}

/// Buckets one category's transactions into the months of `range`.
fn monthly_category_totals(range: DateRange, transactions: &[Transaction]) -> Vec<CategoryPeriodTotal> {
    month_windows(range)
        .into_iter()
        .map(|(month, window)| {
            let in_month = transactions.iter().filter(|tx| window.contains(tx.date));
            let (total_amount, transaction_count) = in_month
                .fold((Decimal::ZERO, 0u64), |(total, count), tx| {
                    (total + tx.magnitude(), count + 1)
                });
            CategoryPeriodTotal {
                month: month.format("%Y-%m").to_string(),
                total_amount,
                transaction_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::trend::TrendSeries;
    use crate::error::QueryError;
    use crate::period::{end_of_day, start_of_day};
    use crate::test_support::{FakeLedger, at, category, date, expense, income, user};
    use rust_decimal_macros::dec;

    fn ledger() -> Arc<FakeLedger> {
        let salary = category(1, "Salary", TransactionType::Income);
        let freelance = category(2, "Freelance", TransactionType::Income);
        let food = category(10, "Food", TransactionType::Expense);
        let rent = category(11, "Rent", TransactionType::Expense);
        Arc::new(FakeLedger {
            transactions: vec![
                // December 2023
                income(dec!(4000), &salary, at(2023, 12, 1)),
                expense(dec!(400), &food, at(2023, 12, 10)),
                // January 2024
                income(dec!(5000), &salary, at(2024, 1, 1)),
                income(dec!(1000), &freelance, at(2024, 1, 20)),
                expense(dec!(300), &food, at(2024, 1, 5)),
                expense(dec!(250), &food, at(2024, 1, 15)),
                expense(dec!(1200), &rent, at(2024, 1, 2)),
                // February 2024
                expense(dec!(100), &food, at(2024, 2, 3)),
            ],
            categories: vec![salary, freelance, food, rent],
            ..FakeLedger::default()
        })
    }

    fn january() -> (DateTime<Utc>, DateTime<Utc>) {
        (start_of_day(date(2024, 1, 1)), end_of_day(date(2024, 1, 31)))
    }

    #[tokio::test]
    async fn test_financial_metrics() {
        let service = AnalyticsService::new(ledger(), ledger());
        let (start, end) = january();
        let metrics = service
            .get_financial_metrics(user(), "monthly", start, end)
            .await
            .unwrap();

        assert_eq!(metrics.period, "monthly");
        assert_eq!(metrics.total_income, dec!(6000));
        assert_eq!(metrics.total_expenses, dec!(1750));
        assert_eq!(metrics.net_income, dec!(4250));
        assert_eq!(metrics.transaction_count, 5);
        assert_eq!(metrics.expense_transaction_count, 3);
    }

    #[tokio::test]
    async fn test_invalid_range_is_rejected_before_querying() {
        let ledger = ledger();
        let service = AnalyticsService::new(ledger.clone(), ledger.clone());
        let (start, end) = january();

        let err = service
            .get_financial_metrics(user(), "monthly", end, start)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidPeriod(_)));
        assert_eq!(ledger.query_count(), 0);
    }

    #[tokio::test]
    async fn test_income_expense_analysis() {
        let service = AnalyticsService::new(ledger(), ledger());
        let (start, end) = january();
        let analysis = service
            .get_income_expense_analysis(user(), "monthly", start, end)
            .await
            .unwrap();

        assert_eq!(analysis.income_breakdown.len(), 2);
        assert_eq!(analysis.income_breakdown[0].category_name, "Salary");
        assert_eq!(analysis.expense_breakdown[0].category_name, "Rent");
        assert_eq!(analysis.expense_breakdown[0].trend, TrendDirection::Increasing);
        // Food: 550 against 400 in December.
        assert_eq!(analysis.expense_breakdown[1].trend, TrendDirection::Increasing);

        assert_eq!(analysis.previous_income, dec!(4000));
        assert_eq!(analysis.previous_expenses, dec!(400));
        assert_eq!(analysis.income_change_percentage, dec!(50));
        assert_eq!(analysis.expense_change_percentage, dec!(337.50));
        assert_eq!(analysis.income_trend, TrendDirection::Increasing);
        assert!(matches!(&analysis.trends, TrendSeries::Monthly(m) if m.len() == 1));
    }

    #[tokio::test]
    async fn test_weekly_label_selects_weekly_series() {
        let service = AnalyticsService::new(ledger(), ledger());
        let (start, end) = january();
        let analysis = service
            .get_income_expense_analysis(user(), "weekly", start, end)
            .await
            .unwrap();

        // 2024-01-01 is a Monday; January touches five ISO weeks.
        assert!(matches!(&analysis.trends, TrendSeries::Weekly(w) if w.len() == 5));
    }

    #[tokio::test]
    async fn test_category_analysis() {
        let service = AnalyticsService::new(ledger(), ledger());
        let start = start_of_day(date(2024, 1, 1));
        let end = end_of_day(date(2024, 2, 29));
        let metrics = service
            .get_category_analysis(user(), CategoryId::from_u128(10), start, end)
            .await
            .unwrap();

        assert_eq!(metrics.category_name, "Food");
        assert_eq!(metrics.total_amount, dec!(650));
        assert_eq!(metrics.transaction_count, 3);
        assert_eq!(metrics.average_amount, dec!(216.67));
        assert_eq!(metrics.largest_transaction, dec!(300));
        // 650 of 1850 total expenses.
        assert_eq!(metrics.percentage_of_type_total, dec!(35.14));
        assert_eq!(metrics.previous_total, dec!(400));
        assert_eq!(metrics.trend, TrendDirection::Increasing);
        assert_eq!(metrics.monthly_totals.len(), 2);
        assert_eq!(metrics.monthly_totals[0].total_amount, dec!(550));
        assert_eq!(metrics.monthly_totals[1].month, "2024-02");
        assert_eq!(metrics.monthly_totals[1].transaction_count, 1);
    }

    #[tokio::test]
    async fn test_unknown_category_is_not_found() {
        let service = AnalyticsService::new(ledger(), ledger());
        let (start, end) = january();
        let err = service
            .get_category_analysis(user(), CategoryId::from_u128(99), start, end)
            .await
            .unwrap_err();
        assert_eq!(err, AnalyticsError::CategoryNotFound(CategoryId::from_u128(99)));
    }

    #[tokio::test]
    async fn test_window_at_earliest_date_has_empty_previous() {
        let service = AnalyticsService::new(ledger(), ledger());
        let earliest = chrono::NaiveDate::MIN;
        let start = start_of_day(earliest);
        let end = end_of_day(earliest + chrono::Days::new(40));

        let analysis = service
            .get_income_expense_analysis(user(), "monthly", start, end)
            .await
            .unwrap();
        assert_eq!(analysis.metrics.transaction_count, 0);
        assert_eq!(analysis.previous_income, Decimal::ZERO);
        assert_eq!(analysis.income_trend, TrendDirection::Stable);
        assert_eq!(analysis.trends.len(), 2);

        let food = service
            .get_category_analysis(user(), CategoryId::from_u128(10), start, end)
            .await
            .unwrap();
        assert_eq!(food.previous_total, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_query_failure_aborts() {
        let failing = Arc::new(FakeLedger::failing(QueryError::Failed("timeout".into())));
        let service = AnalyticsService::new(failing.clone(), failing);
        let (start, end) = january();
        let err = service
            .get_income_expense_analysis(user(), "monthly", start, end)
            .await
            .unwrap_err();
        assert_eq!(err, AnalyticsError::Query(QueryError::Failed("timeout".into())));
    }
}
