//! Analytics operation results.

use chrono::{DateTime, Utc};
use finlens_shared::types::CategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::breakdown::{CategoryMetric, TrendDirection};
use super::metrics::FinancialMetrics;
use super::trend::TrendSeries;
use crate::transaction::TransactionType;

/// Income and expense analysis for a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeExpenseAnalysis {
    /// Headline metrics.
    pub metrics: FinancialMetrics,
    /// Income categories, trends against the previous window.
    pub income_breakdown: Vec<CategoryMetric>,
    /// Expense categories, trends against the previous window.
    pub expense_breakdown: Vec<CategoryMetric>,
    /// Weekly or monthly series across the window.
    pub trends: TrendSeries,
    /// Income in the previous window of equal length.
    pub previous_income: Decimal,
    /// Expenses in the previous window of equal length.
    pub previous_expenses: Decimal,
    /// Income change versus the previous window (0 without previous income).
    pub income_change_percentage: Decimal,
    /// Expense change versus the previous window (0 without previous expenses).
    pub expense_change_percentage: Decimal,
    /// Direction of income.
    pub income_trend: TrendDirection,
    /// Direction of expenses.
    pub expense_trend: TrendDirection,
}

/// One month of a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPeriodTotal {
    /// `YYYY-MM` label.
    pub month: String,
    /// Sum of magnitudes.
    pub total_amount: Decimal,
    /// Number of transactions.
    pub transaction_count: u64,
}

/// Detailed analysis of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMetrics {
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name.
    pub category_name: String,
    /// Category type.
    pub category_type: TransactionType,
    /// Window start.
    pub start_date: DateTime<Utc>,
    /// Window end.
    pub end_date: DateTime<Utc>,
    /// Sum of magnitudes.
    pub total_amount: Decimal,
    /// Number of transactions.
    pub transaction_count: u64,
    /// Mean magnitude.
    pub average_amount: Decimal,
    /// Largest single magnitude.
    pub largest_transaction: Decimal,
    /// Share of all transactions of the same type in the window.
    pub percentage_of_type_total: Decimal,
    /// Total in the previous window of equal length.
    pub previous_total: Decimal,
    /// Direction versus the previous window.
    pub trend: TrendDirection,
    /// Per-month totals, zero-filled.
    pub monthly_totals: Vec<CategoryPeriodTotal>,
}
