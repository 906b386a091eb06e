//! Period totals and headline ratios.

use chrono::{DateTime, Utc};
use finlens_shared::types::{percent_of, round_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::DateRange;
use crate::transaction::Transaction;

/// `(income - expenses) / income * 100`, 0 when there is no income.
#[must_use]
pub fn savings_rate(income: Decimal, expenses: Decimal) -> Decimal {
    percent_of(income - expenses, income)
}

/// `expenses / income * 100`, 0 when there is no income.
#[must_use]
pub fn expense_ratio(income: Decimal, expenses: Decimal) -> Decimal {
    percent_of(expenses, income)
}

/// Income and expense totals of a transaction set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Sum of income magnitudes.
    pub income: Decimal,
    /// Sum of expense magnitudes.
    pub expenses: Decimal,
    /// Number of income transactions.
    pub income_count: u64,
    /// Number of expense transactions.
    pub expense_count: u64,
}

impl PeriodTotals {
    /// Sums a transaction set.
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions.iter().fold(Self::default(), |mut totals, tx| {
            if tx.is_income() {
                totals.income += tx.magnitude();
                totals.income_count += 1;
            } else {
                totals.expenses += tx.magnitude();
                totals.expense_count += 1;
            }
            totals
        })
    }

    /// Income minus expenses.
    #[must_use]
    pub fn net_income(&self) -> Decimal {
        self.income - self.expenses
    }

    /// Savings rate of the totals.
    #[must_use]
    pub fn savings_rate(&self) -> Decimal {
        savings_rate(self.income, self.expenses)
    }

    /// Expense ratio of the totals.
    #[must_use]
    pub fn expense_ratio(&self) -> Decimal {
        expense_ratio(self.income, self.expenses)
    }

    /// Number of transactions summed.
    #[must_use]
    pub fn transaction_count(&self) -> u64 {
        self.income_count + self.expense_count
    }
}

/// Headline metrics for a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Caller-supplied period label.
    pub period: String,
    /// Window start.
    pub start_date: DateTime<Utc>,
    /// Window end.
    pub end_date: DateTime<Utc>,
    /// Total income.
    pub total_income: Decimal,
    /// Total expenses.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub net_income: Decimal,
    /// Savings rate percentage.
    pub savings_rate: Decimal,
    /// Expense ratio percentage.
    pub expense_ratio: Decimal,
    /// Number of transactions aggregated.
    pub transaction_count: u64,
    /// Number of income transactions.
    pub income_transaction_count: u64,
    /// Number of expense transactions.
    pub expense_transaction_count: u64,
    /// Mean transaction magnitude.
    pub average_transaction: Decimal,
}

impl FinancialMetrics {
    /// Computes metrics for the transactions of `range`.
    #[must_use]
    pub fn from_transactions(
        period: impl Into<String>,
        range: DateRange,
        transactions: &[Transaction],
    ) -> Self {
        let totals = PeriodTotals::from_transactions(transactions);
        let count = totals.transaction_count();
        let average_transaction = if count == 0 {
            Decimal::ZERO
        } else {
            round_amount((totals.income + totals.expenses) / Decimal::from(count))
        };

        Self {
            period: period.into(),
            start_date: range.start,
            end_date: range.end,
            total_income: totals.income,
            total_expenses: totals.expenses,
            net_income: totals.net_income(),
            savings_rate: totals.savings_rate(),
            expense_ratio: totals.expense_ratio(),
            transaction_count: count,
            income_transaction_count: totals.income_count,
            expense_transaction_count: totals.expense_count,
            average_transaction,
        }
    }
}
