//! Budget performance evaluation.
//!
//! Recomputes, for every active budget overlapping a window, how much was
//! actually spent in the part of the window the budget covers, and rolls the
//! lines up into totals and over/under counts.

use std::sync::Arc;

use finlens_shared::types::{BudgetId, CategoryId, UserId, percent_of, round_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::query::BudgetQuery;
use super::status::BudgetStatus;
use super::types::{Budget, BudgetPeriod};
use super::variance::BudgetVariance;
use crate::error::QueryError;
use crate::period::DateRange;
use crate::transaction::{Transaction, TransactionFilter, TransactionQuery, TransactionType};

/// Overall budget status of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetSummaryStatus {
    /// No budget overlaps the window.
    NoBudget,
    /// Total usage below 80%.
    OnTrack,
    /// Total usage 80% up to 100%.
    Warning,
    /// Total usage 100% or more.
    OverBudget,
}

impl From<BudgetStatus> for BudgetSummaryStatus {
    fn from(status: BudgetStatus) -> Self {
        match status {
            BudgetStatus::OnTrack => Self::OnTrack,
            BudgetStatus::Warning => Self::Warning,
            BudgetStatus::OverBudget => Self::OverBudget,
        }
    }
}

/// Performance of one budget over the evaluated window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPerformance {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name.
    pub category_name: String,
    /// Budget recurrence.
    pub period: BudgetPeriod,
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Spent inside the overlap of the budget and the window.
    pub spent: Decimal,
    /// Budgeted minus spent.
    pub remaining: Decimal,
    /// Variance percentage.
    pub variance_percentage: Decimal,
    /// Utilization percentage.
    pub utilization_percentage: Decimal,
    /// Usage band.
    pub status: BudgetStatus,
    /// True when spent exceeds the budgeted amount.
    pub is_over_budget: bool,
}

impl BudgetPerformance {
    /// Builds the line for `budget` given the recomputed spend.
    #[must_use]
    pub fn new(budget: &Budget, spent: Decimal) -> Self {
        let variance = BudgetVariance::calculate(budget.amount, spent);
        Self {
            budget_id: budget.id,
            category_id: budget.category_id,
            category_name: budget.category_name.clone(),
            period: budget.period,
            budgeted: budget.amount,
            spent,
            remaining: variance.variance,
            variance_percentage: variance.variance_percentage,
            utilization_percentage: variance.utilization_percentage,
            status: BudgetStatus::from_usage(variance.utilization_percentage),
            is_over_budget: spent > budget.amount,
        }
    }
}

/// Budget performance rolled up over a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPerformanceMetrics {
    /// Sum of budgeted amounts.
    pub total_budgeted: Decimal,
    /// Sum of spent amounts.
    pub total_spent: Decimal,
    /// Total budgeted minus total spent.
    pub variance: Decimal,
    /// Variance as a percentage of the total budgeted (0 when nothing is budgeted).
    pub variance_percentage: Decimal,
    /// Budgets whose spend exceeds their amount.
    pub categories_over_budget: u32,
    /// Budgets at or under their amount.
    pub categories_under_budget: u32,
    /// Share of budgets not over budget (0-100).
    pub performance_score: Decimal,
    /// Overall usage band.
    pub status: BudgetSummaryStatus,
    /// Per-budget lines.
    pub budgets: Vec<BudgetPerformance>,
}

impl BudgetPerformanceMetrics {
    /// Rolls up per-budget lines.
    #[must_use]
    pub fn from_lines(budgets: Vec<BudgetPerformance>) -> Self {
        let total_budgeted: Decimal = budgets.iter().map(|b| b.budgeted).sum();
        let total_spent: Decimal = budgets.iter().map(|b| b.spent).sum();
        let over = budgets.iter().filter(|b| b.is_over_budget).count();
        let under = budgets.len() - over;
        let totals = BudgetVariance::calculate(total_budgeted, total_spent);

        let status = if budgets.is_empty() {
            BudgetSummaryStatus::NoBudget
        } else {
            BudgetStatus::from_usage(totals.utilization_percentage).into()
        };

        Self {
            total_budgeted,
            total_spent,
            variance: totals.variance,
            variance_percentage: totals.variance_percentage,
            categories_over_budget: saturating_u32(over),
            categories_under_budget: saturating_u32(under),
            performance_score: percent_of(Decimal::from(under), Decimal::from(budgets.len())),
            status,
            budgets,
        }
    }

    /// Returns true when at least one budget was evaluated.
    #[must_use]
    pub fn has_budgets(&self) -> bool {
        !self.budgets.is_empty()
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Evaluates budgets against the transactions they cover.
pub struct BudgetEvaluator<T: TransactionQuery, B: BudgetQuery> {
    transactions: Arc<T>,
    budgets: Arc<B>,
}

impl<T: TransactionQuery, B: BudgetQuery> BudgetEvaluator<T, B> {
    /// Creates a new evaluator.
    #[must_use]
    pub fn new(transactions: Arc<T>, budgets: Arc<B>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    /// Evaluates every active budget overlapping `range`.
    ///
    /// Spending is recomputed from expense transactions in the budget's
    /// category inside `[max(budget start, range start), min(budget end, range end)]`.
    pub async fn evaluate(
        &self,
        user_id: UserId,
        range: DateRange,
    ) -> Result<BudgetPerformanceMetrics, QueryError> {
        let budgets = self.budgets.get_budgets(user_id, range, true).await?;

        let mut lines = Vec::with_capacity(budgets.len());
        for budget in budgets.iter().filter(|b| b.is_active) {
            let Some(window) = budget.window().and_then(|w| w.intersect(&range)) else {
                continue;
            };
            let filter =
                TransactionFilter::for_category(budget.category_id).with_type(TransactionType::Expense);
            let spent: Decimal = self
                .transactions
                .get_transactions(user_id, window, filter)
                .await?
                .iter()
                .map(Transaction::magnitude)
                .sum();
            lines.push(BudgetPerformance::new(budget, round_amount(spent)));
        }

        let metrics = BudgetPerformanceMetrics::from_lines(lines);
        debug!(
            budgets = metrics.budgets.len(),
            total_budgeted = %metrics.total_budgeted,
            total_spent = %metrics.total_spent,
            "Evaluated budget performance"
        );
        Ok(metrics)
    }
}
