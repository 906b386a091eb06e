//! Dashboard service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use finlens_shared::types::UserId;
use tracing::{debug, instrument};

use super::period::DashboardPeriod;
use super::stats::QuickStats;
use super::types::DashboardSummary;
use crate::analytics::{PeriodTotals, category_breakdown_by_type, top_categories};
use crate::budget::{BudgetQuery, budget_alerts};
use crate::error::QueryError;
use crate::goal::{GoalProgress, GoalQuery};
use crate::thresholds::{RECENT_TRANSACTION_LIMIT, TOP_CATEGORY_LIMIT};
use crate::transaction::{TransactionFilter, TransactionQuery, TransactionType};

/// Service building dashboard summaries.
pub struct DashboardService<T: TransactionQuery, B: BudgetQuery, G: GoalQuery> {
    transactions: Arc<T>,
    budgets: Arc<B>,
    goals: Arc<G>,
}

impl<T: TransactionQuery, B: BudgetQuery, G: GoalQuery> DashboardService<T, B, G> {
    /// Creates a new dashboard service.
    #[must_use]
    pub fn new(transactions: Arc<T>, budgets: Arc<B>, goals: Arc<G>) -> Self {
        Self {
            transactions,
            budgets,
            goals,
        }
    }

    /// Summary for the named period up to the current time.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator failure.
    pub async fn get_dashboard_summary(
        &self,
        user_id: UserId,
        period: &str,
    ) -> Result<DashboardSummary, QueryError> {
        self.get_dashboard_summary_at(user_id, DashboardPeriod::from_name(period), Utc::now())
            .await
    }

    /// Summary for `period` up to `now`.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator failure.
    #[instrument(skip(self))]
    pub async fn get_dashboard_summary_at(
        &self,
        user_id: UserId,
        period: DashboardPeriod,
        now: DateTime<Utc>,
    ) -> Result<DashboardSummary, QueryError> {
        let range = period.window(now);

        let (mut transactions, budgets, goals) = futures::try_join!(
            self.transactions
                .get_transactions(user_id, range, TransactionFilter::all()),
            self.budgets.get_budgets(user_id, range, true),
            self.goals.get_active_goals(user_id),
        )?;
        transactions.sort_by_key(|tx| tx.date);

        let totals = PeriodTotals::from_transactions(&transactions);
        let expenses = category_breakdown_by_type(&transactions, TransactionType::Expense);
        let quick_stats = QuickStats::from_transactions(&transactions);
        let today = now.date_naive();

        let summary = DashboardSummary {
            period,
            start_date: range.start,
            end_date: range.end,
            total_income: totals.income,
            total_expenses: totals.expenses,
            net_income: totals.net_income(),
            savings_rate: totals.savings_rate(),
            top_expense_categories: top_categories(&expenses, TOP_CATEGORY_LIMIT),
            recent_transactions: transactions
                .iter()
                .rev()
                .take(RECENT_TRANSACTION_LIMIT)
                .cloned()
                .collect(),
            budget_alerts: budget_alerts(&budgets),
            goals: goals
                .iter()
                .filter(|g| g.is_active)
                .map(|g| GoalProgress::new(g, today))
                .collect(),
            quick_stats,
        };

        debug!(
            transactions = summary.quick_stats.transaction_count,
            alerts = summary.budget_alerts.len(),
            goals = summary.goals.len(),
            "Built dashboard summary"
        );
        Ok(summary)
    }
}
