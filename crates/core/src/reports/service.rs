//! Report generation service.

use std::sync::Arc;

use chrono::Utc;
use finlens_shared::types::UserId;
use tracing::{info, instrument};

use super::error::ReportError;
use super::insights::ReportInsights;
use super::types::{FinancialReport, ReportPeriod, ReportType};
use crate::analytics::{
    CategoryMetric, FinancialHealthScore, FinancialMetrics, HealthInputs, TrendBuilder,
    category_breakdown_against, top_categories,
};
use crate::budget::{BudgetEvaluator, BudgetQuery};
use crate::error::QueryError;
use crate::period::DateRange;
use crate::thresholds::TOP_CATEGORY_LIMIT;
use crate::transaction::{Transaction, TransactionFilter, TransactionQuery, TransactionType};

/// Service for generating financial reports.
pub struct ReportService<T: TransactionQuery, B: BudgetQuery> {
    transactions: Arc<T>,
    budgets: Arc<B>,
}

impl<T: TransactionQuery, B: BudgetQuery> ReportService<T, B> {
    /// Creates a new report service.
    #[must_use]
    pub fn new(transactions: Arc<T>, budgets: Arc<B>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    /// Generates a report for `period`.
    ///
    /// The period is validated before any query is issued.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` for an invalid month, quarter or custom window,
    /// or the first collaborator failure.
    #[instrument(skip(self))]
    pub async fn generate_report(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<FinancialReport, ReportError> {
        let range = period.resolve()?;
        let title = period.title(&range);
        self.generate_for_range(user_id, period.report_type(), title, range)
            .await
    }

    /// Transactions in the window before `range`; empty when no earlier window exists.
    async fn previous_transactions(
        &self,
        user_id: UserId,
        range: DateRange,
    ) -> Result<Vec<Transaction>, QueryError> {
        match range.previous() {
            Some(previous) => {
                self.transactions
                    .get_transactions(user_id, previous, TransactionFilter::all())
                    .await
            }
            None => Ok(Vec::new()),
        }
    }

    async fn generate_for_range(
        &self,
        user_id: UserId,
        report_type: ReportType,
        title: String,
        range: DateRange,
    ) -> Result<FinancialReport, ReportError> {
        let trends = TrendBuilder::new(Arc::clone(&self.transactions));
        let evaluator = BudgetEvaluator::new(Arc::clone(&self.transactions), Arc::clone(&self.budgets));

        let (current, previous, monthly_trends, budget_performance) = futures::try_join!(
            self.transactions
                .get_transactions(user_id, range, TransactionFilter::all()),
            self.previous_transactions(user_id, range),
            trends.monthly(user_id, range),
            evaluator.evaluate(user_id, range),
        )?;

        let metrics = FinancialMetrics::from_transactions(report_type.as_str(), range, &current);

        let category_breakdown = category_breakdown_against(&current, &previous);
        let income_breakdown = breakdown_of(&current, &previous, TransactionType::Income);
        let expense_breakdown = breakdown_of(&current, &previous, TransactionType::Expense);

        let health_score = FinancialHealthScore::calculate(&HealthInputs {
            savings_rate: metrics.savings_rate,
            expense_ratio: metrics.expense_ratio,
            budget_variance_percentage: budget_performance.variance_percentage,
            categories_over_budget: budget_performance.categories_over_budget,
            categories_under_budget: budget_performance.categories_under_budget,
        });
        let ReportInsights {
            insights,
            recommendations,
        } = ReportInsights::compile(&metrics, &budget_performance, &expense_breakdown);

        info!(
            %title,
            transactions = metrics.transaction_count,
            health = health_score.overall_score,
            "Generated financial report"
        );

        Ok(FinancialReport {
            title,
            report_type,
            start_date: range.start,
            end_date: range.end,
            generated_at: Utc::now(),
            total_income: metrics.total_income,
            total_expenses: metrics.total_expenses,
            net_income: metrics.net_income,
            savings_rate: metrics.savings_rate,
            expense_ratio: metrics.expense_ratio,
            transaction_count: metrics.transaction_count,
            category_breakdown,
            top_income_categories: top_categories(&income_breakdown, TOP_CATEGORY_LIMIT),
            top_expense_categories: top_categories(&expense_breakdown, TOP_CATEGORY_LIMIT),
            monthly_trends,
            budget_performance,
            health_score,
            insights,
            recommendations,
        })
    }
}

fn breakdown_of(
    current: &[Transaction],
    previous: &[Transaction],
    transaction_type: TransactionType,
) -> Vec<CategoryMetric> {
    let of_type = |set: &[Transaction]| -> Vec<Transaction> {
        set.iter()
            .filter(|tx| tx.transaction_type == transaction_type)
            .cloned()
            .collect()
    };
    category_breakdown_against(&of_type(current), &of_type(previous))
}
