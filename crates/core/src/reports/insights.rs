//! Threshold rules turning report figures into insights and recommendations.

use serde::{Deserialize, Serialize};

use crate::analytics::{CategoryMetric, FinancialMetrics};
use crate::budget::BudgetPerformanceMetrics;
use crate::thresholds::{
    BUDGET_PERFORMANCE_GOOD, BUDGET_PERFORMANCE_GREAT, CATEGORY_CONCENTRATION_PERCENT,
    CATEGORY_REDUCTION_PERCENT, LOW_SAVINGS_RATE, STRONG_SAVINGS_RATE,
};

/// Observations and suggested actions for a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInsights {
    /// Observations.
    pub insights: Vec<String>,
    /// Suggested actions.
    pub recommendations: Vec<String>,
}

impl ReportInsights {
    /// Applies the savings, budget and concentration rules.
    #[must_use]
    pub fn compile(
        metrics: &FinancialMetrics,
        budgets: &BudgetPerformanceMetrics,
        expense_breakdown: &[CategoryMetric],
    ) -> Self {
        let mut out = Self::default();
        out.savings(metrics);
        out.budgets(budgets);
        out.concentration(expense_breakdown);
        out
    }

    fn savings(&mut self, metrics: &FinancialMetrics) {
        if metrics.transaction_count == 0 {
            self.insights
                .push("No transactions were recorded in this period".to_string());
            return;
        }

        let rate = metrics.savings_rate;
        if metrics.net_income.is_sign_negative() && !metrics.net_income.is_zero() {
            self.insights.push(format!(
                "Expenses exceeded income by {}",
                metrics.net_income.abs()
            ));
            self.recommendations
                .push("Reduce spending so that expenses stay below income".to_string());
        } else if rate >= STRONG_SAVINGS_RATE {
            self.insights
                .push(format!("Excellent savings rate of {rate}%"));
        } else if rate >= LOW_SAVINGS_RATE {
            self.insights.push(format!("Good savings rate of {rate}%"));
            self.recommendations.push(format!(
                "Aim for a savings rate of {STRONG_SAVINGS_RATE}% or more to build reserves faster"
            ));
        } else {
            self.insights.push(format!("Low savings rate of {rate}%"));
            self.recommendations.push(format!(
                "Try to save at least {LOW_SAVINGS_RATE}% of your income each period"
            ));
        }
    }

    fn budgets(&mut self, budgets: &BudgetPerformanceMetrics) {
        if !budgets.has_budgets() {
            return;
        }

        let score = budgets.performance_score;
        if score > BUDGET_PERFORMANCE_GREAT {
            self.insights.push(format!(
                "Great budget discipline: {score}% of budgets stayed within their limits"
            ));
        } else if score > BUDGET_PERFORMANCE_GOOD {
            self.insights.push(format!(
                "Most budgets are on track ({score}% within their limits)"
            ));
        } else {
            self.recommendations.push(format!(
                "Only {score}% of budgets stayed within their limits; review the overspent categories"
            ));
        }
    }

    fn concentration(&mut self, expense_breakdown: &[CategoryMetric]) {
        for metric in expense_breakdown {
            let share = metric.percentage_of_total;
            if share > CATEGORY_CONCENTRATION_PERCENT {
                self.insights.push(format!(
                    "{} accounts for {share}% of your expenses",
                    metric.category_name
                ));
            }
            if share > CATEGORY_REDUCTION_PERCENT {
                self.recommendations.push(format!(
                    "Consider reducing spending on {} ({share}% of expenses)",
                    metric.category_name
                ));
            }
        }
    }
}
