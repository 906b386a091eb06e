//! Composite financial health score.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::thresholds::{
    BUDGET_SCORE_BANDS, EXPENSE_SCORE_BANDS, HEALTH_EXCELLENT_SCORE, HEALTH_FAIR_SCORE,
    HEALTH_GOOD_SCORE, HIGH_EXPENSE_RATIO, LOW_SAVINGS_RATE, SAVINGS_SCORE_BANDS,
};

/// Health band of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// 80 and above.
    Excellent,
    /// 60 to 79.
    Good,
    /// 40 to 59.
    Fair,
    /// Below 40.
    Poor,
}

impl HealthStatus {
    /// Band for an overall score.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= HEALTH_EXCELLENT_SCORE {
            Self::Excellent
        } else if score >= HEALTH_GOOD_SCORE {
            Self::Good
        } else if score >= HEALTH_FAIR_SCORE {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Figures the score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HealthInputs {
    /// Savings rate percentage.
    pub savings_rate: Decimal,
    /// Expense ratio percentage.
    pub expense_ratio: Decimal,
    /// Budget variance percentage (positive is under budget).
    pub budget_variance_percentage: Decimal,
    /// Budgets over their amount.
    pub categories_over_budget: u32,
    /// Budgets at or under their amount.
    pub categories_under_budget: u32,
}

/// Score out of 100 built from savings, expense and budget components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialHealthScore {
    /// Savings component (0-40).
    pub savings_score: u32,
    /// Expense component (0-30).
    pub expense_score: u32,
    /// Budget component (0-30).
    pub budget_score: u32,
    /// Sum of the components.
    pub overall_score: u32,
    /// Band of the overall score.
    pub status: HealthStatus,
    /// Suggested actions, possibly empty.
    pub recommendations: Vec<String>,
}

impl FinancialHealthScore {
    /// Scores `inputs`.
    #[must_use]
    pub fn calculate(inputs: &HealthInputs) -> Self {
        let savings_score = savings_points(inputs.savings_rate);
        let expense_score = expense_points(inputs.expense_ratio);
        let budget_score = budget_points(inputs.budget_variance_percentage);
        let overall_score = savings_score + expense_score + budget_score;

        let mut recommendations = Vec::new();
        if inputs.savings_rate < LOW_SAVINGS_RATE {
            recommendations.push(
                "Increase your savings rate to at least 10% of income by trimming discretionary spending"
                    .to_string(),
            );
        }
        if inputs.expense_ratio > HIGH_EXPENSE_RATIO {
            recommendations.push(
                "Your expenses exceed 80% of your income; review recurring costs for savings"
                    .to_string(),
            );
        }
        if inputs.categories_over_budget > inputs.categories_under_budget {
            recommendations.push(
                "More budgets are over their limit than under; adjust budget amounts or spending"
                    .to_string(),
            );
        }

        Self {
            savings_score,
            expense_score,
            budget_score,
            overall_score,
            status: HealthStatus::from_score(overall_score),
            recommendations,
        }
    }
}

fn savings_points(rate: Decimal) -> u32 {
    SAVINGS_SCORE_BANDS
        .iter()
        .find(|(min, _)| rate >= *min)
        .map_or(0, |(_, points)| *points)
}

fn expense_points(ratio: Decimal) -> u32 {
    EXPENSE_SCORE_BANDS
        .iter()
        .find(|(max, _)| ratio <= *max)
        .map_or(0, |(_, points)| *points)
}

fn budget_points(variance: Decimal) -> u32 {
    BUDGET_SCORE_BANDS
        .iter()
        .find(|(low, high, _)| variance >= *low && variance <= *high)
        .map_or(0, |(_, _, points)| *points)
}
