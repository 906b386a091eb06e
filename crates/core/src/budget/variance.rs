//! Budget variance calculations.

use finlens_shared::types::percent_of;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::thresholds::BUDGET_OVER_PERCENT;

/// Spent as a rounded percentage of the budgeted amount.
///
/// Any spending against a zero budget counts as fully used.
#[must_use]
pub fn usage_percent(spent: Decimal, budgeted: Decimal) -> Decimal {
    if budgeted.is_zero() && spent > Decimal::ZERO {
        return BUDGET_OVER_PERCENT;
    }
    percent_of(spent, budgeted)
}

/// Type of variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceType {
    /// Spent less than budgeted.
    Favorable,
    /// Spent more than budgeted.
    Unfavorable,
    /// No variance.
    None,
}

/// Budgeted vs. spent variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetVariance {
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Spent amount.
    pub spent: Decimal,
    /// Variance amount (budgeted - spent).
    pub variance: Decimal,
    /// Variance as a percentage of the budgeted amount.
    pub variance_percentage: Decimal,
    /// Spent as a percentage of the budgeted amount.
    pub utilization_percentage: Decimal,
    /// Type of variance.
    pub variance_type: VarianceType,
}

impl BudgetVariance {
    /// Calculates variance for spending against a budget.
    ///
    /// Under budget is favorable, over budget is unfavorable. Percentages are
    /// zero when nothing was budgeted.
    #[must_use]
    pub fn calculate(budgeted: Decimal, spent: Decimal) -> Self {
        let variance = budgeted - spent;

        let variance_type = if variance.is_zero() {
            VarianceType::None
        } else if variance.is_sign_positive() {
            VarianceType::Favorable
        } else {
            VarianceType::Unfavorable
        };

        Self {
            budgeted,
            spent,
            variance,
            variance_percentage: percent_of(variance, budgeted),
            utilization_percentage: usage_percent(spent, budgeted),
            variance_type,
        }
    }
}
