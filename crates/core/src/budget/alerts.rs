//! Threshold-based budget alerts.

use finlens_shared::types::{BudgetId, CategoryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::AlertLevel;
use super::types::Budget;

/// An alert for a budget at or above 60% usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAlert {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name.
    pub category_name: String,
    /// Budgeted amount.
    pub amount: Decimal,
    /// Tracked spend.
    pub spent: Decimal,
    /// Amount minus spent.
    pub remaining: Decimal,
    /// Rounded usage percentage.
    pub usage_percentage: Decimal,
    /// Escalation level.
    pub level: AlertLevel,
    /// Human-readable message.
    pub message: String,
}

impl BudgetAlert {
    /// Builds an alert for `budget`, or `None` while usage is in the normal band.
    #[must_use]
    pub fn for_budget(budget: &Budget) -> Option<Self> {
        let usage = budget.usage_percent();
        let level = AlertLevel::from_usage(usage);
        let name = &budget.category_name;

        let message = match level {
            AlertLevel::Normal => return None,
            AlertLevel::Warning => format!("You have used {usage}% of your {name} budget"),
            AlertLevel::Danger => {
                format!("Your {name} budget is nearly exhausted ({usage}% used)")
            }
            AlertLevel::Critical => format!(
                "You have exceeded your {name} budget by {}",
                (budget.spent - budget.amount).max(Decimal::ZERO)
            ),
        };

        Some(Self {
            budget_id: budget.id,
            category_id: budget.category_id,
            category_name: name.clone(),
            amount: budget.amount,
            spent: budget.spent,
            remaining: budget.remaining,
            usage_percentage: usage,
            level,
            message,
        })
    }
}

/// Raises alerts for active budgets at or above 60% usage, highest usage first.
#[must_use]
pub fn budget_alerts(budgets: &[Budget]) -> Vec<BudgetAlert> {
    let mut alerts: Vec<BudgetAlert> = budgets
        .iter()
        .filter(|b| b.is_active)
        .filter_map(BudgetAlert::for_budget)
        .collect();
    alerts.sort_by(|a, b| {
        b.usage_percentage
            .cmp(&a.usage_percentage)
            .then_with(|| a.budget_id.cmp(&b.budget_id))
    });
    alerts
}
