//! Budget status and alert level bands.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::thresholds::{
    ALERT_CRITICAL_PERCENT, ALERT_DANGER_PERCENT, ALERT_WARNING_PERCENT, BUDGET_OVER_PERCENT,
    BUDGET_WARNING_PERCENT,
};

/// Qualitative usage of a single budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Less than 80% used.
    OnTrack,
    /// 80% up to (not including) 100% used.
    Warning,
    /// 100% or more used.
    OverBudget,
}

impl BudgetStatus {
    /// Classifies a rounded usage percentage.
    #[must_use]
    pub fn from_usage(usage_percent: Decimal) -> Self {
        if usage_percent >= BUDGET_OVER_PERCENT {
            Self::OverBudget
        } else if usage_percent >= BUDGET_WARNING_PERCENT {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }
}

/// Escalation level of a budget alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Below 60% used; no alert is raised.
    Normal,
    /// 60% to 79.99% used.
    Warning,
    /// 80% to 99.99% used.
    Danger,
    /// 100% or more used.
    Critical,
}

impl AlertLevel {
    /// Classifies a rounded usage percentage.
    #[must_use]
    pub fn from_usage(usage_percent: Decimal) -> Self {
        if usage_percent >= ALERT_CRITICAL_PERCENT {
            Self::Critical
        } else if usage_percent >= ALERT_DANGER_PERCENT {
            Self::Danger
        } else if usage_percent >= ALERT_WARNING_PERCENT {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), BudgetStatus::OnTrack)]
    #[case(dec!(79), BudgetStatus::OnTrack)]
    #[case(dec!(79.99), BudgetStatus::OnTrack)]
    #[case(dec!(80), BudgetStatus::Warning)]
    #[case(dec!(99.99), BudgetStatus::Warning)]
    #[case(dec!(100), BudgetStatus::OverBudget)]
    #[case(dec!(150), BudgetStatus::OverBudget)]
    fn test_budget_status_bands(#[case] usage: Decimal, #[case] expected: BudgetStatus) {
        assert_eq!(BudgetStatus::from_usage(usage), expected);
    }

    #[rstest]
    #[case(dec!(59.99), AlertLevel::Normal)]
    #[case(dec!(60), AlertLevel::Warning)]
    #[case(dec!(75), AlertLevel::Warning)]
    #[case(dec!(80), AlertLevel::Danger)]
    #[case(dec!(85), AlertLevel::Danger)]
    #[case(dec!(100), AlertLevel::Critical)]
    fn test_alert_level_bands(#[case] usage: Decimal, #[case] expected: AlertLevel) {
        assert_eq!(AlertLevel::from_usage(usage), expected);
    }

    #[test]
    fn test_alert_levels_are_ordered() {
        assert!(AlertLevel::Normal < AlertLevel::Warning);
        assert!(AlertLevel::Danger < AlertLevel::Critical);
    }
}
