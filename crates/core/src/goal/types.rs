//! Goal data types.

use chrono::NaiveDate;
use finlens_shared::types::{GoalId, UserId, percent_of};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A savings target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialGoal {
    /// Goal ID.
    pub id: GoalId,
    /// Owning user.
    pub user_id: UserId,
    /// Goal name.
    pub name: String,
    /// Amount to reach.
    pub target_amount: Decimal,
    /// Amount saved so far.
    pub current_amount: Decimal,
    /// Optional deadline.
    pub target_date: Option<NaiveDate>,
    /// Whether the goal is still being pursued.
    pub is_active: bool,
}

/// Progress toward a goal as of a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal ID.
    pub goal_id: GoalId,
    /// Goal name.
    pub name: String,
    /// Amount to reach.
    pub target_amount: Decimal,
    /// Amount saved so far.
    pub current_amount: Decimal,
    /// Amount still missing, never negative.
    pub remaining_amount: Decimal,
    /// `min(100, current / target * 100)`, 0 when the target is 0.
    pub progress_percentage: Decimal,
    /// Optional deadline.
    pub target_date: Option<NaiveDate>,
    /// Days until the deadline, negative once it has passed.
    pub days_remaining: Option<i64>,
    /// True once the target has been reached.
    pub is_completed: bool,
}

impl GoalProgress {
    /// Computes progress for `goal` as of `today`.
    #[must_use]
    pub fn new(goal: &FinancialGoal, today: NaiveDate) -> Self {
        let progress_percentage = if goal.target_amount <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            percent_of(goal.current_amount, goal.target_amount).min(Decimal::ONE_HUNDRED)
        };

        Self {
            goal_id: goal.id,
            name: goal.name.clone(),
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            remaining_amount: (goal.target_amount - goal.current_amount).max(Decimal::ZERO),
            progress_percentage,
            target_date: goal.target_date,
            days_remaining: goal.target_date.map(|d| (d - today).num_days()),
            is_completed: goal.target_amount > Decimal::ZERO
                && goal.current_amount >= goal.target_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn goal(target: Decimal, current: Decimal) -> FinancialGoal {
        FinancialGoal {
            id: GoalId::new(),
            user_id: UserId::new(),
            name: "Emergency fund".to_string(),
            target_amount: target,
            current_amount: current,
            target_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            is_active: true,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
    }

    #[test]
    fn test_partial_progress() {
        let progress = GoalProgress::new(&goal(dec!(10000), dec!(2500)), today());
        assert_eq!(progress.progress_percentage, dec!(25));
        assert_eq!(progress.remaining_amount, dec!(7500));
        assert_eq!(progress.days_remaining, Some(30));
        assert!(!progress.is_completed);
    }

    #[test]
    fn test_progress_caps_at_one_hundred() {
        let progress = GoalProgress::new(&goal(dec!(1000), dec!(1500)), today());
        assert_eq!(progress.progress_percentage, dec!(100));
        assert_eq!(progress.remaining_amount, Decimal::ZERO);
        assert!(progress.is_completed);
    }

    #[test]
    fn test_zero_target() {
        let progress = GoalProgress::new(&goal(Decimal::ZERO, dec!(50)), today());
        assert_eq!(progress.progress_percentage, Decimal::ZERO);
        assert!(!progress.is_completed);
    }
}
