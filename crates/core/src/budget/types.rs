//! Budget data types.

use chrono::NaiveDate;
use finlens_shared::types::{BudgetId, CategoryId, UserId, round_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;
use super::status::BudgetStatus;
use super::variance::usage_percent;
use crate::period::DateRange;
use crate::transaction::Transaction;

/// Budget recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPeriod {
    /// Resets every week.
    Weekly,
    /// Resets every month.
    Monthly,
    /// Resets every year.
    Yearly,
}

/// A spending limit for one category over a date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Owning user.
    pub user_id: UserId,
    /// Category the budget limits.
    pub category_id: CategoryId,
    /// Category name, preloaded by the collaborator.
    pub category_name: String,
    /// Budgeted amount.
    pub amount: Decimal,
    /// Recurrence.
    pub period: BudgetPeriod,
    /// First day covered.
    pub start_date: NaiveDate,
    /// Last day covered.
    pub end_date: NaiveDate,
    /// Amount spent so far, maintained by the write path.
    pub spent: Decimal,
    /// Always `amount - spent`.
    pub remaining: Decimal,
    /// Inactive budgets are ignored by evaluation and alerts.
    pub is_active: bool,
}

/// Input for creating a budget.
#[derive(Debug, Clone)]
pub struct NewBudget {
    /// Owning user.
    pub user_id: UserId,
    /// Category the budget limits.
    pub category_id: CategoryId,
    /// Category name.
    pub category_name: String,
    /// Budgeted amount.
    pub amount: Decimal,
    /// Recurrence.
    pub period: BudgetPeriod,
    /// First day covered.
    pub start_date: NaiveDate,
    /// Last day covered.
    pub end_date: NaiveDate,
}

impl Budget {
    /// Creates an active budget with nothing spent.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NegativeAmount` if the amount is negative.
    /// Returns `BudgetError::InvalidWindow` if the window ends before it starts.
    pub fn new(input: NewBudget) -> Result<Self, BudgetError> {
        if input.amount < Decimal::ZERO {
            return Err(BudgetError::NegativeAmount);
        }
        if input.start_date > input.end_date {
            return Err(BudgetError::InvalidWindow {
                start: input.start_date,
                end: input.end_date,
            });
        }

        Ok(Self {
            id: BudgetId::new(),
            user_id: input.user_id,
            category_id: input.category_id,
            category_name: input.category_name,
            amount: input.amount,
            period: input.period,
            start_date: input.start_date,
            end_date: input.end_date,
            spent: Decimal::ZERO,
            remaining: input.amount,
            is_active: true,
        })
    }

    /// The budget's window, or `None` if its dates are inverted.
    #[must_use]
    pub fn window(&self) -> Option<DateRange> {
        DateRange::from_dates(self.start_date, self.end_date).ok()
    }

    /// Returns true if an expense transaction counts toward this budget.
    #[must_use]
    pub fn tracks(&self, transaction: &Transaction) -> bool {
        transaction.is_expense()
            && transaction.category_id == self.category_id
            && self.window().is_some_and(|w| w.contains(transaction.date))
    }

    /// Adds to the spent amount and re-establishes `remaining`.
    pub fn record_spend(&mut self, amount: Decimal) {
        self.spent = round_amount(self.spent + amount);
        self.remaining = self.amount - self.spent;
    }

    /// Re-derives `spent` from the tracked transactions in `transactions`.
    pub fn recalculate<'a>(&mut self, transactions: impl IntoIterator<Item = &'a Transaction>) {
        let spent: Decimal = transactions
            .into_iter()
            .filter(|tx| self.tracks(tx))
            .map(Transaction::magnitude)
            .sum();
        self.spent = round_amount(spent);
        self.remaining = self.amount - self.spent;
    }

    /// Share of the budget used, as a rounded percentage.
    #[must_use]
    pub fn usage_percent(&self) -> Decimal {
        usage_percent(self.spent, self.amount)
    }

    /// Status band for the current usage.
    #[must_use]
    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_usage(self.usage_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use finlens_shared::types::TransactionId;
    use rust_decimal_macros::dec;

    use crate::transaction::TransactionType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn groceries_budget(amount: Decimal) -> Budget {
        Budget::new(NewBudget {
            user_id: UserId::from_u128(1),
            category_id: CategoryId::from_u128(10),
            category_name: "Groceries".to_string(),
            amount,
            period: BudgetPeriod::Monthly,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 31),
        })
        .unwrap()
    }

    #[test]
    fn test_new_budget_starts_unspent() {
        let budget = groceries_budget(dec!(500));
        assert_eq!(budget.spent, Decimal::ZERO);
        assert_eq!(budget.remaining, dec!(500));
        assert!(budget.is_active);
    }

    #[test]
    fn test_new_budget_validation() {
        let mut input = NewBudget {
            user_id: UserId::new(),
            category_id: CategoryId::new(),
            category_name: "Rent".to_string(),
            amount: dec!(-1),
            period: BudgetPeriod::Monthly,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 31),
        };
        assert_eq!(
            Budget::new(input.clone()).unwrap_err(),
            BudgetError::NegativeAmount
        );

        input.amount = dec!(100);
        input.end_date = date(2023, 12, 31);
        assert!(matches!(
            Budget::new(input),
            Err(BudgetError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_record_spend_keeps_remaining_in_sync() {
        let mut budget = groceries_budget(dec!(500));
        budget.record_spend(dec!(120.25));
        budget.record_spend(dec!(400));
        assert_eq!(budget.spent, dec!(520.25));
        assert_eq!(budget.remaining, dec!(-20.25));
        assert_eq!(budget.status(), BudgetStatus::OverBudget);
    }

    #[test]
    fn test_recalculate_counts_only_tracked_expenses() {
        let mut budget = groceries_budget(dec!(500));
        let base = Transaction {
            id: TransactionId::new(),
            user_id: budget.user_id,
            amount: dec!(100),
            transaction_type: TransactionType::Expense,
            category_id: budget.category_id,
            category_name: "Groceries".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
            description: String::new(),
        };
        let outside = Transaction {
            date: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            ..base.clone()
        };
        let other_category = Transaction {
            category_id: CategoryId::from_u128(99),
            ..base.clone()
        };
        let income = Transaction {
            transaction_type: TransactionType::Income,
            ..base.clone()
        };
        let last_instant = Transaction {
            amount: dec!(50),
            date: Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap(),
            ..base.clone()
        };

        budget.recalculate(&[base, outside, other_category, income, last_instant]);
        assert_eq!(budget.spent, dec!(150));
        assert_eq!(budget.remaining, dec!(350));
    }

    #[test]
    fn test_usage_percent_zero_amount() {
        let mut budget = groceries_budget(Decimal::ZERO);
        budget.record_spend(dec!(10));
        assert_eq!(budget.usage_percent(), Decimal::ZERO);
    }
}
