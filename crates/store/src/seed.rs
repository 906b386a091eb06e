//! Default categories and demo data.

use chrono::{Days, Months, NaiveDate, TimeDelta};
use finlens_core::budget::{Budget, BudgetPeriod, NewBudget};
use finlens_core::goal::FinancialGoal;
use finlens_core::period::{first_day_of_month, last_day_of_month, start_of_day};
use finlens_core::transaction::{Category, Transaction, TransactionType};
use finlens_shared::types::{CategoryId, GoalId, TransactionId, UserId};
use rust_decimal::Decimal;

use crate::snapshot::Snapshot;

const DEFAULT_CATEGORIES: [(&str, TransactionType); 13] = [
    ("Salary", TransactionType::Income),
    ("Freelance", TransactionType::Income),
    ("Investments", TransactionType::Income),
    ("Other Income", TransactionType::Income),
    ("Food & Dining", TransactionType::Expense),
    ("Transportation", TransactionType::Expense),
    ("Shopping", TransactionType::Expense),
    ("Entertainment", TransactionType::Expense),
    ("Bills & Utilities", TransactionType::Expense),
    ("Healthcare", TransactionType::Expense),
    ("Education", TransactionType::Expense),
    ("Travel", TransactionType::Expense),
    ("Other Expenses", TransactionType::Expense),
];

/// The system-seeded categories, with stable IDs 1 to 13.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .zip(1u128..)
        .map(|(&(name, category_type), id)| Category {
            id: CategoryId::from_u128(id),
            user_id: None,
            name: name.to_string(),
            category_type,
            is_default: true,
        })
        .collect()
}

// (category, day of month, amount in cents, description)
const MONTHLY_PATTERN: [(&str, u64, i64, &str); 12] = [
    ("Salary", 1, 500_000, "Monthly salary"),
    ("Bills & Utilities", 3, 150_000, "Rent"),
    ("Food & Dining", 4, 8_540, "Groceries"),
    ("Transportation", 6, 6_000, "Transit pass top-up"),
    ("Food & Dining", 11, 9_215, "Groceries"),
    ("Entertainment", 13, 4_800, "Concert tickets"),
    ("Freelance", 15, 80_000, "Freelance project"),
    ("Food & Dining", 18, 7_630, "Groceries"),
    ("Shopping", 20, 12_999, "Clothing"),
    ("Bills & Utilities", 21, 11_250, "Electricity and internet"),
    ("Food & Dining", 25, 10_480, "Groceries and dinner out"),
    ("Healthcare", 27, 3_500, "Pharmacy"),
];

const DEMO_BUDGETS: [(&str, i64); 4] = [
    ("Food & Dining", 40_000),
    ("Transportation", 8_000),
    ("Entertainment", 5_000),
    ("Shopping", 15_000),
];

/// Three months of demo activity for `user_id`, ending on `today`.
///
/// Budgets cover the current month with spent amounts derived from the
/// generated transactions.
#[must_use]
pub fn demo_snapshot(user_id: UserId, today: NaiveDate) -> Snapshot {
    let categories = default_categories();
    let find = |name: &str| categories.iter().find(|c| c.name == name);

    let this_month = first_day_of_month(today);
    let mut transactions = Vec::new();
    for offset in (0..3).rev() {
        let month_start = this_month - Months::new(offset);
        for &(name, day, cents, description) in &MONTHLY_PATTERN {
            let date = month_start + Days::new(day - 1);
            let Some(category) = find(name) else { continue };
            if date > today {
                continue;
            }
            transactions.push(Transaction {
                id: TransactionId::new(),
                user_id,
                amount: Decimal::new(cents, 2),
                transaction_type: category.category_type,
                category_id: category.id,
                category_name: category.name.clone(),
                date: start_of_day(date) + TimeDelta::hours(12),
                description: description.to_string(),
            });
        }
    }

    let budgets = DEMO_BUDGETS
        .iter()
        .filter_map(|&(name, cents)| {
            let category = find(name)?;
            let mut budget = Budget::new(NewBudget {
                user_id,
                category_id: category.id,
                category_name: category.name.clone(),
                amount: Decimal::new(cents, 2),
                period: BudgetPeriod::Monthly,
                start_date: this_month,
                end_date: last_day_of_month(today),
            })
            .ok()?;
            budget.recalculate(&transactions);
            Some(budget)
        })
        .collect();

    let goals = vec![
        FinancialGoal {
            id: GoalId::new(),
            user_id,
            name: "Emergency fund".to_string(),
            target_amount: Decimal::from(10_000),
            current_amount: Decimal::from(4_200),
            target_date: today.checked_add_days(Days::new(180)),
            is_active: true,
        },
        FinancialGoal {
            id: GoalId::new(),
            user_id,
            name: "Summer vacation".to_string(),
            target_amount: Decimal::from(3_000),
            current_amount: Decimal::from(1_250),
            target_date: today.checked_add_months(Months::new(9)),
            is_active: true,
        },
    ];

    Snapshot {
        categories,
        transactions,
        budgets,
        goals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_categories() {
        let categories = default_categories();
        assert_eq!(categories.len(), 13);
        assert_eq!(
            categories
                .iter()
                .filter(|c| c.category_type == TransactionType::Income)
                .count(),
            4
        );
        assert!(categories.iter().all(|c| c.is_default && c.user_id.is_none()));
        assert_eq!(categories[4].name, "Food & Dining");
        assert_eq!(categories[4].id, CategoryId::from_u128(5));
    }

    #[test]
    fn test_demo_snapshot_stops_at_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let snapshot = demo_snapshot(UserId::from_u128(1), today);

        // Two full months plus the June entries up to the 12th.
        assert_eq!(snapshot.transactions.len(), 12 * 2 + 5);
        assert!(snapshot.transactions.iter().all(|tx| tx.date.date_naive() <= today));
        assert_eq!(snapshot.budgets.len(), 4);
        assert_eq!(snapshot.goals.len(), 2);
    }

    #[test]
    fn test_demo_budgets_track_current_month() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let snapshot = demo_snapshot(UserId::from_u128(1), today);
        let food = snapshot
            .budgets
            .iter()
            .find(|b| b.category_name == "Food & Dining")
            .unwrap();

        // June 4th and 11th groceries.
        assert_eq!(food.spent, dec!(177.55));
        assert_eq!(food.remaining, food.amount - food.spent);
        assert_eq!(food.end_date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }
}
