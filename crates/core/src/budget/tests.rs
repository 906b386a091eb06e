//! Property-based tests for budget module.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::performance::{BudgetPerformance, BudgetPerformanceMetrics};
use super::status::{AlertLevel, BudgetStatus};
use super::types::Budget;
use super::variance::{BudgetVariance, VarianceType};
use crate::test_support::{budget, category};
use crate::transaction::TransactionType;

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn fresh_budget(amount: Decimal) -> Budget {
    let food = category(1, "Food", TransactionType::Expense);
    budget(&food, amount, Decimal::ZERO, (2024, 1, 1), (2024, 1, 31))
}

proptest! {
    /// `remaining == amount - spent` holds after any sequence of spend updates.
    #[test]
    fn test_remaining_invariant_after_spends(
        amount in 0i64..10_000_000,
        spends in prop::collection::vec(0i64..1_000_000, 0..20),
    ) {
        let mut b = fresh_budget(cents(amount));
        for spend in spends {
            b.record_spend(cents(spend));
            prop_assert_eq!(b.remaining, b.amount - b.spent);
        }
    }

    /// Variance is budgeted minus spent and its type follows the sign.
    #[test]
    fn test_variance_calculation(
        budgeted in 0i64..1_000_000_000,
        spent in 0i64..1_000_000_000,
    ) {
        let budgeted = Decimal::from(budgeted);
        let spent = Decimal::from(spent);
        let result = BudgetVariance::calculate(budgeted, spent);

        prop_assert_eq!(result.variance, budgeted - spent);
        let expected_type = match result.variance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => VarianceType::Favorable,
            std::cmp::Ordering::Less => VarianceType::Unfavorable,
            std::cmp::Ordering::Equal => VarianceType::None,
        };
        prop_assert_eq!(result.variance_type, expected_type);
    }

    /// A budget is counted over budget exactly when spent exceeds the amount,
    /// and the counts partition the lines.
    #[test]
    fn test_over_under_counts_partition(
        lines in prop::collection::vec((1i64..100_000, 0i64..200_000), 0..15),
    ) {
        let performances: Vec<BudgetPerformance> = lines
            .iter()
            .map(|&(amount, spent)| BudgetPerformance::new(&fresh_budget(cents(amount)), cents(spent)))
            .collect();
        let expected_over = lines.iter().filter(|(amount, spent)| spent > amount).count();

        let metrics = BudgetPerformanceMetrics::from_lines(performances);
        prop_assert_eq!(metrics.categories_over_budget as usize, expected_over);
        prop_assert_eq!(
            (metrics.categories_over_budget + metrics.categories_under_budget) as usize,
            lines.len()
        );
        prop_assert_eq!(metrics.variance, metrics.total_budgeted - metrics.total_spent);
    }

    /// Status and alert bands only ever escalate as usage grows.
    #[test]
    fn test_bands_are_monotonic(low in 0i64..30_000, delta in 0i64..30_000) {
        let low_usage = cents(low);
        let high_usage = cents(low + delta);

        prop_assert!(AlertLevel::from_usage(low_usage) <= AlertLevel::from_usage(high_usage));
        let rank = |s: BudgetStatus| match s {
            BudgetStatus::OnTrack => 0,
            BudgetStatus::Warning => 1,
            BudgetStatus::OverBudget => 2,
        };
        prop_assert!(rank(BudgetStatus::from_usage(low_usage)) <= rank(BudgetStatus::from_usage(high_usage)));
    }
}

#[test]
fn test_status_boundaries_from_ratio() {
    let mut b = fresh_budget(Decimal::from(1000));
    b.record_spend(Decimal::from(790));
    assert_eq!(b.status(), BudgetStatus::OnTrack);

    b.record_spend(Decimal::from(10));
    assert_eq!(b.status(), BudgetStatus::Warning);

    b.record_spend(Decimal::from(200));
    assert_eq!(b.status(), BudgetStatus::OverBudget);
}
