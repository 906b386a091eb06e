//! Property-based tests for analytics module.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::breakdown::category_breakdown;
use super::health::{FinancialHealthScore, HealthInputs};
use super::metrics::FinancialMetrics;
use super::trend::{month_windows, week_windows};
use crate::period::DateRange;
use crate::test_support::{at, category, date, expense, income};
use crate::transaction::{Transaction, TransactionType};

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn build_transactions(raw: &[(u8, i64, u32)]) -> Vec<Transaction> {
    raw.iter()
        .map(|&(cat, amount, day)| {
            let c = category(u128::from(cat), &format!("C{cat}"), TransactionType::Expense);
            expense(cents(amount), &c, at(2024, 1, day))
        })
        .collect()
}

proptest! {
    /// Breakdown percentages sum to 100 within rounding tolerance.
    #[test]
    fn test_percentages_sum_to_hundred(
        raw in prop::collection::vec((1u8..8, 1i64..1_000_000, 1u32..29), 1..40),
    ) {
        let breakdown = category_breakdown(&build_transactions(&raw));
        let sum: Decimal = breakdown.iter().map(|m| m.percentage_of_total).sum();
        let tolerance = Decimal::new(1, 2) * Decimal::from(breakdown.len() as u64);
        prop_assert!((sum - Decimal::ONE_HUNDRED).abs() <= tolerance, "sum was {}", sum);
    }

    /// Breakdown is sorted by total descending and ties by ascending ID.
    #[test]
    fn test_breakdown_ordering(
        raw in prop::collection::vec((1u8..8, 1i64..500, 1u32..29), 0..40),
    ) {
        let breakdown = category_breakdown(&build_transactions(&raw));
        for pair in breakdown.windows(2) {
            prop_assert!(pair[0].total_amount >= pair[1].total_amount);
            if pair[0].total_amount == pair[1].total_amount {
                prop_assert!(pair[0].category_id < pair[1].category_id);
            }
        }
        let counted: u64 = breakdown.iter().map(|m| m.transaction_count).sum();
        prop_assert_eq!(counted, raw.len() as u64);
    }

    /// The transaction count matches the aggregated set and net is income minus expenses.
    #[test]
    fn test_metrics_consistency(
        incomes in prop::collection::vec(1i64..1_000_000, 0..10),
        expenses in prop::collection::vec(1i64..1_000_000, 0..10),
    ) {
        let salary = category(1, "Salary", TransactionType::Income);
        let food = category(2, "Food", TransactionType::Expense);
        let mut transactions: Vec<Transaction> =
            incomes.iter().map(|&a| income(cents(a), &salary, at(2024, 1, 10))).collect();
        transactions.extend(expenses.iter().map(|&a| expense(cents(a), &food, at(2024, 1, 11))));

        let metrics = FinancialMetrics::from_transactions(
            "monthly",
            DateRange::month(2024, 1).unwrap(),
            &transactions,
        );
        prop_assert_eq!(metrics.transaction_count, transactions.len() as u64);
        prop_assert_eq!(metrics.net_income, metrics.total_income - metrics.total_expenses);
        if metrics.total_income.is_zero() {
            prop_assert_eq!(metrics.savings_rate, Decimal::ZERO);
        }
    }

    /// Sub-period windows tile the range without gaps or overlap.
    #[test]
    fn test_windows_tile_range(start_offset in 0u64..400, length in 0u64..200) {
        let first = date(2023, 1, 1) + chrono::Days::new(start_offset);
        let last = first + chrono::Days::new(length);
        let range = DateRange::from_dates(first, last).unwrap();

        for windows in [month_windows(range), week_windows(range)] {
            prop_assert!(!windows.is_empty());
            prop_assert_eq!(windows[0].1.start, range.start);
            prop_assert_eq!(windows[windows.len() - 1].1.end, range.end);
            for pair in windows.windows(2) {
                prop_assert_eq!(pair[0].1.end + chrono::TimeDelta::nanoseconds(1), pair[1].1.start);
            }
        }
    }

    /// The overall health score is the sum of its components and stays within 0-100.
    #[test]
    fn test_health_score_bounds(
        savings in -10_000i64..10_000,
        ratio in 0i64..20_000,
        variance in -10_000i64..10_000,
    ) {
        let score = FinancialHealthScore::calculate(&HealthInputs {
            savings_rate: cents(savings * 10),
            expense_ratio: cents(ratio * 10),
            budget_variance_percentage: cents(variance * 10),
            ..HealthInputs::default()
        });
        prop_assert_eq!(score.overall_score, score.savings_score + score.expense_score + score.budget_score);
        prop_assert!(score.overall_score <= 100);
    }
}
