//! Quick statistics over the dashboard window.

use finlens_shared::types::round_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::thresholds::CASH_FLOW_TREND_MARGIN;
use crate::transaction::Transaction;

/// Direction of net cash flow across the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashFlowTrend {
    /// Second half nets more than 10% above the first.
    Positive,
    /// Second half nets more than 10% below the first.
    Negative,
    /// Neither.
    Stable,
}

impl CashFlowTrend {
    /// Compares the signed net flow of the second half of `transactions`
    /// against the first half. Expects chronological order.
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        if transactions.len() < 2 {
            return Self::Stable;
        }
        let (first, second) = transactions.split_at(transactions.len() / 2);
        let first: Decimal = first.iter().map(Transaction::signed_flow).sum();
        let second: Decimal = second.iter().map(Transaction::signed_flow).sum();

        let margin = first.abs() * CASH_FLOW_TREND_MARGIN;
        if second > first + margin {
            Self::Positive
        } else if second < first - margin {
            Self::Negative
        } else {
            Self::Stable
        }
    }
}

/// At-a-glance figures for the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStats {
    /// Transactions in the window.
    pub transaction_count: u64,
    /// Mean transaction magnitude.
    pub average_transaction: Decimal,
    /// Largest expense magnitude, 0 without expenses.
    pub largest_expense: Decimal,
    /// Category with the most transactions; earliest seen wins ties.
    pub most_used_category: Option<String>,
    /// Net cash-flow direction.
    pub cash_flow_trend: CashFlowTrend,
}

impl QuickStats {
    /// Computes stats over chronologically ordered `transactions`.
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let count = transactions.len() as u64;
        let total: Decimal = transactions.iter().map(Transaction::magnitude).sum();

        Self {
            transaction_count: count,
            average_transaction: if count == 0 {
                Decimal::ZERO
            } else {
                round_amount(total / Decimal::from(count))
            },
            largest_expense: transactions
                .iter()
                .filter(|tx| tx.is_expense())
                .map(Transaction::magnitude)
                .max()
                .unwrap_or(Decimal::ZERO),
            most_used_category: most_used_category(transactions),
            cash_flow_trend: CashFlowTrend::from_transactions(transactions),
        }
    }
}

fn most_used_category(transactions: &[Transaction]) -> Option<String> {
    // (first transaction of the category, count) in first-seen order.
    let mut seen: Vec<(&Transaction, u64)> = Vec::new();
    for tx in transactions {
        match seen.iter_mut().find(|(first, _)| first.category_id == tx.category_id) {
            Some((_, count)) => *count += 1,
            None => seen.push((tx, 1)),
        }
    }

    let mut best: Option<(&Transaction, u64)> = None;
    for (tx, count) in seen {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((tx, count));
        }
    }
    best.map(|(tx, _)| tx.category_name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, category, expense, income};
    use crate::transaction::TransactionType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cash_flow_needs_two_transactions() {
        let salary = category(1, "Salary", TransactionType::Income);
        assert_eq!(CashFlowTrend::from_transactions(&[]), CashFlowTrend::Stable);
        assert_eq!(
            CashFlowTrend::from_transactions(&[income(dec!(100), &salary, at(2024, 1, 1))]),
            CashFlowTrend::Stable
        );
    }

    #[test]
    fn test_cash_flow_direction() {
        let salary = category(1, "Salary", TransactionType::Income);
        let food = category(2, "Food", TransactionType::Expense);

        let improving = [
            expense(dec!(100), &food, at(2024, 1, 1)),
            income(dec!(500), &salary, at(2024, 1, 10)),
        ];
        assert_eq!(CashFlowTrend::from_transactions(&improving), CashFlowTrend::Positive);

        let worsening = [
            income(dec!(500), &salary, at(2024, 1, 1)),
            expense(dec!(100), &food, at(2024, 1, 10)),
        ];
        assert_eq!(CashFlowTrend::from_transactions(&worsening), CashFlowTrend::Negative);

        let flat = [
            income(dec!(500), &salary, at(2024, 1, 1)),
            income(dec!(520), &salary, at(2024, 1, 10)),
        ];
        assert_eq!(CashFlowTrend::from_transactions(&flat), CashFlowTrend::Stable);
    }

    #[test]
    fn test_quick_stats() {
        let salary = category(1, "Salary", TransactionType::Income);
        let food = category(2, "Food", TransactionType::Expense);
        let fun = category(3, "Fun", TransactionType::Expense);
        let transactions = [
            expense(dec!(20), &fun, at(2024, 1, 1)),
            expense(dec!(30), &food, at(2024, 1, 2)),
            expense(dec!(45), &food, at(2024, 1, 3)),
            expense(dec!(80), &fun, at(2024, 1, 4)),
            income(dec!(1000), &salary, at(2024, 1, 5)),
        ];

        let stats = QuickStats::from_transactions(&transactions);
        assert_eq!(stats.transaction_count, 5);
        assert_eq!(stats.average_transaction, dec!(235));
        assert_eq!(stats.largest_expense, dec!(80));
        // Fun and Food tie on two each; Fun was seen first.
        assert_eq!(stats.most_used_category.as_deref(), Some("Fun"));
    }

    #[test]
    fn test_quick_stats_empty() {
        let stats = QuickStats::from_transactions(&[]);
        assert_eq!(stats.transaction_count, 0);
        assert_eq!(stats.average_transaction, Decimal::ZERO);
        assert_eq!(stats.largest_expense, Decimal::ZERO);
        assert_eq!(stats.most_used_category, None);
        assert_eq!(stats.cash_flow_trend, CashFlowTrend::Stable);
    }
}
