//! Per-category aggregation and trend classification.

use std::collections::BTreeMap;

use finlens_shared::types::{CategoryId, percent_of, round_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::thresholds::{TREND_DECREASE_FACTOR, TREND_INCREASE_FACTOR};
use crate::transaction::{Transaction, TransactionType};

/// Direction of change between two windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// More than 10% above the previous window.
    Increasing,
    /// More than 10% below the previous window.
    Decreasing,
    /// Within 10% of the previous window.
    Stable,
}

impl TrendDirection {
    /// Classifies `current` against `previous`.
    ///
    /// A zero previous value with a positive current one counts as increasing.
    #[must_use]
    pub fn classify(current: Decimal, previous: Decimal) -> Self {
        if current > previous * TREND_INCREASE_FACTOR {
            Self::Increasing
        } else if current < previous * TREND_DECREASE_FACTOR {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

/// Aggregate of one category's transactions within a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMetric {
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name.
    pub category_name: String,
    /// Category type.
    pub category_type: TransactionType,
    /// Sum of magnitudes.
    pub total_amount: Decimal,
    /// Number of transactions.
    pub transaction_count: u64,
    /// Mean magnitude.
    pub average_amount: Decimal,
    /// Share of the breakdown's grand total.
    pub percentage_of_total: Decimal,
    /// Change against the previous window, `stable` when none was compared.
    pub trend: TrendDirection,
}

struct Accumulator<'a> {
    name: &'a str,
    category_type: TransactionType,
    total: Decimal,
    count: u64,
}

fn accumulate(transactions: &[Transaction]) -> BTreeMap<CategoryId, Accumulator<'_>> {
    let mut by_category = BTreeMap::new();
    for tx in transactions {
        let entry = by_category.entry(tx.category_id).or_insert_with(|| Accumulator {
            name: &tx.category_name,
            category_type: tx.transaction_type,
            total: Decimal::ZERO,
            count: 0,
        });
        entry.total += tx.magnitude();
        entry.count += 1;
    }
    by_category
}

/// Groups transactions by category, sorted by total descending.
///
/// Ties keep ascending category ID order. Percentages are shares of the grand
/// total of `transactions`, so callers wanting per-type shares should pass a
/// single type (see [`category_breakdown_by_type`]).
#[must_use]
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryMetric> {
    let grand_total: Decimal = transactions.iter().map(Transaction::magnitude).sum();

    let mut metrics: Vec<CategoryMetric> = accumulate(transactions)
        .into_iter()
        .map(|(category_id, acc)| CategoryMetric {
            category_id,
            category_name: acc.name.to_string(),
            category_type: acc.category_type,
            total_amount: acc.total,
            transaction_count: acc.count,
            average_amount: round_amount(acc.total / Decimal::from(acc.count)),
            percentage_of_total: percent_of(acc.total, grand_total),
            trend: TrendDirection::Stable,
        })
        .collect();

    // Stable sort: equal totals stay in ID order.
    metrics.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
    metrics
}

/// Breakdown of a single transaction type.
#[must_use]
pub fn category_breakdown_by_type(
    transactions: &[Transaction],
    transaction_type: TransactionType,
) -> Vec<CategoryMetric> {
    let of_type: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| tx.transaction_type == transaction_type)
        .cloned()
        .collect();
    category_breakdown(&of_type)
}

/// Breakdown of `current` with each category's trend classified against its
/// total in `previous`.
#[must_use]
pub fn category_breakdown_against(
    current: &[Transaction],
    previous: &[Transaction],
) -> Vec<CategoryMetric> {
    let previous_totals = accumulate(previous);
    let mut metrics = category_breakdown(current);
    for metric in &mut metrics {
        let before = previous_totals
            .get(&metric.category_id)
            .map_or(Decimal::ZERO, |acc| acc.total);
        metric.trend = TrendDirection::classify(metric.total_amount, before);
    }
    metrics
}

/// The first `limit` entries of a sorted breakdown.
#[must_use]
pub fn top_categories(breakdown: &[CategoryMetric], limit: usize) -> Vec<CategoryMetric> {
    breakdown.iter().take(limit).cloned().collect()
}
