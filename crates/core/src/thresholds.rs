//! Threshold constants shared by the budget evaluator, health scorer,
//! report insights and dashboard.
//!
//! All percentage thresholds are compared against values already rounded
//! half-to-even to two decimal places.

use rust_decimal::Decimal;

const fn percent(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

const fn negative_percent(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, true, 0)
}

// Budget status bands (share of the budget used).

/// Usage at or above which a budget is in `warning`.
pub const BUDGET_WARNING_PERCENT: Decimal = percent(80);
/// Usage at or above which a budget is `over_budget`.
pub const BUDGET_OVER_PERCENT: Decimal = percent(100);

// Alert levels.

/// Usage at or above which an alert is emitted (`warning`).
pub const ALERT_WARNING_PERCENT: Decimal = percent(60);
/// Usage at or above which an alert escalates to `danger`.
pub const ALERT_DANGER_PERCENT: Decimal = percent(80);
/// Usage at or above which an alert escalates to `critical`.
pub const ALERT_CRITICAL_PERCENT: Decimal = percent(100);

// Period-over-period movement (also used for the cash-flow trend).

/// Current above `previous * 1.1` is an increase.
pub const TREND_INCREASE_FACTOR: Decimal = Decimal::from_parts(11, 0, 0, false, 1);
/// Current below `previous * 0.9` is a decrease.
pub const TREND_DECREASE_FACTOR: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

// Health score: (minimum savings rate %, points), checked in order.

/// Savings-rate score bands.
pub const SAVINGS_SCORE_BANDS: [(Decimal, u32); 4] = [
    (percent(20), 40),
    (percent(15), 30),
    (percent(10), 20),
    (percent(5), 10),
];

/// Expense-ratio score bands: (maximum expense ratio %, points).
pub const EXPENSE_SCORE_BANDS: [(Decimal, u32); 3] =
    [(percent(50), 30), (percent(70), 20), (percent(85), 10)];

/// Budget-variance score bands: (lowest variance %, highest variance %, points).
pub const BUDGET_SCORE_BANDS: [(Decimal, Decimal, u32); 3] = [
    (negative_percent(10), percent(5), 30),
    (negative_percent(20), percent(10), 20),
    (negative_percent(30), percent(15), 10),
];

/// Overall score at or above which health is `excellent`.
pub const HEALTH_EXCELLENT_SCORE: u32 = 80;
/// Overall score at or above which health is `good`.
pub const HEALTH_GOOD_SCORE: u32 = 60;
/// Overall score at or above which health is `fair`.
pub const HEALTH_FAIR_SCORE: u32 = 40;

// Insight and recommendation rules.

/// Savings rate considered strong.
pub const STRONG_SAVINGS_RATE: Decimal = percent(20);
/// Savings rate below which saving more is recommended.
pub const LOW_SAVINGS_RATE: Decimal = percent(10);
/// Expense ratio above which cutting costs is recommended.
pub const HIGH_EXPENSE_RATIO: Decimal = percent(80);
/// Budget performance score above which budgeting is "great".
pub const BUDGET_PERFORMANCE_GREAT: Decimal = percent(80);
/// Budget performance score above which budgeting is "good".
pub const BUDGET_PERFORMANCE_GOOD: Decimal = percent(60);
/// Share of expenses above which a category is flagged as concentrated.
pub const CATEGORY_CONCENTRATION_PERCENT: Decimal = percent(30);
/// Share of expenses above which reducing a category is recommended.
pub const CATEGORY_REDUCTION_PERCENT: Decimal = percent(25);

// Dashboard cash flow: share of the first half's magnitude the second half
// must move by to count as positive or negative.

/// Cash-flow trend margin (10%).
pub const CASH_FLOW_TREND_MARGIN: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

// List sizes.

/// Categories listed in top-N breakdowns.
pub const TOP_CATEGORY_LIMIT: usize = 5;
/// Transactions listed on the dashboard.
pub const RECENT_TRANSACTION_LIMIT: usize = 10;
