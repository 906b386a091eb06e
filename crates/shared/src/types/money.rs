//! Decimal rounding policy for amounts and percentages.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every derived amount and percentage is rounded half-to-even to two decimal
//! places before it is compared against a threshold or returned to a caller.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for monetary amounts.
pub const AMOUNT_SCALE: u32 = 2;

/// Decimal places kept for percentages.
pub const PERCENT_SCALE: u32 = 2;

fn round_to(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
    // Fixed scale so that 50% renders as "50.00" like 33.33% does.
    rounded.rescale(scale);
    rounded
}

/// Rounds a monetary amount to two decimal places (banker's rounding).
#[must_use]
pub fn round_amount(value: Decimal) -> Decimal {
    round_to(value, AMOUNT_SCALE)
}

/// Rounds a percentage to two decimal places (banker's rounding).
#[must_use]
pub fn round_percent(value: Decimal) -> Decimal {
    round_to(value, PERCENT_SCALE)
}

/// Returns `part / whole * 100`, rounded, or zero when `whole` is zero.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    round_percent(part / whole * Decimal::ONE_HUNDRED)
}
