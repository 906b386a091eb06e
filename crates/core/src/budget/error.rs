//! Budget error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Budget window ends before it starts.
    #[error("Invalid budget window: start {start} is after end {end}")]
    InvalidWindow {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}
