//! Period error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised while resolving a date window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Start is after end.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start of the rejected window.
        start: DateTime<Utc>,
        /// End of the rejected window.
        end: DateTime<Utc>,
    },

    /// Month outside 1-12.
    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Quarter outside 1-4.
    #[error("invalid quarter: {0} (expected 1-4)")]
    InvalidQuarter(u32),

    /// Calendar arithmetic left the representable date range.
    #[error("date out of supported range")]
    OutOfRange,
}

impl From<PeriodError> for finlens_shared::AppError {
    fn from(err: PeriodError) -> Self {
        Self::Validation(err.to_string())
    }
}
