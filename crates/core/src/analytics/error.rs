//! Analytics error types.

use finlens_shared::AppError;
use finlens_shared::types::CategoryId;
use thiserror::Error;

use crate::error::QueryError;
use crate::period::PeriodError;

/// Errors raised by the analytics operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// The requested window is invalid.
    #[error(transparent)]
    InvalidPeriod(#[from] PeriodError),

    /// The category lookup found nothing.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// A collaborator query failed.
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::InvalidPeriod(e) => e.into(),
            AnalyticsError::CategoryNotFound(id) => Self::NotFound(format!("category not found: {id}")),
            AnalyticsError::Query(e) => e.into(),
        }
    }
}
