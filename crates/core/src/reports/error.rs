//! Report error types.

use finlens_shared::AppError;
use thiserror::Error;

use crate::error::QueryError;
use crate::period::PeriodError;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The requested period could not be resolved.
    #[error(transparent)]
    InvalidPeriod(#[from] PeriodError),

    /// A parameter required by the report type was not supplied.
    #[error("missing report parameter: {0}")]
    MissingParameter(&'static str),

    /// A collaborator query failed.
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ReportError {
    /// Returns true for input errors detected before any query.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPeriod(_) | Self::MissingParameter(_))
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidPeriod(e) => e.into(),
            ReportError::MissingParameter(name) => {
                Self::Validation(format!("missing report parameter: {name}"))
            }
            ReportError::Query(e) => e.into(),
        }
    }
}
