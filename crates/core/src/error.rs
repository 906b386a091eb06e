//! Collaborator error types.

use finlens_shared::AppError;
use thiserror::Error;

/// Failure reported by a query collaborator.
///
/// The engine never retries or rewraps these; they reach the caller with their
/// original message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The backing data source could not be reached.
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// The query was rejected or failed while running.
    #[error("query failed: {0}")]
    Failed(String),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        Self::DataSource(err.to_string())
    }
}
