//! Store error types.

use std::path::PathBuf;

use finlens_core::budget::BudgetError;
use finlens_shared::AppError;
use finlens_shared::types::CategoryId;
use thiserror::Error;

/// Errors raised while loading or mutating the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a snapshot file failed.
    #[error("Snapshot I/O error at {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON for the expected shape.
    #[error("Invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// The referenced category does not exist for the user.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// The transaction type does not match its category.
    #[error("Category {category} collects {expected} transactions")]
    CategoryTypeMismatch {
        /// Category name.
        category: String,
        /// Type the category collects.
        expected: String,
    },

    /// A budget failed validation.
    #[error(transparent)]
    Budget(#[from] BudgetError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CategoryNotFound(_) => Self::NotFound(err.to_string()),
            StoreError::CategoryTypeMismatch { .. } | StoreError::Budget(_) => {
                Self::Validation(err.to_string())
            }
            StoreError::Io { .. } | StoreError::Parse(_) => Self::Internal(err.to_string()),
        }
    }
}
