//! Transaction and category query collaborators.

use std::future::Future;

use finlens_shared::types::{CategoryId, UserId};

use super::types::{Category, Transaction, TransactionType};
use crate::error::QueryError;
use crate::period::DateRange;

/// Optional narrowing applied on top of the user and date window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Only this transaction type.
    pub transaction_type: Option<TransactionType>,
    /// Only this category.
    pub category_id: Option<CategoryId>,
}

impl TransactionFilter {
    /// No extra narrowing.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            transaction_type: None,
            category_id: None,
        }
    }

    /// Only transactions of the given type.
    #[must_use]
    pub const fn of_type(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type: Some(transaction_type),
            category_id: None,
        }
    }

    /// Only transactions in the given category.
    #[must_use]
    pub const fn for_category(category_id: CategoryId) -> Self {
        Self {
            transaction_type: None,
            category_id: Some(category_id),
        }
    }

    /// Adds a type restriction.
    #[must_use]
    pub const fn with_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// Returns true if the transaction passes both restrictions.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.transaction_type
            .is_none_or(|t| t == transaction.transaction_type)
            && self.category_id.is_none_or(|c| c == transaction.category_id)
    }
}

/// Supplies a user's transactions.
///
/// Implemented by the store crate; tests substitute in-memory fakes.
pub trait TransactionQuery: Send + Sync {
    /// Returns the user's transactions dated inside `range` (inclusive) that match `filter`.
    fn get_transactions(
        &self,
        user_id: UserId,
        range: DateRange,
        filter: TransactionFilter,
    ) -> impl Future<Output = Result<Vec<Transaction>, QueryError>> + Send;
}

/// Resolves category metadata.
pub trait CategoryQuery: Send + Sync {
    /// Returns the category if it exists and is visible to the user.
    fn get_category(
        &self,
        user_id: UserId,
        category_id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, QueryError>> + Send;
}
