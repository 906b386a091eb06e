//! Budget query collaborator.

use std::future::Future;

use finlens_shared::types::UserId;

use super::types::Budget;
use crate::error::QueryError;
use crate::period::DateRange;

/// Supplies a user's budgets.
pub trait BudgetQuery: Send + Sync {
    /// Returns the user's budgets whose window overlaps `range`.
    ///
    /// With `active_only` set, inactive budgets are left out.
    fn get_budgets(
        &self,
        user_id: UserId,
        range: DateRange,
        active_only: bool,
    ) -> impl Future<Output = Result<Vec<Budget>, QueryError>> + Send;
}
