//! Goal query collaborator.

use std::future::Future;

use finlens_shared::types::UserId;

use super::types::FinancialGoal;
use crate::error::QueryError;

/// Supplies a user's financial goals.
pub trait GoalQuery: Send + Sync {
    /// Returns the user's active goals.
    fn get_active_goals(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<FinancialGoal>, QueryError>> + Send;
}
