//! In-memory store implementing the core query traits.

use std::path::Path;

use chrono::{DateTime, Utc};
use finlens_core::budget::{Budget, BudgetQuery};
use finlens_core::error::QueryError;
use finlens_core::goal::{FinancialGoal, GoalQuery};
use finlens_core::period::DateRange;
use finlens_core::transaction::{
    Category, CategoryQuery, Transaction, TransactionFilter, TransactionQuery, TransactionType,
};
use finlens_shared::types::{CategoryId, TransactionId, UserId};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;
use crate::snapshot::Snapshot;

/// Input for recording a transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Owning user.
    pub user_id: UserId,
    /// Amount; its magnitude is what counts.
    pub amount: Decimal,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Category, which must collect the same type.
    pub category_id: CategoryId,
    /// When it happened.
    pub date: DateTime<Utc>,
    /// Free text.
    pub description: String,
}

fn visible_to(category: &Category, user_id: UserId) -> bool {
    category.user_id.is_none_or(|owner| owner == user_id)
}

/// Snapshot-backed store guarded by an async read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<Snapshot>,
}

impl InMemoryStore {
    /// Wraps a snapshot, re-deriving budget spending from its transactions.
    #[must_use]
    pub fn new(mut snapshot: Snapshot) -> Self {
        snapshot.recalculate_budgets();
        Self {
            data: RwLock::new(snapshot),
        }
    }

    /// Loads a snapshot file. Stored budget spending is not trusted and is
    /// recomputed on load.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Snapshot::from_path(path).map(Self::new)
    }

    /// Returns a copy of the current contents.
    pub async fn snapshot(&self) -> Snapshot {
        self.data.read().await.clone()
    }

    /// Records a transaction and adds expenses to every active budget tracking it.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if the category is unknown to the user, or
    /// `CategoryTypeMismatch` if it collects the other transaction type.
    pub async fn record_transaction(&self, input: NewTransaction) -> Result<Transaction, StoreError> {
        let mut data = self.data.write().await;

        let category = data
            .categories
            .iter()
            .find(|c| c.id == input.category_id && visible_to(c, input.user_id))
            .ok_or(StoreError::CategoryNotFound(input.category_id))?;
        if category.category_type != input.transaction_type {
            return Err(StoreError::CategoryTypeMismatch {
                category: category.name.clone(),
                expected: category.category_type.to_string(),
            });
        }

        let transaction = Transaction {
            id: TransactionId::new(),
            user_id: input.user_id,
            amount: input.amount,
            transaction_type: input.transaction_type,
            category_id: input.category_id,
            category_name: category.name.clone(),
            date: input.date,
            description: input.description,
        };

        let mut updated = 0usize;
        for budget in data
            .budgets
            .iter_mut()
            .filter(|b| b.is_active && b.user_id == transaction.user_id)
            .filter(|b| b.tracks(&transaction))
        {
            budget.record_spend(transaction.magnitude());
            updated += 1;
        }

        data.transactions.push(transaction.clone());
        debug!(
            transaction_id = %transaction.id,
            budgets_updated = updated,
            "Recorded transaction"
        );
        Ok(transaction)
    }
}

impl TransactionQuery for InMemoryStore {
    async fn get_transactions(
        &self,
        user_id: UserId,
        range: DateRange,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, QueryError> {
        let data = self.data.read().await;
        let mut found: Vec<Transaction> = data
            .transactions
            .iter()
            .filter(|tx| tx.user_id == user_id && range.contains(tx.date) && filter.matches(tx))
            .cloned()
            .collect();
        found.sort_by_key(|tx| tx.date);
        Ok(found)
    }
}

impl CategoryQuery for InMemoryStore {
    async fn get_category(
        &self,
        user_id: UserId,
        category_id: CategoryId,
    ) -> Result<Option<Category>, QueryError> {
        let data = self.data.read().await;
        Ok(data
            .categories
            .iter()
            .find(|c| c.id == category_id && visible_to(c, user_id))
            .cloned())
    }
}

impl BudgetQuery for InMemoryStore {
    async fn get_budgets(
        &self,
        user_id: UserId,
        range: DateRange,
        active_only: bool,
    ) -> Result<Vec<Budget>, QueryError> {
        let data = self.data.read().await;
        Ok(data
            .budgets
            .iter()
            .filter(|b| b.user_id == user_id && (!active_only || b.is_active))
            .filter(|b| b.window().is_some_and(|w| w.overlaps(&range)))
            .cloned()
            .collect())
    }
}

impl GoalQuery for InMemoryStore {
    async fn get_active_goals(&self, user_id: UserId) -> Result<Vec<FinancialGoal>, QueryError> {
        let data = self.data.read().await;
        Ok(data
            .goals
            .iter()
            .filter(|g| g.user_id == user_id && g.is_active)
            .cloned()
            .collect())
    }
}
