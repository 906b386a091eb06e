//! In-memory collaborators and builders for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use finlens_shared::types::{BudgetId, CategoryId, GoalId, TransactionId, UserId};
use rust_decimal::Decimal;

use crate::budget::{Budget, BudgetPeriod, BudgetQuery};
use crate::error::QueryError;
use crate::goal::{FinancialGoal, GoalQuery};
use crate::period::DateRange;
use crate::transaction::{
    Category, CategoryQuery, Transaction, TransactionFilter, TransactionQuery, TransactionType,
};

/// A snapshot-backed fake implementing every query collaborator.
#[derive(Debug, Default)]
pub struct FakeLedger {
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<FinancialGoal>,
    pub fail_with: Option<QueryError>,
    pub queries: AtomicUsize,
}

impl FakeLedger {
    pub fn failing(error: QueryError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<(), QueryError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl TransactionQuery for FakeLedger {
    async fn get_transactions(
        &self,
        user_id: UserId,
        range: DateRange,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, QueryError> {
        self.begin()?;
        let mut found: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|tx| tx.user_id == user_id && range.contains(tx.date) && filter.matches(tx))
            .cloned()
            .collect();
        found.sort_by_key(|tx| tx.date);
        Ok(found)
    }
}

impl CategoryQuery for FakeLedger {
    async fn get_category(
        &self,
        _user_id: UserId,
        category_id: CategoryId,
    ) -> Result<Option<Category>, QueryError> {
        self.begin()?;
        Ok(self.categories.iter().find(|c| c.id == category_id).cloned())
    }
}

impl BudgetQuery for FakeLedger {
    async fn get_budgets(
        &self,
        user_id: UserId,
        range: DateRange,
        active_only: bool,
    ) -> Result<Vec<Budget>, QueryError> {
        self.begin()?;
        Ok(self
            .budgets
            .iter()
            .filter(|b| b.user_id == user_id && (!active_only || b.is_active))
            .filter(|b| b.window().is_some_and(|w| w.overlaps(&range)))
            .cloned()
            .collect())
    }
}

impl GoalQuery for FakeLedger {
    async fn get_active_goals(&self, user_id: UserId) -> Result<Vec<FinancialGoal>, QueryError> {
        self.begin()?;
        Ok(self
            .goals
            .iter()
            .filter(|g| g.user_id == user_id && g.is_active)
            .cloned()
            .collect())
    }
}

pub fn user() -> UserId {
    UserId::from_u128(1)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Noon UTC on the given day.
pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

pub fn category(id: u128, name: &str, category_type: TransactionType) -> Category {
    Category {
        id: CategoryId::from_u128(id),
        user_id: None,
        name: name.to_string(),
        category_type,
        is_default: true,
    }
}

pub fn transaction(
    transaction_type: TransactionType,
    amount: Decimal,
    category: &Category,
    date: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        user_id: user(),
        amount,
        transaction_type,
        category_id: category.id,
        category_name: category.name.clone(),
        date,
        description: format!("{} {}", category.name, amount),
    }
}

pub fn income(amount: Decimal, category: &Category, date: DateTime<Utc>) -> Transaction {
    transaction(TransactionType::Income, amount, category, date)
}

pub fn expense(amount: Decimal, category: &Category, date: DateTime<Utc>) -> Transaction {
    transaction(TransactionType::Expense, amount, category, date)
}

pub fn budget(
    category: &Category,
    amount: Decimal,
    spent: Decimal,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
) -> Budget {
    Budget {
        id: BudgetId::new(),
        user_id: user(),
        category_id: category.id,
        category_name: category.name.clone(),
        amount,
        period: BudgetPeriod::Monthly,
        start_date: date(start.0, start.1, start.2),
        end_date: date(end.0, end.1, end.2),
        spent,
        remaining: amount - spent,
        is_active: true,
    }
}

pub fn goal(name: &str, target: Decimal, current: Decimal) -> FinancialGoal {
    FinancialGoal {
        id: GoalId::new(),
        user_id: user(),
        name: name.to_string(),
        target_amount: target,
        current_amount: current,
        target_date: None,
        is_active: true,
    }
}
