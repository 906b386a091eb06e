//! Dashboard data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::DashboardPeriod;
use super::stats::QuickStats;
use crate::analytics::CategoryMetric;
use crate::budget::BudgetAlert;
use crate::goal::GoalProgress;
use crate::transaction::Transaction;

/// Dashboard summary response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Resolved period name.
    pub period: DashboardPeriod,
    /// Window start.
    pub start_date: DateTime<Utc>,
    /// Window end ("now").
    pub end_date: DateTime<Utc>,
    /// Total income.
    pub total_income: Decimal,
    /// Total expenses.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub net_income: Decimal,
    /// Savings rate percentage.
    pub savings_rate: Decimal,
    /// Largest expense categories.
    pub top_expense_categories: Vec<CategoryMetric>,
    /// Most recent transactions, newest first.
    pub recent_transactions: Vec<Transaction>,
    /// Budgets at or above 60% usage, highest first.
    pub budget_alerts: Vec<BudgetAlert>,
    /// Progress of active goals.
    pub goals: Vec<GoalProgress>,
    /// At-a-glance figures.
    pub quick_stats: QuickStats,
}
