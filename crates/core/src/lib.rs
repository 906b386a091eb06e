//! Core analytics logic for Finlens.
//!
//! This crate contains pure business logic with ZERO web or storage dependencies.
//! Data is read through the query traits in [`transaction`], [`budget`] and
//! [`goal`]; everything else is computation over what those return.
//!
//! # Modules
//!
//! - `period` - Closed date ranges and calendar helpers
//! - `transaction` - Transactions, categories and the transaction query seam
//! - `budget` - Budget tracking, variance, performance and alerts
//! - `goal` - Savings goals and progress
//! - `analytics` - Totals, breakdowns, trends and the health score
//! - `reports` - Periodic financial reports with insights
//! - `dashboard` - Dashboard summaries

pub mod analytics;
pub mod budget;
pub mod dashboard;
pub mod error;
pub mod goal;
pub mod period;
pub mod reports;
pub mod thresholds;
pub mod transaction;

#[cfg(test)]
mod test_support;

pub use error::QueryError;
