//! Budget tracking, performance evaluation and alerts.

pub mod alerts;
pub mod error;
pub mod performance;
pub mod query;
pub mod status;
pub mod types;
pub mod variance;

#[cfg(test)]
mod tests;

pub use alerts::{BudgetAlert, budget_alerts};
pub use error::BudgetError;
pub use performance::{
    BudgetEvaluator, BudgetPerformance, BudgetPerformanceMetrics, BudgetSummaryStatus,
};
pub use query::BudgetQuery;
pub use status::{AlertLevel, BudgetStatus};
pub use types::{Budget, BudgetPeriod, NewBudget};
pub use variance::{BudgetVariance, VarianceType, usage_percent};
