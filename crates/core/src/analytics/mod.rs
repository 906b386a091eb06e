//! Financial analytics: totals, category breakdowns, trend series and the
//! composite health score, plus the analytics operations built from them.

pub mod breakdown;
pub mod error;
pub mod health;
pub mod metrics;
pub mod service;
pub mod trend;
pub mod types;

#[cfg(test)]
mod tests;

pub use breakdown::{
    CategoryMetric, TrendDirection, category_breakdown, category_breakdown_against,
    category_breakdown_by_type, top_categories,
};
pub use error::AnalyticsError;
pub use health::{FinancialHealthScore, HealthInputs, HealthStatus};
pub use metrics::{FinancialMetrics, PeriodTotals, expense_ratio, savings_rate};
pub use service::AnalyticsService;
pub use trend::{MonthlyTrend, TrendBuilder, TrendGranularity, TrendSeries, WeeklyTrend};
pub use types::{CategoryMetrics, CategoryPeriodTotal, IncomeExpenseAnalysis};
