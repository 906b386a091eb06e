//! Dashboard summaries.
//!
//! A dashboard covers a calendar-to-date window (this week, month, quarter or
//! year up to now) and combines totals, top spending categories, recent
//! activity, budget alerts, goal progress and quick stats.

pub mod period;
pub mod service;
pub mod stats;
pub mod types;

pub use period::DashboardPeriod;
pub use service::DashboardService;
pub use stats::{CashFlowTrend, QuickStats};
pub use types::DashboardSummary;
