//! Periodic financial reports.
//!
//! A report request names a period (month, quarter, year or a custom window).
//! The period is resolved and validated before any data is read, then every
//! report type goes through the same window routine: totals, category
//! breakdowns, a monthly trend series, budget performance, the health score
//! and threshold-driven insights.

pub mod error;
pub mod insights;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use insights::ReportInsights;
pub use service::ReportService;
pub use types::{FinancialReport, ReportParams, ReportPeriod, ReportType};
