//! Report types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::analytics::{CategoryMetric, FinancialHealthScore, MonthlyTrend};
use crate::budget::BudgetPerformanceMetrics;
use crate::period::{DateRange, PeriodError};

/// Kind of report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// One calendar month.
    Monthly,
    /// One calendar quarter.
    Quarterly,
    /// One calendar year.
    Yearly,
    /// Caller-supplied window.
    Custom,
}

impl ReportType {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("unknown report type: {s}")),
        }
    }
}

/// The period a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportPeriod {
    /// A calendar month (1-12).
    Monthly {
        /// Year.
        year: i32,
        /// Month number.
        month: u32,
    },
    /// A calendar quarter (1-4).
    Quarterly {
        /// Year.
        year: i32,
        /// Quarter number.
        quarter: u32,
    },
    /// A calendar year.
    Yearly {
        /// Year.
        year: i32,
    },
    /// An explicit closed window.
    Custom {
        /// First instant.
        start: DateTime<Utc>,
        /// Last instant.
        end: DateTime<Utc>,
    },
}

/// Loose report parameters, as received from a query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ReportParams {
    /// Year for monthly, quarterly and yearly reports.
    pub year: Option<i32>,
    /// Month for monthly reports.
    pub month: Option<u32>,
    /// Quarter for quarterly reports.
    pub quarter: Option<u32>,
    /// Start for custom reports.
    pub start: Option<DateTime<Utc>>,
    /// End for custom reports.
    pub end: Option<DateTime<Utc>>,
}

impl ReportPeriod {
    /// Builds a period from a report type and its parameters.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` when the type's parameters are absent.
    pub fn from_params(report_type: ReportType, params: ReportParams) -> Result<Self, ReportError> {
        let year = || params.year.ok_or(ReportError::MissingParameter("year"));
        Ok(match report_type {
            ReportType::Monthly => Self::Monthly {
                year: year()?,
                month: params.month.ok_or(ReportError::MissingParameter("month"))?,
            },
            ReportType::Quarterly => Self::Quarterly {
                year: year()?,
                quarter: params.quarter.ok_or(ReportError::MissingParameter("quarter"))?,
            },
            ReportType::Yearly => Self::Yearly { year: year()? },
            ReportType::Custom => Self::Custom {
                start: params.start.ok_or(ReportError::MissingParameter("start"))?,
                end: params.end.ok_or(ReportError::MissingParameter("end"))?,
            },
        })
    }

    /// The report type of this period.
    #[must_use]
    pub const fn report_type(&self) -> ReportType {
        match self {
            Self::Monthly { .. } => ReportType::Monthly,
            Self::Quarterly { .. } => ReportType::Quarterly,
            Self::Yearly { .. } => ReportType::Yearly,
            Self::Custom { .. } => ReportType::Custom,
        }
    }

    /// Resolves the period to a validated window.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth`, `InvalidQuarter` or `InvalidDateRange`.
    pub fn resolve(&self) -> Result<DateRange, PeriodError> {
        match *self {
            Self::Monthly { year, month } => DateRange::month(year, month),
            Self::Quarterly { year, quarter } => DateRange::quarter(year, quarter),
            Self::Yearly { year } => DateRange::year(year),
            Self::Custom { start, end } => DateRange::new(start, end),
        }
    }

    /// Human-readable title of the resolved `range`.
    #[must_use]
    pub fn title(&self, range: &DateRange) -> String {
        match *self {
            Self::Monthly { .. } => range.start_date().format("%B %Y").to_string(),
            Self::Quarterly { year, quarter } => format!("Q{quarter} {year}"),
            Self::Yearly { year } => year.to_string(),
            Self::Custom { .. } => range.to_string(),
        }
    }
}

/// A complete financial report for one window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReport {
    /// Human-readable title.
    pub title: String,
    /// Report type.
    pub report_type: ReportType,
    /// Window start.
    pub start_date: DateTime<Utc>,
    /// Window end.
    pub end_date: DateTime<Utc>,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Total income.
    pub total_income: Decimal,
    /// Total expenses.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub net_income: Decimal,
    /// Savings rate percentage.
    pub savings_rate: Decimal,
    /// Expense ratio percentage.
    pub expense_ratio: Decimal,
    /// Transactions aggregated.
    pub transaction_count: u64,
    /// Every category, trends against the previous window.
    pub category_breakdown: Vec<CategoryMetric>,
    /// Top income categories.
    pub top_income_categories: Vec<CategoryMetric>,
    /// Top expense categories.
    pub top_expense_categories: Vec<CategoryMetric>,
    /// One entry per month of the window.
    pub monthly_trends: Vec<MonthlyTrend>,
    /// Budget performance over the window.
    pub budget_performance: BudgetPerformanceMetrics,
    /// Health score of the window.
    pub health_score: FinancialHealthScore,
    /// Observations.
    pub insights: Vec<String>,
    /// Suggested actions.
    pub recommendations: Vec<String>,
}
