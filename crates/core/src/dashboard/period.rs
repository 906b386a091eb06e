//! Named dashboard periods.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::period::{
    DateRange, first_day_of_month, first_day_of_quarter, first_day_of_year, start_of_day,
    start_of_week,
};

/// A calendar-to-date dashboard window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardPeriod {
    /// Since Monday of the current ISO week.
    Week,
    /// Since the first of the current month.
    #[default]
    Month,
    /// Since the first day of the current quarter.
    Quarter,
    /// Since January 1st.
    Year,
}

impl DashboardPeriod {
    /// Parses a period name; unknown names fall back to `month`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "week" | "weekly" => Self::Week,
            "quarter" | "quarterly" => Self::Quarter,
            "year" | "yearly" => Self::Year,
            _ => Self::Month,
        }
    }

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    /// The window from the start of the period containing `now` up to `now`.
    #[must_use]
    pub fn window(self, now: DateTime<Utc>) -> DateRange {
        let today = now.date_naive();
        let first = match self {
            Self::Week => start_of_week(today),
            Self::Month => first_day_of_month(today),
            Self::Quarter => first_day_of_quarter(today),
            Self::Year => first_day_of_year(today),
        };
        DateRange {
            start: start_of_day(first),
            end: now,
        }
    }
}

impl fmt::Display for DashboardPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
