//! Date windows and calendar arithmetic.
//!
//! Every analytics computation runs over a closed `[start, end]` window. This module
//! resolves calendar periods (day, ISO week, month, quarter, year) into such windows.

pub mod error;
pub mod range;

pub use error::PeriodError;
pub use range::{
    DateRange, end_of_day, first_day_of_month, first_day_of_quarter, first_day_of_year,
    last_day_of_month, start_of_day, start_of_week,
};
