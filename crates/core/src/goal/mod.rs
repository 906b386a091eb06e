//! Financial goals and their progress.

pub mod query;
pub mod types;

pub use query::GoalQuery;
pub use types::{FinancialGoal, GoalProgress};
