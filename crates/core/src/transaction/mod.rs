//! Transactions, categories and the query collaborators that supply them.

pub mod query;
pub mod types;

pub use query::{CategoryQuery, TransactionFilter, TransactionQuery};
pub use types::{Category, Transaction, TransactionType};
