//! Transaction data types.

use chrono::{DateTime, Utc};
use finlens_shared::types::{CategoryId, TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction, also the kind of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionType {
    /// Returns the wire name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {s}")),
        }
    }
}

/// A transaction category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Owning user, `None` for system-seeded categories.
    pub user_id: Option<UserId>,
    /// Unique display name.
    pub name: String,
    /// Whether the category collects income or expenses.
    #[serde(rename = "type")]
    pub category_type: TransactionType,
    /// True for system-seeded categories.
    pub is_default: bool,
}

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Owning user.
    pub user_id: UserId,
    /// Amount as recorded. Aggregation uses its magnitude.
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Category ID.
    pub category_id: CategoryId,
    /// Category name, preloaded by the collaborator.
    pub category_name: String,
    /// When the transaction happened.
    pub date: DateTime<Utc>,
    /// Free-text description.
    pub description: String,
}

impl Transaction {
    /// Absolute value of the amount.
    #[must_use]
    pub fn magnitude(&self) -> Decimal {
        self.amount.abs()
    }

    /// Amount with cash-flow sign: positive for income, negative for expenses.
    #[must_use]
    pub fn signed_flow(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Income => self.magnitude(),
            TransactionType::Expense => -self.magnitude(),
        }
    }

    /// Returns true for income transactions.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Returns true for expense transactions.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}
