//! JSON snapshot format.

use std::path::Path;

use finlens_core::budget::Budget;
use finlens_core::goal::FinancialGoal;
use finlens_core::transaction::{Category, Transaction};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StoreError;
use crate::seed::default_categories;

/// Everything the store holds, as persisted on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Default and user-created categories.
    pub categories: Vec<Category>,
    /// All transactions.
    pub transactions: Vec<Transaction>,
    /// All budgets.
    pub budgets: Vec<Budget>,
    /// All goals.
    pub goals: Vec<FinancialGoal>,
}

impl Snapshot {
    /// An otherwise empty snapshot holding the default categories.
    #[must_use]
    pub fn with_default_categories() -> Self {
        Self {
            categories: default_categories(),
            ..Self::default()
        }
    }

    /// Re-derives every budget's spent and remaining amounts from the
    /// transactions of its owner.
    pub fn recalculate_budgets(&mut self) {
        let Self {
            transactions,
            budgets,
            ..
        } = self;
        for budget in budgets.iter_mut() {
            let owner = budget.user_id;
            budget.recalculate(transactions.iter().filter(|tx| tx.user_id == owner));
        }
    }

    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` when the text does not match the format.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read, or `StoreError::Parse`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            categories = snapshot.categories.len(),
            transactions = snapshot.transactions.len(),
            budgets = snapshot.budgets.len(),
            goals = snapshot.goals.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Writes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_snapshot;
    use chrono::NaiveDate;
    use finlens_shared::types::UserId;

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let snapshot = demo_snapshot(UserId::from_u128(1), today);

        snapshot.write_to(&path).unwrap();
        let loaded = Snapshot::from_path(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let snapshot = Snapshot::from_json(r#"{"categories": []}"#).unwrap();
        assert!(snapshot.transactions.is_empty());
        assert!(snapshot.goals.is_empty());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = Snapshot::from_path(&path).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_default_categories_only() {
        let snapshot = Snapshot::with_default_categories();
        assert_eq!(snapshot.categories.len(), 13);
        assert!(snapshot.transactions.is_empty());
        assert!(snapshot.budgets.is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Snapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
