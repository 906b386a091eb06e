//! In-memory data store for Finlens.
//!
//! This crate provides:
//! - The JSON snapshot format (`categories`, `transactions`, `budgets`, `goals`)
//! - `InMemoryStore`, implementing every query trait of `finlens-core`
//! - The default category set and a demo data generator

pub mod error;
pub mod memory;
pub mod seed;
pub mod snapshot;

pub use error::StoreError;
pub use memory::{InMemoryStore, NewTransaction};
pub use seed::{default_categories, demo_snapshot};
pub use snapshot::Snapshot;
