//! Demo data generator for Finlens development and testing.
//!
//! Writes a snapshot with the default categories plus three months of
//! transactions, current-month budgets and two savings goals for a fixed
//! demo user.
//!
//! Usage: cargo run --bin seeder -- [OUTPUT_PATH]

use anyhow::Context;
use chrono::Utc;
use finlens_shared::types::UserId;
use finlens_store::demo_snapshot;

/// Demo user ID (consistent for all seeds)
const DEMO_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Used when neither an argument nor `FINLENS__STORE__SNAPSHOT_PATH` is given.
const DEFAULT_OUTPUT: &str = "data/demo.json";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let output = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FINLENS__STORE__SNAPSHOT_PATH").ok())
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let user_id: UserId = DEMO_USER_ID.parse().context("Invalid demo user ID")?;

    println!("Generating demo data for user {user_id}...");
    let snapshot = demo_snapshot(user_id, Utc::now().date_naive());

    if let Some(parent) = std::path::Path::new(&output).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    snapshot
        .write_to(&output)
        .with_context(|| format!("Failed to write {output}"))?;

    println!(
        "Wrote {} categories, {} transactions, {} budgets and {} goals to {output}",
        snapshot.categories.len(),
        snapshot.transactions.len(),
        snapshot.budgets.len(),
        snapshot.goals.len()
    );
    println!("Seeding complete!");
    Ok(())
}
