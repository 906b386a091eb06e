//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod analytics;
pub mod dashboard;
pub mod health;
pub mod reports;
pub mod transactions;

/// Creates the `/api/v1` router with every per-user route.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(reports::routes())
        .merge(analytics::routes())
        .merge(dashboard::routes())
        .merge(transactions::routes())
}
