//! Analytics routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::{DateTime, Utc};
use finlens_core::analytics::{CategoryMetrics, FinancialMetrics, IncomeExpenseAnalysis};
use finlens_shared::types::{CategoryId, UserId};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// Creates the analytics routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{user_id}/analytics/metrics", get(get_financial_metrics))
        .route(
            "/users/{user_id}/analytics/income-expense",
            get(get_income_expense_analysis),
        )
        .route(
            "/users/{user_id}/analytics/categories/{category_id}",
            get(get_category_analysis),
        )
}

/// Query parameters for windowed analytics.
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    /// Period label echoed back; `weekly` switches trends to weeks.
    #[serde(default = "default_period")]
    pub period: String,
    /// Window start (inclusive).
    pub start: DateTime<Utc>,
    /// Window end (inclusive).
    pub end: DateTime<Utc>,
}

fn default_period() -> String {
    "custom".to_string()
}

/// Query parameters for category analysis.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    /// Window start (inclusive).
    pub start: DateTime<Utc>,
    /// Window end (inclusive).
    pub end: DateTime<Utc>,
}

async fn get_financial_metrics(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<FinancialMetrics>, ApiError> {
    let metrics = state
        .analytics
        .get_financial_metrics(user_id, &query.period, query.start, query.end)
        .await?;
    Ok(Json(metrics))
}

async fn get_income_expense_analysis(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<IncomeExpenseAnalysis>, ApiError> {
    let analysis = state
        .analytics
        .get_income_expense_analysis(user_id, &query.period, query.start, query.end)
        .await?;
    Ok(Json(analysis))
}

async fn get_category_analysis(
    State(state): State<AppState>,
    Path((user_id, category_id)): Path<(UserId, CategoryId)>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<CategoryMetrics>, ApiError> {
    let metrics = state
        .analytics
        .get_category_analysis(user_id, category_id, query.start, query.end)
        .await?;
    Ok(Json(metrics))
}
