//! Dashboard routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use finlens_core::dashboard::DashboardSummary;
use finlens_shared::types::UserId;
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{user_id}/dashboard", get(get_dashboard_summary))
}

/// Query parameters for the dashboard.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// `week`, `month`, `quarter` or `year`; anything else means `month`.
    pub period: Option<String>,
}

async fn get_dashboard_summary(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let period = query.period.as_deref().unwrap_or("month");
    let summary = state.dashboard.get_dashboard_summary(user_id, period).await?;
    Ok(Json(summary))
}
