//! Report generation routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use finlens_core::reports::{FinancialReport, ReportParams, ReportPeriod, ReportType};
use finlens_shared::{AppError, types::UserId};

use crate::{AppState, error::ApiError};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{user_id}/reports/{report_type}", get(generate_report))
}

/// `GET /users/{user_id}/reports/{report_type}`
///
/// `report_type` is one of `monthly`, `quarterly`, `yearly` or `custom`; the
/// query string carries `year`, `month`, `quarter`, `start` and `end` as the
/// type requires.
async fn generate_report(
    State(state): State<AppState>,
    Path((user_id, report_type)): Path<(UserId, String)>,
    Query(params): Query<ReportParams>,
) -> Result<Json<FinancialReport>, ApiError> {
    let report_type: ReportType = report_type.parse().map_err(AppError::Validation)?;
    let period = ReportPeriod::from_params(report_type, params)?;
    let report = state.reports.generate_report(user_id, period).await?;
    Ok(Json(report))
}
