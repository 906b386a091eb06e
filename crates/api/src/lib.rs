//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for reports, analytics, dashboards and transactions
//! - JSON error responses built from `AppError`

pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use finlens_core::analytics::AnalyticsService;
use finlens_core::dashboard::DashboardService;
use finlens_core::reports::ReportService;
use finlens_store::InMemoryStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Backing store.
    pub store: Arc<InMemoryStore>,
    /// Report generation.
    pub reports: Arc<ReportService<InMemoryStore, InMemoryStore>>,
    /// Metrics and analysis.
    pub analytics: Arc<AnalyticsService<InMemoryStore, InMemoryStore>>,
    /// Dashboard summaries.
    pub dashboard: Arc<DashboardService<InMemoryStore, InMemoryStore, InMemoryStore>>,
}

impl AppState {
    /// Wires every service to `store`.
    #[must_use]
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            reports: Arc::new(ReportService::new(store.clone(), store.clone())),
            analytics: Arc::new(AnalyticsService::new(store.clone(), store.clone())),
            dashboard: Arc::new(DashboardService::new(
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            store,
        }
    }
}

/// Requests still running after `timeout` are answered with 408.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Creates the main application router.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(timeout_layer(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
