//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers::{company, employee, health};
use crate::infrastructure::metrics;
use crate::presentation::middleware::logging::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(company_routes())
        .merge(employee_routes())
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Runs after routing so the matched route is available as a label
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Company routes
///
/// Every route under `/api/companies/{...}` uses the same parameter name
/// in the first position so the router accepts them side by side.
fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/companies",
            get(company::get_companies).post(company::create_company),
        )
        .route(
            "/api/companies/collection",
            post(company::create_company_collection),
        )
        .route(
            "/api/companies/collection/{ids}",
            get(company::get_company_collection),
        )
        .route(
            "/api/companies/{company_id}",
            get(company::get_company).delete(company::delete_company),
        )
}

/// Employee routes, nested under their company
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/companies/{company_id}/employees",
            get(employee::get_employees_for_company).post(employee::create_employee_for_company),
        )
        .route(
            "/api/companies/{company_id}/employees/{id}",
            get(employee::get_employee_for_company).delete(employee::delete_employee_for_company),
        )
}
