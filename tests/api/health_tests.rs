//! Health Check and Metrics API Tests

use axum::body::to_bytes;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body.get("version").is_some());
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "alive");
}

#[tokio::test]
async fn test_readiness_probe_reports_backend() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["checks"]["database"]["backend"], "memory");
    assert_ne!(body["status"], "unhealthy");
}

#[tokio::test]
async fn test_metrics_endpoint_records_requests() {
    let app = TestApp::new();

    app.get("/api/companies").await;
    let response = app.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("company_employees_http_requests_total"));
    assert!(text.contains("path=\"/api/companies\""));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
