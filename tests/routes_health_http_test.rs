// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests liveness and readiness endpoints and their response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;

/// Get health routes for testing
fn health_routes() -> axum::Router {
    fitcoach_server::routes::health::HealthRoutes::routes()
}

// ============================================================================
// GET /health - Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_timestamp_format() {
    let response = AxumTestRequest::get("/health").send(health_routes()).await;

    let body: serde_json::Value = response.json();
    let timestamp_str = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp_str).is_ok());
}

// ============================================================================
// GET /ready - Readiness Check Tests
// ============================================================================

#[tokio::test]
async fn test_ready_endpoint_success() {
    let response = AxumTestRequest::get("/ready").send(health_routes()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_rejects_post() {
    let response = AxumTestRequest::post("/health").send(health_routes()).await;
    assert_eq!(response.status(), 405);
}
