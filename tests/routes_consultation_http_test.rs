// ABOUTME: HTTP integration tests for the consultation API and intake form routes
// ABOUTME: Exercises JSON, display block and form flows plus the full middleware stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for consultation routes
//!
//! Handlers are tested directly through `ConsultationRoutes::routes()`; the
//! middleware behavior (request ids, body limit, fallback) through
//! `server::build_router`.

mod helpers;

use fitcoach_server::config::ServerConfig;
use fitcoach_server::routes::ConsultationRoutes;
use fitcoach_server::server::build_router;
use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::reference_json;

fn consultation_routes() -> axum::Router {
    ConsultationRoutes::routes()
}

fn reference_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("age", "30"),
        ("weight", "70"),
        ("height", "170"),
        ("gender", "male"),
        ("activityLevel", "moderate"),
        ("goal", "maintain"),
        ("dietaryRestrictions", ""),
        ("healthConditions", ""),
        ("consultationType", "both"),
    ]
}

// ============================================================================
// POST /api/consultation
// ============================================================================

#[tokio::test]
async fn test_consultation_success() {
    let response = AxumTestRequest::post("/api/consultation")
        .json(&reference_json())
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    let advice = body["advice"].as_str().unwrap();
    assert!(advice.starts_with("# Your Personalized Fitness & Nutrition Plan"));
    assert!(advice.contains("- BMI: 24.2 kg/m²"));
    assert!(advice.contains("- Total Daily Energy Expenditure: 2507 calories/day"));
}

#[tokio::test]
async fn test_consultation_missing_field() {
    let mut body = reference_json();
    body.as_object_mut().unwrap().remove("age");

    let response = AxumTestRequest::post("/api/consultation")
        .json(&body)
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 400);
    let error: serde_json::Value = response.json();
    assert_eq!(error["error"], "age is required");
    assert_eq!(error["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(error["field"], "age");
}

#[tokio::test]
async fn test_consultation_out_of_range() {
    let mut body = reference_json();
    body["height"] = serde_json::json!("99");

    let response = AxumTestRequest::post("/api/consultation")
        .json(&body)
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 400);
    let error: serde_json::Value = response.json();
    assert_eq!(error["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(error["field"], "height");
    assert_eq!(error["error"], "height must be between 100 and 250");
}

#[tokio::test]
async fn test_consultation_invalid_enum() {
    let mut body = reference_json();
    body["activityLevel"] = serde_json::json!("extreme");

    let response = AxumTestRequest::post("/api/consultation")
        .json(&body)
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 400);
    let error: serde_json::Value = response.json();
    assert_eq!(error["code"], "INVALID_FORMAT");
    assert_eq!(error["field"], "activityLevel");
}

#[tokio::test]
async fn test_consultation_malformed_json() {
    let response = AxumTestRequest::post("/api/consultation")
        .raw("application/json", "{\"age\": ")
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 400);
    let error: serde_json::Value = response.json();
    assert_eq!(error["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_consultation_without_content_type() {
    let response = AxumTestRequest::post("/api/consultation")
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 400);
    let error: serde_json::Value = response.json();
    assert_eq!(error["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_consultation_health_section() {
    let mut body = reference_json();
    body["healthConditions"] = serde_json::json!("asthma");
    body["consultationType"] = serde_json::json!("fitness");

    let response = AxumTestRequest::post("/api/consultation")
        .json(&body)
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    let advice = body["advice"].as_str().unwrap();
    assert!(advice.contains("## Important Health Considerations"));
    assert!(advice.contains("You mentioned: asthma"));
    assert!(!advice.contains("## Nutrition Plan"));
}

#[tokio::test]
async fn test_consultation_null_free_text() {
    let mut body = reference_json();
    body["dietaryRestrictions"] = serde_json::Value::Null;
    body["healthConditions"] = serde_json::Value::Null;

    let response = AxumTestRequest::post("/api/consultation")
        .json(&body)
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    let advice = body["advice"].as_str().unwrap();
    assert!(!advice.contains("## Important Health Considerations"));
    assert!(!advice.contains("### Dietary Considerations"));
}

// ============================================================================
// POST /api/consultation/blocks
// ============================================================================

#[tokio::test]
async fn test_consultation_blocks() {
    let response = AxumTestRequest::post("/api/consultation/blocks")
        .json(&reference_json())
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    let blocks = body["blocks"].as_array().unwrap();
    assert_eq!(blocks[0]["type"], "heading");
    assert_eq!(blocks[0]["level"], 1);
    assert_eq!(blocks[0]["text"], "Your Personalized Fitness & Nutrition Plan");
    assert_eq!(blocks[1]["type"], "break");
    assert!(blocks
        .iter()
        .any(|b| b["type"] == "list_item" && b["text"] == "BMI: 24.2 kg/m²"));
}

#[tokio::test]
async fn test_consultation_blocks_validation_error() {
    let mut body = reference_json();
    body["weight"] = serde_json::json!("abc");

    let response = AxumTestRequest::post("/api/consultation/blocks")
        .json(&body)
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 400);
    let error: serde_json::Value = response.json();
    assert_eq!(error["code"], "INVALID_FORMAT");
    assert_eq!(error["error"], "weight must be a number");
}

// ============================================================================
// Intake Form
// ============================================================================

#[tokio::test]
async fn test_intake_form_page() {
    let response = AxumTestRequest::get("/").send(consultation_routes()).await;

    assert_eq!(response.status(), 200);
    assert!(response
        .header("content-type")
        .unwrap()
        .starts_with("text/html"));
    let page = response.text();
    assert!(page.contains("<form"));
    assert!(page.contains("Get AI Consultation"));
}

#[tokio::test]
async fn test_form_submission_renders_plan() {
    let response = AxumTestRequest::post("/consultation")
        .form(&reference_form())
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 200);
    let page = response.text();
    assert!(page.contains("Your Personalized Plan"));
    assert!(page.contains("<h2 class=\"text-xl\">Your Metrics</h2>"));
    assert!(page.contains("<li>BMI: 24.2 kg/m²</li>"));
}

#[tokio::test]
async fn test_form_submission_error_page() {
    let mut form = reference_form();
    form[0] = ("age", "");

    let response = AxumTestRequest::post("/consultation")
        .form(&form)
        .send(consultation_routes())
        .await;

    assert_eq!(response.status(), 400);
    let page = response.text();
    assert!(page.contains("<p>Error: age is required</p>"));
    assert!(page.contains("value=\"70\""));
}

// ============================================================================
// Full Router
// ============================================================================

#[tokio::test]
async fn test_request_id_assigned() {
    let response = AxumTestRequest::post("/api/consultation")
        .json(&reference_json())
        .send(build_router(&ServerConfig::default()))
        .await;

    assert_eq!(response.status(), 200);
    let request_id = response.header("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(&request_id).is_ok());
}

#[tokio::test]
async fn test_request_id_propagated() {
    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "trace-me-42")
        .send(build_router(&ServerConfig::default()))
        .await;

    assert_eq!(response.header("x-request-id").as_deref(), Some("trace-me-42"));
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let response = AxumTestRequest::get("/api/unknown")
        .send(build_router(&ServerConfig::default()))
        .await;

    assert_eq!(response.status(), 404);
    let error: serde_json::Value = response.json();
    assert_eq!(error["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(error["error"], "Route /api/unknown not found");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let config = ServerConfig {
        max_request_body_bytes: 1024,
        ..ServerConfig::default()
    };
    let mut body = reference_json();
    body["dietaryRestrictions"] = serde_json::json!("x".repeat(4096));

    let response = AxumTestRequest::post("/api/consultation")
        .json(&body)
        .send(build_router(&config))
        .await;

    assert_eq!(response.status(), 413);
    let error: serde_json::Value = response.json();
    assert_eq!(error["code"], "PAYLOAD_TOO_LARGE");
}
