// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers and orchestrators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! The service keeps no state, so readiness reports whether the nutrition
//! configuration being served passes validation.

use crate::config::NutritionConfig;
use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

/// Health and readiness response body
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// `healthy`, `ready` or `not_ready`
    pub status: &'static str,
    /// RFC 3339 timestamp
    pub timestamp: String,
    /// Service version
    pub version: &'static str,
}

impl HealthStatus {
    fn now(status: &'static str) -> Self {
        Self {
            status,
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    async fn handle_health() -> Json<HealthStatus> {
        Json(HealthStatus::now("healthy"))
    }

    async fn handle_ready() -> (StatusCode, Json<HealthStatus>) {
        readiness(NutritionConfig::global())
    }
}

fn readiness(config: &NutritionConfig) -> (StatusCode, Json<HealthStatus>) {
    match config.validate() {
        Ok(()) => (StatusCode::OK, Json(HealthStatus::now("ready"))),
        Err(e) => {
            warn!("Readiness check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus::now("not_ready")),
            )
        }
    }
}
