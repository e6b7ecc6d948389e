// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for browser clients of the consultation API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::CorsConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Configure CORS settings for the consultation server
///
/// Supports both wildcard ("*") for development and specific origin lists
/// for production, configured through `CORS_ORIGINS`.
///
/// # Examples
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export CORS_ORIGINS="https://coach.example.com,https://www.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
