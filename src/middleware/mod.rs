// ABOUTME: HTTP middleware for request tracing, request ids and CORS
// ABOUTME: Provides span creation and cross-origin configuration for the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request spans and request id header
pub mod request_trace;

pub use cors::setup_cors;
pub use request_trace::{create_request_span, request_trace_layer, REQUEST_ID_HEADER};
