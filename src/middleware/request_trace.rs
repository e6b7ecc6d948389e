// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Creates one span per HTTP request carrying method, path and request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::body::Body;
use http::Request;
use tower_http::trace::{HttpMakeClassifier, TraceLayer};
use tracing::Span;

/// Header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create a tracing span for an HTTP request
///
/// The request id is read from the `x-request-id` header, which the request
/// id layer sets before this span is created.
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

/// HTTP trace layer emitting [`create_request_span`] spans
#[must_use]
pub fn request_trace_layer() -> TraceLayer<HttpMakeClassifier, fn(&Request<Body>) -> Span> {
    TraceLayer::new_for_http().make_span_with(create_request_span as fn(&Request<Body>) -> Span)
}
