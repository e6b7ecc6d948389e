// ABOUTME: Axum IntoResponse integration for AppError
// ABOUTME: Maps error codes to HTTP status and logs server-side failures without leaking detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorResponse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{error, warn};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(
                error.code = ?self.code,
                error.detail = %self.log_detail(),
                "Request failed"
            );
        } else {
            warn!(
                error.code = ?self.code,
                error.field = self.field.as_deref().unwrap_or(""),
                error.message = %self.message,
                "Request rejected"
            );
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
