// ABOUTME: Consultation route handlers for the JSON API and the server-rendered form
// ABOUTME: Validates profiles, generates plans and returns advice text, display blocks or HTML
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Consultation routes
//!
//! - `POST /api/consultation` returns `{ "advice": ... }`
//! - `POST /api/consultation/blocks` returns the rendered display blocks
//! - `GET /` serves the intake form
//! - `POST /consultation` accepts the urlencoded form and returns the result page

use crate::formatters::html::{self, FormValues};
use crate::formatters::{parse_document, DisplayBlock};
use crate::intelligence::generate_plan;
use crate::logging::AppLogger;
use crate::models::ProfileRequest;
use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use fitcoach_core::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Successful consultation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationResponse {
    /// Plan text
    pub advice: String,
}

/// Consultation rendered as display blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationBlocksResponse {
    /// One block per plan line
    pub blocks: Vec<DisplayBlock>,
}

/// Consultation routes
pub struct ConsultationRoutes;

impl ConsultationRoutes {
    /// Create all consultation routes
    pub fn routes() -> Router {
        Router::new()
            .route("/", get(Self::handle_intake_form))
            .route("/consultation", post(Self::handle_form_submission))
            .route("/api/consultation", post(Self::handle_consultation))
            .route("/api/consultation/blocks", post(Self::handle_consultation_blocks))
    }

    /// Validate the request and generate the plan, logging the outcome
    fn consult(request: ProfileRequest) -> AppResult<String> {
        let started = Instant::now();
        let outcome = request.validate().and_then(|profile| {
            let advice = generate_plan(&profile)?;
            AppLogger::log_consultation_generated(
                profile.goal,
                profile.consultation_type,
                profile.health_conditions.is_some(),
                advice.len(),
                elapsed_ms(started),
            );
            Ok(advice)
        });

        if let Err(e) = &outcome {
            AppLogger::log_consultation_rejected(e.code, e.field.as_deref(), elapsed_ms(started));
        }
        outcome
    }

    /// Handle JSON consultation request
    async fn handle_consultation(
        payload: Result<Json<ProfileRequest>, JsonRejection>,
    ) -> Result<Json<ConsultationResponse>, AppError> {
        let Json(request) = payload.map_err(json_rejection_error)?;
        let advice = Self::consult(request)?;
        Ok(Json(ConsultationResponse { advice }))
    }

    /// Handle JSON consultation request returning display blocks
    async fn handle_consultation_blocks(
        payload: Result<Json<ProfileRequest>, JsonRejection>,
    ) -> Result<Json<ConsultationBlocksResponse>, AppError> {
        let Json(request) = payload.map_err(json_rejection_error)?;
        let advice = Self::consult(request)?;
        Ok(Json(ConsultationBlocksResponse {
            blocks: parse_document(&advice),
        }))
    }

    /// Serve the intake form
    async fn handle_intake_form() -> Html<String> {
        Html(html::render_intake_page())
    }

    /// Handle the urlencoded intake form, rendering the result or the error in the page
    async fn handle_form_submission(
        payload: Result<Form<ProfileRequest>, FormRejection>,
    ) -> Response {
        let request = match payload {
            Ok(Form(request)) => request,
            Err(rejection) => {
                let error = form_rejection_error(&rejection);
                return error_page(&FormValues::default(), &error);
            }
        };

        let values = FormValues::from(&request);
        match Self::consult(request) {
            Ok(advice) => Html(html::render_result_page(&values, &advice)).into_response(),
            Err(error) => error_page(&values, &error),
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn rejection_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::new(ErrorCode::PayloadTooLarge, "Request body is too large")
    } else {
        AppError::invalid_input(message)
    }
}

fn json_rejection_error(rejection: JsonRejection) -> AppError {
    rejection_error(rejection.status(), rejection.body_text())
}

fn form_rejection_error(rejection: &FormRejection) -> AppError {
    rejection_error(rejection.status(), rejection.body_text())
}

fn error_page(values: &FormValues, error: &AppError) -> Response {
    let status =
        StatusCode::from_u16(error.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Html(html::render_error_page(values, &error.message))).into_response()
}
