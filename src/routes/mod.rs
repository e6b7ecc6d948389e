// ABOUTME: Route module organization for Fitcoach HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Fitcoach server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the intelligence and formatting layers.

/// Consultation API and intake form routes
pub mod consultation;
/// Health check and readiness routes
pub mod health;

/// Consultation route handlers
pub use consultation::{ConsultationBlocksResponse, ConsultationResponse, ConsultationRoutes};
/// Health check route handlers
pub use health::HealthRoutes;
