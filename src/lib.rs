// ABOUTME: Main library entry point for the Fitcoach consultation service
// ABOUTME: Provides the rule-based plan generator, renderer and HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitcoach Server
//!
//! A deterministic fitness and nutrition consultation service. A profile
//! (age, weight, height, gender, activity level, goal, dietary restrictions,
//! health conditions and consultation type) is validated, turned into BMI,
//! BMR, TDEE, calorie, macro, meal and hydration figures, and assembled into
//! a sectioned plan document.
//!
//! ## Architecture
//!
//! - **Models**: request shape and the validated profile
//! - **Intelligence**: nutrition math, dietary classification, plan text
//! - **Formatters**: plan text writer, display block renderer, HTML pages
//! - **Routes**: JSON API, intake form and health endpoints
//! - **Config**: server settings from the environment, nutrition tables
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitcoach_server::intelligence::generate_plan;
//! use fitcoach_server::models::ProfileRequest;
//! use fitcoach_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let request: ProfileRequest = serde_json::from_str(
//!         r#"{"age":"30","weight":"70","height":"170","gender":"male",
//!             "activityLevel":"moderate","goal":"maintain","consultationType":"both"}"#,
//!     )
//!     .map_err(|e| fitcoach_server::errors::AppError::invalid_input(e.to_string()))?;
//!
//!     let advice = generate_plan(&request.validate()?)?;
//!     println!("{advice}");
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Unified error handling, re-exported from `fitcoach-core`
pub use fitcoach_core::errors;

/// Plan text, display blocks and HTML rendering
pub mod formatters;

/// Nutrition math and plan generation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Request and profile models
pub mod models;

/// HTTP routes
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
