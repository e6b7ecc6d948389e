// ABOUTME: Configuration management module for server settings and nutrition parameters
// ABOUTME: Handles environment-driven server config and validated formula configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Fitcoach server
//!
//! - **Environment**: Server configuration from environment variables
//! - **Nutrition**: Formula coefficients and lookup tables used by the plan generator

/// Environment and server configuration
pub mod environment;
/// Configuration error type
pub mod error;
/// Nutrition formula configuration
pub mod nutrition;

pub use environment::{CorsConfig, Environment, ServerConfig};
pub use error::ConfigError;
pub use nutrition::NutritionConfig;
