// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identity, environment defaults, request limits and profile bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Nutrition formula coefficients live in
//! [`nutrition`] and seed the defaults of the nutrition configuration.

/// Nutrition formula constants
pub mod nutrition;

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the HTTP server binary
    pub const FITCOACH_SERVER: &str = "fitcoach-server";
}

/// Environment variable names
pub mod env_config {
    /// Bind address variable
    pub const HOST: &str = "HOST";
    /// HTTP port variable
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Comma-separated CORS origins variable
    pub const CORS_ORIGINS: &str = "CORS_ORIGINS";
    /// Per-request timeout variable (seconds)
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Maximum request body size variable (bytes)
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
    /// Deployment environment variable
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default values applied when the environment is silent
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default CORS origins (any)
    pub const CORS_ORIGINS: &str = "*";
    /// Default deployment environment
    pub const ENVIRONMENT: &str = "development";
}

/// Request handling limits
pub mod limits {
    /// Default per-request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Upper bound accepted for the request timeout
    pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
    /// Default maximum request body size; a profile is a few hundred bytes
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 16 * 1024;
    /// Smallest body limit that still fits a complete profile
    pub const MIN_REQUEST_BODY_BYTES: usize = 1024;
}

/// Accepted ranges for profile fields, matching the intake form bounds
pub mod profile_bounds {
    /// Minimum age in years
    pub const AGE_MIN: u32 = 1;
    /// Maximum age in years
    pub const AGE_MAX: u32 = 120;
    /// Minimum body weight in kilograms
    pub const WEIGHT_MIN_KG: u32 = 20;
    /// Maximum body weight in kilograms
    pub const WEIGHT_MAX_KG: u32 = 300;
    /// Minimum height in centimeters
    pub const HEIGHT_MIN_CM: u32 = 100;
    /// Maximum height in centimeters
    pub const HEIGHT_MAX_CM: u32 = 250;
}

/// Fixed client-facing messages
pub mod messages {
    /// Generic message returned when plan generation fails
    pub const GENERATION_FAILED: &str = "Failed to generate consultation advice";
}
