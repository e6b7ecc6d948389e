// ABOUTME: Configuration error types shared by environment and nutrition configuration
// ABOUTME: Distinguishes invalid ranges, inconsistent weights and unparseable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach_core::errors::AppError;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A lower bound is not below its upper bound
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A set of shares does not sum to the expected total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// An environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value lies outside its physically meaningful range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// The process-wide configuration was already initialized
    #[error("Nutrition configuration already installed")]
    AlreadyInstalled,
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
