// ABOUTME: Unified error handling with error codes, HTTP status mapping and JSON bodies
// ABOUTME: Validation and generation failures share one AppError type across the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the service returns [`AppError`]. The error
//! carries a stable [`ErrorCode`], a client-facing message, the offending
//! request field when there is one, and an optional internal source that is
//! logged but never serialized.

#[cfg(feature = "http-response")]
mod http_response;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required request field was absent or blank
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A field could not be parsed (non-numeric text, unknown enum value)
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A numeric field was outside its declared range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// Request body exceeded the configured limit
    #[serde(rename = "PAYLOAD_TOO_LARGE")]
    PayloadTooLarge = 3004,

    // Resource Management (4000-4999)
    /// Route or resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure, including plan generation failures
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 400,
            Self::PayloadTooLarge => 413,
            Self::ResourceNotFound => 404,
            Self::ConfigInvalid | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::PayloadTooLarge => "The request body is too large",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
        }
    }

    /// Whether this code is a client error (4xx)
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        let status = self.http_status();
        status >= 400 && status < 500
    }
}

/// Unified error type for the application
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable, client-facing error message
    pub message: String,
    /// Request field the error refers to, if any
    pub field: Option<String>,
    /// Internal cause, logged but never sent to clients
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
            source: None,
        }
    }

    /// Attach the request field this error refers to
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Internal detail for logs: the source chain when present, else the message
    #[must_use]
    pub fn log_detail(&self) -> String {
        let mut detail = self.message.clone();
        let mut next = self.source.as_deref().map(|e| e as &(dyn Error + 'static));
        while let Some(err) = next {
            detail.push_str(": ");
            detail.push_str(&err.to_string());
            next = err.source();
        }
        detail
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body: `{ "error": ..., "code": ..., "field": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Client-facing message
    pub error: String,
    /// Stable error code
    pub code: ErrorCode,
    /// Offending request field
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub field: Option<String>,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
            code: error.code,
            field: error.field.clone(),
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A required field is missing or blank
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
        .with_field(field)
    }

    /// A field value could not be parsed
    pub fn invalid_format(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message).with_field(field)
    }

    /// A numeric field is outside its allowed range
    pub fn out_of_range(field: &str, min: u32, max: u32) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between {min} and {max}"),
        )
        .with_field(field)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}
