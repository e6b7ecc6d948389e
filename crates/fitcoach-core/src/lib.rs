// ABOUTME: Core types for the Fitcoach consultation service
// ABOUTME: Foundation crate with unified error handling and HTTP error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitcoach Core
//!
//! Foundation crate providing the shared error model for the Fitcoach
//! consultation service. It changes rarely, so keeping it separate from the
//! server crate keeps incremental builds cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and the
//!   JSON error body returned to HTTP clients

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;
