// ABOUTME: Core data models for consultation requests and validated profiles
// ABOUTME: Re-exports the wire request, categorical enums and the validated profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! ## Design Principles
//!
//! - **Validate at the boundary**: `ProfileRequest` is the loose wire shape,
//!   `ValidatedProfile` is what the rest of the crate works with
//! - **Type Safe**: categorical inputs are enums; unknown values are rejected
//!
//! ## Core Models
//!
//! - `ProfileRequest`: flat camelCase JSON or form body as submitted
//! - `ValidatedProfile`: bounded numeric fields, enums and dietary flags
//! - `DietaryFlags`: keyword classification of the dietary restriction text

/// Consultation profile models
pub mod profile;

pub use profile::{
    ActivityLevel, ConsultationType, DietaryFlags, FitnessGoal, Gender, NumericInput,
    ProfileRequest, ValidatedProfile,
};
