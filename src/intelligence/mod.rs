// ABOUTME: Consultation intelligence: nutrition math, dietary classification and plan generation
// ABOUTME: Pure, deterministic functions from a validated profile to plan text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Rule-based consultation logic. Nothing here performs I/O; every function
//! is a pure transformation of its inputs and the validated
//! [`NutritionConfig`](crate::config::NutritionConfig).

/// Dietary restriction keyword classification
pub mod dietary;
/// BMI, BMR, TDEE, macro, meal and hydration calculations
pub mod nutrition_calculator;
/// Plan text assembly
pub mod plan_generator;
/// Weekly workout templates
pub mod workouts;

pub use nutrition_calculator::{calculate_plan_metrics, PlanMetrics};
pub use plan_generator::{generate_plan, generate_plan_with_config};
