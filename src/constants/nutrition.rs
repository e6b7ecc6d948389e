// ABOUTME: Nutrition formula constants for BMR, TDEE, calorie goals, macros and hydration
// ABOUTME: Single source of truth for the numbers the consultation plan is built from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Scientific References
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology

/// Mifflin-St Jeor weight coefficient (kcal per kg)
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Mifflin-St Jeor height coefficient (kcal per cm)
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Mifflin-St Jeor age coefficient (kcal per year)
pub const MSJ_AGE_COEF: f64 = -5.0;
/// Mifflin-St Jeor male constant
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Mifflin-St Jeor female constant, also used for `other`
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Sedentary activity factor
pub const ACTIVITY_SEDENTARY: f64 = 1.2;
/// Light activity factor (1-3 days/week)
pub const ACTIVITY_LIGHT: f64 = 1.375;
/// Moderate activity factor (3-5 days/week)
pub const ACTIVITY_MODERATE: f64 = 1.55;
/// Active factor (6-7 days/week)
pub const ACTIVITY_ACTIVE: f64 = 1.725;
/// Very active factor (athlete)
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.9;

/// Daily deficit applied for weight loss (kcal)
pub const WEIGHT_LOSS_DEFICIT_KCAL: i64 = 500;
/// Daily surplus applied for muscle gain (kcal)
pub const MUSCLE_GAIN_SURPLUS_KCAL: i64 = 300;

/// Protein target in grams per kg of body weight
pub const PROTEIN_G_PER_KG: f64 = 2.0;
/// Share of the calorie goal assigned to fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;

/// Energy density of protein (kcal/g)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy density of carbohydrate (kcal/g)
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Energy density of fat (kcal/g)
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Breakfast share of the calorie goal
pub const MEAL_SHARE_BREAKFAST: f64 = 0.25;
/// Lunch share of the calorie goal
pub const MEAL_SHARE_LUNCH: f64 = 0.35;
/// Dinner share of the calorie goal
pub const MEAL_SHARE_DINNER: f64 = 0.30;
/// Snacks share of the calorie goal
pub const MEAL_SHARE_SNACKS: f64 = 0.10;

/// Daily water intake in liters per kg of body weight
pub const WATER_LITERS_PER_KG: f64 = 0.033;
