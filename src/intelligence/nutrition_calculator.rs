// ABOUTME: Nutrition calculation algorithms using peer-reviewed scientific formulas
// ABOUTME: BMI, BMR, TDEE, calorie goal, macronutrient, meal split and hydration calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Evidence-based calculations behind the consultation plan. Every function
//! takes its coefficients from [`NutritionConfig`] so the tables stay in one
//! validated place.
//!
//! Rounded quantities use half-up rounding (`2.5 -> 3`, `-2.5 -> -2`).
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.

use crate::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, HydrationConfig, MacroConfig,
    MealSplitConfig, NutritionConfig,
};
use crate::models::{ActivityLevel, FitnessGoal, Gender, ValidatedProfile};
use fitcoach_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// How the calorie goal relates to TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalorieAdjustment {
    /// TDEE minus the configured deficit
    Deficit(i64),
    /// TDEE plus the configured surplus
    Surplus(i64),
    /// TDEE unchanged
    Maintenance,
}

impl CalorieAdjustment {
    /// Human-readable label shown next to the calorie goal
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Deficit(kcal) => {
                format!("deficit of {kcal} calories for healthy weight loss")
            }
            Self::Surplus(kcal) => format!("surplus of {kcal} calories for muscle growth"),
            Self::Maintenance => "maintenance level".to_owned(),
        }
    }
}

/// Daily calorie goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalorieGoal {
    /// Target kcal/day
    pub kcal: i64,
    /// Adjustment applied to TDEE
    pub adjustment: CalorieAdjustment,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: i64,
    /// Carbohydrates (g)
    pub carbs_g: i64,
    /// Fat (g)
    pub fat_g: i64,
}

/// Calories per meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSplit {
    /// Breakfast kcal
    pub breakfast: i64,
    /// Lunch kcal
    pub lunch: i64,
    /// Dinner kcal
    pub dinner: i64,
    /// Snacks kcal
    pub snacks: i64,
}

/// Everything the plan text quotes numerically
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanMetrics {
    /// Body mass index (kg/m²), unrounded
    pub bmi: f64,
    /// Basal metabolic rate (kcal/day), unrounded
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: i64,
    /// Calorie goal
    pub calorie_goal: CalorieGoal,
    /// Macro targets
    pub macros: MacroTargets,
    /// Meal calorie split
    pub meals: MealSplit,
    /// Daily water intake (liters)
    pub water_liters: i64,
}

impl PlanMetrics {
    /// BMI with one decimal place
    #[must_use]
    pub fn bmi_display(&self) -> String {
        format_one_decimal(self.bmi)
    }

    /// BMR rounded to whole kcal
    #[must_use]
    pub fn bmr_rounded(&self) -> i64 {
        round_half_up(self.bmr)
    }
}

/// Round to the nearest integer, ties toward positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Format with exactly one decimal place, ties rounded up
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    let tenths = round_half_up(value * 10.0);
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    format!("{sign}{}.{}", abs / 10, abs % 10)
}

fn ensure_finite(quantity: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::internal(format!(
            "{quantity} calculation produced a non-finite value"
        )))
    }
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
///
/// # Errors
///
/// Returns an error if height is zero
pub fn calculate_bmi(weight_kg: u32, height_cm: u32) -> AppResult<f64> {
    if height_cm == 0 {
        return Err(AppError::invalid_input("Height must be positive"));
    }
    let height_m = f64::from(height_cm) / 100.0;
    ensure_finite("BMI", f64::from(weight_kg) / (height_m * height_m))
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women and other: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns an error if the configured coefficients produce a non-finite value
pub fn calculate_mifflin_st_jeor(
    weight_kg: u32,
    height_cm: u32,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    let weight_component = config.msj_weight_coef * f64::from(weight_kg);
    let height_component = config.msj_height_coef * f64::from(height_cm);
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Other => config.msj_female_constant,
    };

    ensure_finite(
        "BMR",
        weight_component + height_component + age_component + gender_constant,
    )
}

/// Calculate Total Daily Energy Expenditure, rounded to whole kcal
///
/// Formula: TDEE = round(BMR x Activity Factor)
///
/// # Errors
///
/// Returns an error if BMR is not finite
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<i64> {
    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };

    Ok(round_half_up(ensure_finite("TDEE", bmr * activity_factor)?))
}

/// Derive the daily calorie goal from TDEE and the training goal
#[must_use]
pub fn calculate_calorie_goal(
    tdee: i64,
    goal: FitnessGoal,
    config: &CalorieAdjustmentConfig,
) -> CalorieGoal {
    match goal {
        FitnessGoal::LoseWeight => CalorieGoal {
            kcal: tdee - config.weight_loss_deficit_kcal,
            adjustment: CalorieAdjustment::Deficit(config.weight_loss_deficit_kcal),
        },
        FitnessGoal::GainMuscle => CalorieGoal {
            kcal: tdee + config.muscle_gain_surplus_kcal,
            adjustment: CalorieAdjustment::Surplus(config.muscle_gain_surplus_kcal),
        },
        FitnessGoal::Maintain | FitnessGoal::ImproveFitness | FitnessGoal::ImproveHealth => {
            CalorieGoal {
                kcal: tdee,
                adjustment: CalorieAdjustment::Maintenance,
            }
        }
    }
}

/// Calculate macronutrient grams for a calorie goal
///
/// - Protein: `weight_kg` x 2 g
/// - Fat: 25% of the calorie goal
/// - Carbohydrates: the remaining calories
///
/// # Errors
///
/// Returns an error if an energy density is zero or the result is non-finite
pub fn calculate_macros(
    weight_kg: u32,
    calorie_goal_kcal: i64,
    config: &MacroConfig,
) -> AppResult<MacroTargets> {
    let goal = calorie_goal_kcal as f64;

    let protein_g = round_half_up(ensure_finite(
        "protein",
        f64::from(weight_kg) * config.protein_g_per_kg,
    )?);
    let fat_g = round_half_up(ensure_finite(
        "fat",
        goal * config.fat_calorie_share / config.kcal_per_g_fat,
    )?);

    let allocated =
        (protein_g as f64).mul_add(config.kcal_per_g_protein, fat_g as f64 * config.kcal_per_g_fat);
    let carbs_g = round_half_up(ensure_finite(
        "carbohydrate",
        (goal - allocated) / config.kcal_per_g_carbs,
    )?);

    Ok(MacroTargets {
        protein_g,
        carbs_g,
        fat_g,
    })
}

/// Split the calorie goal across meals
#[must_use]
pub fn calculate_meal_split(calorie_goal_kcal: i64, config: &MealSplitConfig) -> MealSplit {
    let goal = calorie_goal_kcal as f64;
    MealSplit {
        breakfast: round_half_up(goal * config.breakfast),
        lunch: round_half_up(goal * config.lunch),
        dinner: round_half_up(goal * config.dinner),
        snacks: round_half_up(goal * config.snacks),
    }
}

/// Daily water intake in whole liters
#[must_use]
pub fn calculate_hydration_liters(weight_kg: u32, config: &HydrationConfig) -> i64 {
    round_half_up(f64::from(weight_kg) * config.liters_per_kg)
}

/// Compute every derived quantity for a validated profile
///
/// # Errors
///
/// Returns an internal error if any intermediate value is non-finite
pub fn calculate_plan_metrics(
    profile: &ValidatedProfile,
    config: &NutritionConfig,
) -> AppResult<PlanMetrics> {
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm)?;
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?;
    let calorie_goal = calculate_calorie_goal(tdee, profile.goal, &config.calorie_adjustments);
    let macros = calculate_macros(profile.weight_kg, calorie_goal.kcal, &config.macros)?;

    Ok(PlanMetrics {
        bmi,
        bmr,
        tdee,
        calorie_goal,
        macros,
        meals: calculate_meal_split(calorie_goal.kcal, &config.meal_split),
        water_liters: calculate_hydration_liters(profile.weight_kg, &config.hydration),
    })
}
