// ABOUTME: Deterministic consultation plan generator
// ABOUTME: Computes plan metrics and assembles the sectioned plan text for a validated profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Generator
//!
//! Pure function from a [`ValidatedProfile`] to plan text. Sections appear
//! in a fixed order:
//!
//! 1. Title and metrics (always)
//! 2. Nutrition plan (`both` or `nutrition`)
//! 3. Fitness plan (`both` or `fitness`)
//! 4. Health considerations (only when health conditions were given)
//! 5. Tips, reassessment guidance and closing line (always)

use super::nutrition_calculator::{calculate_plan_metrics, PlanMetrics};
use super::workouts::{self, WeeklySchedule};
use crate::config::nutrition::NutritionConfig;
use crate::constants::messages;
use crate::formatters::PlanWriter;
use crate::models::{DietaryFlags, ValidatedProfile};
use fitcoach_core::errors::{AppError, AppResult};
use std::fmt;
use tracing::error;

/// Typical plan size, used to preallocate the output buffer
const PLAN_CAPACITY_HINT: usize = 4096;

const PLANT_PROTEIN_SOURCES: &[&str] = &[
    "Lentils, chickpeas, black beans",
    "Tofu, tempeh, edamame",
    "Quinoa, seitan",
    "Nuts and seeds",
];

const STANDARD_PROTEIN_SOURCES: &[&str] = &[
    "Chicken breast, turkey, lean beef",
    "Fish (salmon, tuna, cod)",
    "Eggs and egg whites",
    "Greek yogurt, cottage cheese",
];

const GLUTEN_FREE_GRAINS: &[&str] = &["Quinoa, rice", "Gluten-free oats"];
const WHOLE_GRAINS: &[&str] = &["Oatmeal, whole grain bread", "Brown rice, quinoa"];
const OTHER_CARBS: &[&str] = &[
    "Sweet potatoes, regular potatoes",
    "Fruits (bananas, berries, apples)",
];

const HEALTHY_FATS: &[&str] = &[
    "Avocados",
    "Olive oil, coconut oil",
    "Nuts (almonds, walnuts)",
    "Seeds (chia, flax, pumpkin)",
];

const HEALTH_PRECAUTIONS: &[&str] = &[
    "Consult with your healthcare provider before starting this program",
    "Get clearance for exercise intensity levels",
    "Discuss any dietary changes, especially if on medications",
    "Start slowly and monitor how your body responds",
];

const SUCCESS_TIPS: &[&str] = &[
    "Meal prep on weekends to stay on track",
    "Take progress photos every 2 weeks",
    "Weigh yourself weekly at the same time",
    "Join a fitness community for support",
    "Be patient - sustainable results take time",
    "Adjust the plan based on your progress",
];

const REASSESSMENT: &[&str] = &[
    "Review your progress every 4-6 weeks",
    "Adjust calories if weight loss/gain stalls",
    "Modify workouts if they become too easy or hard",
    "Consider working with a certified trainer or nutritionist for personalized guidance",
];

/// Generate the plan with the process-wide nutrition configuration
///
/// # Errors
///
/// Returns an internal error when the plan cannot be assembled
pub fn generate_plan(profile: &ValidatedProfile) -> AppResult<String> {
    generate_plan_with_config(profile, NutritionConfig::global())
}

/// Generate the plan with an explicit nutrition configuration
///
/// # Errors
///
/// Returns an internal error carrying the generic client message when a
/// derived value is non-finite or the text cannot be written; the cause is
/// logged and attached as the error source.
pub fn generate_plan_with_config(
    profile: &ValidatedProfile,
    config: &NutritionConfig,
) -> AppResult<String> {
    let metrics = calculate_plan_metrics(profile, config).map_err(|e| {
        error!(error.detail = %e.log_detail(), "Plan metrics calculation failed");
        AppError::internal(messages::GENERATION_FAILED).with_source(e)
    })?;

    assemble(profile, &metrics).map_err(|e| {
        error!(error = %e, "Plan text assembly failed");
        AppError::internal(messages::GENERATION_FAILED).with_source(e)
    })
}

fn assemble(profile: &ValidatedProfile, metrics: &PlanMetrics) -> Result<String, fmt::Error> {
    let mut plan = PlanWriter::with_capacity(PLAN_CAPACITY_HINT);

    plan.heading(1, "Your Personalized Fitness & Nutrition Plan")?;
    plan.blank()?;
    write_metrics(&mut plan, metrics)?;

    if profile.consultation_type.includes_nutrition() {
        write_nutrition(&mut plan, profile, metrics)?;
    }

    if profile.consultation_type.includes_fitness() {
        write_fitness(&mut plan, workouts::schedule_for(profile.goal))?;
    }

    if let Some(conditions) = &profile.health_conditions {
        write_health(&mut plan, conditions)?;
    }

    write_closing(&mut plan)?;
    Ok(plan.finish())
}

fn write_metrics(plan: &mut PlanWriter, metrics: &PlanMetrics) -> fmt::Result {
    plan.heading(2, "Your Metrics")?;
    plan.item(format_args!("BMI: {} kg/m²", metrics.bmi_display()))?;
    plan.item(format_args!(
        "Basal Metabolic Rate: {} calories/day",
        metrics.bmr_rounded()
    ))?;
    plan.item(format_args!(
        "Total Daily Energy Expenditure: {} calories/day",
        metrics.tdee
    ))?;
    plan.item(format_args!(
        "Recommended Daily Calories: {} calories ({})",
        metrics.calorie_goal.kcal,
        metrics.calorie_goal.adjustment.label()
    ))?;
    plan.blank()
}

fn write_nutrition(
    plan: &mut PlanWriter,
    profile: &ValidatedProfile,
    metrics: &PlanMetrics,
) -> fmt::Result {
    plan.heading(2, "Nutrition Plan")?;
    plan.blank()?;

    let macros = &metrics.macros;
    plan.heading(3, "Daily Macros")?;
    plan.item(format_args!(
        "Protein: {}g (supports muscle growth and repair)",
        macros.protein_g
    ))?;
    plan.item(format_args!(
        "Carbohydrates: {}g (provides energy for workouts)",
        macros.carbs_g
    ))?;
    plan.item(format_args!(
        "Fats: {}g (essential for hormone production)",
        macros.fat_g
    ))?;
    plan.blank()?;

    let meals = &metrics.meals;
    plan.heading(3, "Meal Structure")?;
    plan.item(format_args!("Breakfast: {} calories", meals.breakfast))?;
    plan.item(format_args!("Lunch: {} calories", meals.lunch))?;
    plan.item(format_args!("Dinner: {} calories", meals.dinner))?;
    plan.item(format_args!("Snacks: {} calories", meals.snacks))?;
    plan.blank()?;

    write_recommended_foods(plan, profile.dietary_flags)?;

    plan.heading(3, "Hydration")?;
    plan.item(format_args!(
        "Drink at least {} liters of water daily",
        metrics.water_liters
    ))?;
    plan.item("Add 500ml for every hour of exercise")?;
    plan.item("Monitor urine color (should be pale yellow)")?;
    plan.blank()?;

    if !profile.dietary_restrictions.is_empty() {
        plan.heading(3, "Dietary Considerations")?;
        plan.line(format_args!(
            "Based on your restrictions: {}",
            profile.dietary_restrictions
        ))?;
        plan.line("Make sure to supplement any nutrients that might be lacking in your diet.")?;
        plan.blank()?;
    }

    Ok(())
}

fn write_recommended_foods(plan: &mut PlanWriter, flags: DietaryFlags) -> fmt::Result {
    plan.heading(3, "Recommended Foods")?;

    if flags.plant_based {
        plan.bold("Protein Sources (Plant-Based):")?;
        plan.items(PLANT_PROTEIN_SOURCES)?;
    } else {
        plan.bold("Protein Sources:")?;
        plan.items(STANDARD_PROTEIN_SOURCES)?;
    }
    plan.blank()?;

    plan.bold("Complex Carbohydrates:")?;
    plan.items(if flags.gluten_free {
        GLUTEN_FREE_GRAINS
    } else {
        WHOLE_GRAINS
    })?;
    plan.items(OTHER_CARBS)?;
    plan.blank()?;

    plan.bold("Healthy Fats:")?;
    plan.items(HEALTHY_FATS)?;
    plan.blank()
}

fn write_fitness(plan: &mut PlanWriter, schedule: &WeeklySchedule) -> fmt::Result {
    plan.heading(2, "Fitness Plan")?;
    plan.blank()?;

    plan.heading(3, schedule.title)?;
    plan.blank()?;
    for day in schedule.days {
        plan.bold(day.title)?;
        plan.items(day.exercises)?;
        plan.blank()?;
    }

    plan.heading(3, "Progressive Overload")?;
    plan.items(workouts::PROGRESSIVE_OVERLOAD)?;
    plan.blank()?;

    plan.heading(3, "Recovery Tips")?;
    plan.items(workouts::RECOVERY_TIPS)?;
    plan.blank()
}

fn write_health(plan: &mut PlanWriter, conditions: &str) -> fmt::Result {
    plan.heading(2, "Important Health Considerations")?;
    plan.line(format_args!("You mentioned: {conditions}"))?;
    plan.blank()?;
    plan.bold_lead(
        "Please note:",
        "This AI-generated plan is for general guidance only. Given your health conditions, it's crucial to:",
    )?;
    plan.items(HEALTH_PRECAUTIONS)?;
    plan.blank()
}

fn write_closing(plan: &mut PlanWriter) -> fmt::Result {
    plan.heading(2, "Tips for Success")?;
    plan.items(SUCCESS_TIPS)?;
    plan.blank()?;

    plan.heading(2, "When to Reassess")?;
    plan.items(REASSESSMENT)?;
    plan.blank()?;

    plan.line("---")?;
    plan.bold_lead(
        "Remember:",
        "Consistency is more important than perfection. Start with small changes and build sustainable habits over time.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, ConsultationType, FitnessGoal, Gender};

    fn profile() -> ValidatedProfile {
        ValidatedProfile {
            age_years: 30,
            weight_kg: 70,
            height_cm: 170,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: FitnessGoal::Maintain,
            consultation_type: ConsultationType::Both,
            dietary_restrictions: String::new(),
            dietary_flags: DietaryFlags::default(),
            health_conditions: None,
        }
    }

    #[test]
    fn test_non_finite_config_is_generation_failure() {
        let mut config = NutritionConfig::default();
        config.bmr.msj_weight_coef = f64::NAN;
        let error = generate_plan_with_config(&profile(), &config).unwrap_err();
        assert_eq!(error.message, messages::GENERATION_FAILED);
        assert!(error.log_detail().contains("non-finite"));
    }

    #[test]
    fn test_plan_ends_with_closing_line() {
        let plan = generate_plan_with_config(&profile(), &NutritionConfig::default()).unwrap();
        assert!(plan.ends_with("build sustainable habits over time.\n"));
    }
}
