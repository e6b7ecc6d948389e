// ABOUTME: Integration tests for consultation plan assembly
// ABOUTME: Covers section selection, dietary food lists, workout schedules and health notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use fitcoach_server::config::NutritionConfig;
use fitcoach_server::intelligence::generate_plan_with_config;
use fitcoach_server::intelligence::workouts::schedule_for;
use fitcoach_server::models::{ConsultationType, FitnessGoal, ValidatedProfile};
use helpers::fixtures::{reference_profile, reference_request};

fn plan_for(profile: &ValidatedProfile) -> String {
    generate_plan_with_config(profile, &NutritionConfig::default()).unwrap()
}

fn with_restrictions(text: &str) -> ValidatedProfile {
    let mut request = reference_request();
    text.clone_into(&mut request.dietary_restrictions);
    request.validate().unwrap()
}

// ============================================================================
// Section Selection
// ============================================================================

#[test]
fn test_reference_plan_header_and_metrics() {
    let plan = plan_for(&reference_profile());

    assert!(plan.starts_with("# Your Personalized Fitness & Nutrition Plan\n\n## Your Metrics\n"));
    assert!(plan.contains("- BMI: 24.2 kg/m²\n"));
    assert!(plan.contains("- Basal Metabolic Rate: 1618 calories/day\n"));
    assert!(plan.contains("- Total Daily Energy Expenditure: 2507 calories/day\n"));
    assert!(plan.contains("- Recommended Daily Calories: 2507 calories (maintenance level)\n"));
}

#[test]
fn test_both_includes_nutrition_before_fitness() {
    let plan = plan_for(&reference_profile());

    let nutrition = plan.find("## Nutrition Plan").unwrap();
    let fitness = plan.find("## Fitness Plan").unwrap();
    let tips = plan.find("## Tips for Success").unwrap();
    let reassess = plan.find("## When to Reassess").unwrap();
    assert!(nutrition < fitness);
    assert!(fitness < tips);
    assert!(tips < reassess);
}

#[test]
fn test_fitness_only_omits_nutrition() {
    let mut profile = reference_profile();
    profile.consultation_type = ConsultationType::Fitness;
    let plan = plan_for(&profile);

    assert!(!plan.contains("## Nutrition Plan"));
    assert!(!plan.contains("### Daily Macros"));
    assert!(plan.contains("## Fitness Plan"));
    assert!(plan.contains("## Your Metrics"));
}

#[test]
fn test_nutrition_only_omits_fitness() {
    let mut profile = reference_profile();
    profile.consultation_type = ConsultationType::Nutrition;
    let plan = plan_for(&profile);

    assert!(plan.contains("## Nutrition Plan"));
    assert!(!plan.contains("## Fitness Plan"));
    assert!(!plan.contains("### Progressive Overload"));
    assert!(plan.contains("## Tips for Success"));
}

#[test]
fn test_reference_nutrition_figures() {
    let plan = plan_for(&reference_profile());

    assert!(plan.contains("- Protein: 140g (supports muscle growth and repair)\n"));
    assert!(plan.contains("- Carbohydrates: 329g (provides energy for workouts)\n"));
    assert!(plan.contains("- Fats: 70g (essential for hormone production)\n"));
    assert!(plan.contains("- Breakfast: 627 calories\n"));
    assert!(plan.contains("- Lunch: 877 calories\n"));
    assert!(plan.contains("- Dinner: 752 calories\n"));
    assert!(plan.contains("- Snacks: 251 calories\n"));
    assert!(plan.contains("- Drink at least 2 liters of water daily\n"));
}

#[test]
fn test_plan_ends_with_closing_remark() {
    let plan = plan_for(&reference_profile());
    assert!(plan.contains("\n---\n**Remember:** Consistency is more important than perfection."));
}

// ============================================================================
// Dietary Restrictions
// ============================================================================

#[test]
fn test_default_food_lists() {
    let plan = plan_for(&reference_profile());

    assert!(plan.contains("**Protein Sources:**\n- Chicken breast, turkey, lean beef\n"));
    assert!(plan.contains("- Oatmeal, whole grain bread\n"));
    assert!(!plan.contains("Plant-Based"));
    assert!(!plan.contains("### Dietary Considerations"));
}

#[test]
fn test_vegan_gets_plant_proteins() {
    let plan = plan_for(&with_restrictions("Strict VEGAN"));

    assert!(plan.contains("**Protein Sources (Plant-Based):**\n- Lentils, chickpeas, black beans\n"));
    assert!(!plan.contains("Chicken breast"));
    assert!(plan.contains("### Dietary Considerations\nBased on your restrictions: Strict VEGAN\n"));
}

#[test]
fn test_gluten_free_grains() {
    let plan = plan_for(&with_restrictions("gluten intolerance"));

    assert!(plan.contains("- Quinoa, rice\n- Gluten-free oats\n"));
    assert!(!plan.contains("Oatmeal, whole grain bread"));
    assert!(plan.contains("Chicken breast"));
}

#[test]
fn test_whitespace_restrictions_still_echoed() {
    let plan = plan_for(&with_restrictions("   "));
    assert!(plan.contains("### Dietary Considerations\nBased on your restrictions:    \n"));
}

#[test]
fn test_empty_restrictions_skip_considerations() {
    let plan = plan_for(&with_restrictions(""));
    assert!(!plan.contains("### Dietary Considerations"));
}

// ============================================================================
// Workouts
// ============================================================================

#[test]
fn test_schedule_per_goal() {
    let mut profile = reference_profile();

    profile.goal = FitnessGoal::LoseWeight;
    assert!(plan_for(&profile).contains("### Weekly Workout Schedule (Focus: Fat Loss)"));

    profile.goal = FitnessGoal::GainMuscle;
    assert!(plan_for(&profile).contains("### Weekly Workout Schedule (Focus: Muscle Growth)"));

    for goal in [
        FitnessGoal::Maintain,
        FitnessGoal::ImproveFitness,
        FitnessGoal::ImproveHealth,
    ] {
        profile.goal = goal;
        let plan = plan_for(&profile);
        assert!(plan.contains(&format!("### {}", schedule_for(goal).title)));
    }
}

#[test]
fn test_schedule_day_blocks() {
    for goal in [FitnessGoal::LoseWeight, FitnessGoal::GainMuscle] {
        let schedule = schedule_for(goal);
        assert_eq!(schedule.days.len(), 7);
        assert!(schedule.days[0].title.starts_with("Monday"));
        assert_eq!(schedule.days[6].title, "Sunday - Rest");
    }

    let balanced = schedule_for(FitnessGoal::ImproveHealth);
    assert_eq!(balanced.title, "Weekly Workout Schedule (Balanced Approach)");
    assert_eq!(balanced.days.len(), 3);
    assert_eq!(balanced.days[2].title, "Weekend - Active Recovery");
}

// ============================================================================
// Health Conditions
// ============================================================================

#[test]
fn test_health_section_when_conditions_given() {
    let mut request = reference_request();
    "type 2 diabetes".clone_into(&mut request.health_conditions);
    let plan = plan_for(&request.validate().unwrap());

    let health = plan.find("## Important Health Considerations").unwrap();
    let tips = plan.find("## Tips for Success").unwrap();
    assert!(health < tips);
    assert!(plan.contains("You mentioned: type 2 diabetes\n"));
    assert!(plan.contains("- Consult with your healthcare provider before starting this program\n"));
}

#[test]
fn test_blank_health_conditions_skip_section() {
    let mut request = reference_request();
    " \t ".clone_into(&mut request.health_conditions);
    let plan = plan_for(&request.validate().unwrap());
    assert!(!plan.contains("Important Health Considerations"));
}

#[test]
fn test_generation_is_deterministic() {
    let profile = reference_profile();
    assert_eq!(plan_for(&profile), plan_for(&profile));
}
