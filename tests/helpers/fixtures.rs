// ABOUTME: Profile fixtures shared by plan, validation and route tests
// ABOUTME: Builds requests in the shapes the intake form and JSON clients send
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitcoach_server::models::{
    ActivityLevel, ConsultationType, DietaryFlags, FitnessGoal, Gender, NumericInput,
    ProfileRequest, ValidatedProfile,
};

/// Reference request: 30 years, 70 kg, 170 cm, male, moderate, maintain, both
pub fn reference_request() -> ProfileRequest {
    ProfileRequest {
        age: Some(NumericInput::from("30")),
        weight: Some(NumericInput::from("70")),
        height: Some(NumericInput::from("170")),
        gender: Some("male".to_owned()),
        activity_level: Some("moderate".to_owned()),
        goal: Some("maintain".to_owned()),
        dietary_restrictions: String::new(),
        health_conditions: String::new(),
        consultation_type: Some("both".to_owned()),
    }
}

/// Reference request as a JSON body
pub fn reference_json() -> serde_json::Value {
    serde_json::json!({
        "age": "30",
        "weight": "70",
        "height": "170",
        "gender": "male",
        "activityLevel": "moderate",
        "goal": "maintain",
        "dietaryRestrictions": "",
        "healthConditions": "",
        "consultationType": "both"
    })
}

/// Validated counterpart of [`reference_request`]
pub fn reference_profile() -> ValidatedProfile {
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
