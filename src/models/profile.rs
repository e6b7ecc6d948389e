// ABOUTME: Consultation profile request and its validated, strongly typed counterpart
// ABOUTME: Parses numeric strings, enum values and free text with field-level errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::profile_bounds;
use crate::intelligence::dietary;
use fitcoach_core::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric field as submitted: the intake form sends strings, API clients may send numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// JSON number
    Number(f64),
    /// Text, typically from a form field
    Text(String),
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Consultation request as received over HTTP
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    /// Age in years
    #[serde(default)]
    pub age: Option<NumericInput>,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight: Option<NumericInput>,
    /// Height in centimeters
    #[serde(default)]
    pub height: Option<NumericInput>,
    /// `male`, `female` or `other`
    #[serde(default)]
    pub gender: Option<String>,
    /// Activity level key
    #[serde(default)]
    pub activity_level: Option<String>,
    /// Goal key
    #[serde(default)]
    pub goal: Option<String>,
    /// Free-text dietary restrictions
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dietary_restrictions: String,
    /// Free-text health conditions
    #[serde(default, deserialize_with = "null_as_empty")]
    pub health_conditions: String,
    /// `both`, `fitness` or `nutrition`
    #[serde(default)]
    pub consultation_type: Option<String>,
}

/// Free text may be omitted, `null` or a string; the first two mean empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Gender used for the BMR constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
    /// Uses the female constant
    Other,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    Moderate,
    /// 6-7 days/week
    Active,
    /// Athlete
    VeryActive,
}

/// Primary goal of the consultation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Calorie deficit and fat-loss schedule
    LoseWeight,
    /// Maintenance calories
    Maintain,
    /// Calorie surplus and hypertrophy schedule
    GainMuscle,
    /// Maintenance calories, balanced schedule
    ImproveFitness,
    /// Maintenance calories, balanced schedule
    ImproveHealth,
}

/// Which plan sections to produce
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationType {
    /// Nutrition and fitness
    Both,
    /// Fitness plan only
    Fitness,
    /// Nutrition plan only
    Nutrition,
}

macro_rules! wire_enum {
    ($ty:ident, $field:literal, $label:literal, { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl $ty {
            /// Wire representation
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            /// Request field carrying this value
            pub const FIELD: &'static str = $field;
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(Self::$variant),)+
                    _ => Err(AppError::invalid_format(
                        $field,
                        format!(concat!("Invalid ", $label, ": {}"), s),
                    )),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(Gender, "gender", "gender", {
    Male => "male",
    Female => "female",
    Other => "other",
});

wire_enum!(ActivityLevel, "activityLevel", "activity level", {
    Sedentary => "sedentary",
    Light => "light",
    Moderate => "moderate",
    Active => "active",
    VeryActive => "very_active",
});

wire_enum!(FitnessGoal, "goal", "goal", {
    LoseWeight => "lose_weight",
    Maintain => "maintain",
    GainMuscle => "gain_muscle",
    ImproveFitness => "improve_fitness",
    ImproveHealth => "improve_health",
});

wire_enum!(ConsultationType, "consultationType", "consultation type", {
    Both => "both",
    Fitness => "fitness",
    Nutrition => "nutrition",
});

impl ConsultationType {
    /// Whether the nutrition section is produced
    #[must_use]
    pub const fn includes_nutrition(self) -> bool {
        matches!(self, Self::Both | Self::Nutrition)
    }

    /// Whether the fitness section is produced
    #[must_use]
    pub const fn includes_fitness(self) -> bool {
        matches!(self, Self::Both | Self::Fitness)
    }
}

/// Keyword classification of the dietary restriction text
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DietaryFlags {
    /// Mentions vegetarian or vegan
    pub plant_based: bool,
    /// Mentions gluten
    pub gluten_free: bool,
}

/// Profile after boundary validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidatedProfile {
    /// Age in whole years
    pub age_years: u32,
    /// Body weight in whole kilograms
    pub weight_kg: u32,
    /// Height in whole centimeters
    pub height_cm: u32,
    /// Gender
    pub gender: Gender,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Goal
    pub goal: FitnessGoal,
    /// Sections to include
    pub consultation_type: ConsultationType,
    /// Dietary restriction text exactly as submitted
    pub dietary_restrictions: String,
    /// Flags derived from `dietary_restrictions`
    pub dietary_flags: DietaryFlags,
    /// Health conditions as submitted, present only when not blank
    pub health_conditions: Option<String>,
}

impl TryFrom<ProfileRequest> for ValidatedProfile {
    type Error = AppError;

    fn try_from(request: ProfileRequest) -> Result<Self, Self::Error> {
        let age_years = parse_bounded(
            "age",
            request.age.as_ref(),
            profile_bounds::AGE_MIN,
            profile_bounds::AGE_MAX,
        )?;
        let weight_kg = parse_bounded(
            "weight",
            request.weight.as_ref(),
            profile_bounds::WEIGHT_MIN_KG,
            profile_bounds::WEIGHT_MAX_KG,
        )?;
        let height_cm = parse_bounded(
            "height",
            request.height.as_ref(),
            profile_bounds::HEIGHT_MIN_CM,
            profile_bounds::HEIGHT_MAX_CM,
        )?;

        let gender: Gender = required_text(Gender::FIELD, request.gender.as_deref())?.parse()?;
        let activity_level: ActivityLevel =
            required_text(ActivityLevel::FIELD, request.activity_level.as_deref())?.parse()?;
        let goal: FitnessGoal =
            required_text(FitnessGoal::FIELD, request.goal.as_deref())?.parse()?;
        let consultation_type: ConsultationType = required_text(
            ConsultationType::FIELD,
            request.consultation_type.as_deref(),
        )?
        .parse()?;

        let dietary_flags = dietary::classify(&request.dietary_restrictions);
        let health_conditions = if request.health_conditions.trim().is_empty() {
            None
        } else {
            Some(request.health_conditions)
        };

        Ok(Self {
            age_years,
            weight_kg,
            height_cm,
            gender,
            activity_level,
            goal,
            consultation_type,
            dietary_restrictions: request.dietary_restrictions,
            dietary_flags,
            health_conditions,
        })
    }
}

impl ProfileRequest {
    /// Validate into a [`ValidatedProfile`]
    ///
    /// # Errors
    ///
    /// Returns a client error naming the first field that is missing,
    /// malformed or out of range
    pub fn validate(self) -> AppResult<ValidatedProfile> {
        ValidatedProfile::try_from(self)
    }
}

fn required_text<'a>(field: &str, value: Option<&'a str>) -> AppResult<&'a str> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::missing_field(field)),
    }
}

/// Parse a numeric field with integer semantics and check it against its bounds
///
/// Decimal values are truncated toward zero before the range check, so
/// `"70.6"` becomes 70.
fn parse_bounded(field: &str, value: Option<&NumericInput>, min: u32, max: u32) -> AppResult<u32> {
    let number = match value {
        None => return Err(AppError::missing_field(field)),
        Some(NumericInput::Number(n)) => *n,
        Some(NumericInput::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(AppError::missing_field(field));
            }
            trimmed.parse::<f64>().map_err(|_| {
                AppError::invalid_format(field, format!("{field} must be a number"))
            })?
        }
    };

    if !number.is_finite() {
        return Err(AppError::invalid_format(
            field,
            format!("{field} must be a number"),
        ));
    }

    let whole = number.trunc();
    if whole < f64::from(min) || whole > f64::from(max) {
        return Err(AppError::out_of_range(field, min, max));
    }

    Ok(whole as u32)
}
