// ABOUTME: Nutrition configuration for BMR, activity factors, calorie goals, macros and hydration
// ABOUTME: Immutable lookup tables validated once and shared process-wide by the plan generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Provides configuration for the consultation plan calculations: BMR
//! coefficients, activity multipliers, goal calorie adjustments, macro
//! ratios, the meal calorie split and the hydration factor.
//!
//! Defaults come from [`crate::constants::nutrition`]. A handful of values can
//! be overridden through `NUTRITION_*` environment variables; the resulting
//! configuration is validated before it is used.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology

use super::error::ConfigError;
use crate::constants::nutrition as defaults;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Tolerance used when checking that shares sum to one
const SHARE_SUM_TOLERANCE: f64 = 1e-6;

/// Nutrition Analysis Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-driven calorie adjustments
    pub calorie_adjustments: CalorieAdjustmentConfig,
    /// Macronutrient targets
    pub macros: MacroConfig,
    /// Share of the daily calorie goal per meal
    pub meal_split: MealSplitConfig,
    /// Daily water intake
    pub hydration: HydrationConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161), also applied to `other`
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (athlete): 1.9
    pub very_active: f64,
}

/// Calorie adjustments applied to TDEE by goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAdjustmentConfig {
    /// Daily deficit for weight loss (kcal)
    pub weight_loss_deficit_kcal: i64,
    /// Daily surplus for muscle gain (kcal)
    pub muscle_gain_surplus_kcal: i64,
}

/// Macronutrient target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroConfig {
    /// Protein (g/kg bodyweight): 2.0
    pub protein_g_per_kg: f64,
    /// Share of calorie goal from fat: 0.25
    pub fat_calorie_share: f64,
    /// Protein energy density (kcal/g)
    pub kcal_per_g_protein: f64,
    /// Carbohydrate energy density (kcal/g)
    pub kcal_per_g_carbs: f64,
    /// Fat energy density (kcal/g)
    pub kcal_per_g_fat: f64,
}

/// Share of the daily calorie goal per meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Breakfast share: 0.25
    pub breakfast: f64,
    /// Lunch share: 0.35
    pub lunch: f64,
    /// Dinner share: 0.30
    pub dinner: f64,
    /// Snacks share: 0.10
    pub snacks: f64,
}

/// Hydration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Liters of water per kg of bodyweight: 0.033
    pub liters_per_kg: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: defaults::MSJ_WEIGHT_COEF,
            msj_height_coef: defaults::MSJ_HEIGHT_COEF,
            msj_age_coef: defaults::MSJ_AGE_COEF,
            msj_male_constant: defaults::MSJ_MALE_CONSTANT,
            msj_female_constant: defaults::MSJ_FEMALE_CONSTANT,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: defaults::ACTIVITY_SEDENTARY,
            light: defaults::ACTIVITY_LIGHT,
            moderate: defaults::ACTIVITY_MODERATE,
            active: defaults::ACTIVITY_ACTIVE,
            very_active: defaults::ACTIVITY_VERY_ACTIVE,
        }
    }
}

impl Default for CalorieAdjustmentConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit_kcal: defaults::WEIGHT_LOSS_DEFICIT_KCAL,
            muscle_gain_surplus_kcal: defaults::MUSCLE_GAIN_SURPLUS_KCAL,
        }
    }
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: defaults::PROTEIN_G_PER_KG,
            fat_calorie_share: defaults::FAT_CALORIE_SHARE,
            kcal_per_g_protein: defaults::KCAL_PER_G_PROTEIN,
            kcal_per_g_carbs: defaults::KCAL_PER_G_CARBS,
            kcal_per_g_fat: defaults::KCAL_PER_G_FAT,
        }
    }
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            breakfast: defaults::MEAL_SHARE_BREAKFAST,
            lunch: defaults::MEAL_SHARE_LUNCH,
            dinner: defaults::MEAL_SHARE_DINNER,
            snacks: defaults::MEAL_SHARE_SNACKS,
        }
    }
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            liters_per_kg: defaults::WATER_LITERS_PER_KG,
        }
    }
}

impl ActivityFactorsConfig {
    /// Validate that the multipliers are plausible and strictly increasing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if the factors are not in ascending order
    /// or `ConfigError::ValueOutOfRange` if any factor is below 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
        ];
        if ordered.iter().any(|f| !f.is_finite() || *f < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be finite and at least 1.0",
            ));
        }
        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

impl MacroConfig {
    /// Validate macro ratios and energy densities
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a ratio or density is not usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.protein_g_per_kg > 0.0 && self.protein_g_per_kg <= 4.0) {
            return Err(ConfigError::ValueOutOfRange(
                "protein_g_per_kg must be in (0, 4]",
            ));
        }
        if !(self.fat_calorie_share > 0.0 && self.fat_calorie_share < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "fat_calorie_share must be in (0, 1)",
            ));
        }
        if [
            self.kcal_per_g_protein,
            self.kcal_per_g_carbs,
            self.kcal_per_g_fat,
        ]
        .iter()
        .any(|density| !(density.is_finite() && *density > 0.0))
        {
            return Err(ConfigError::ValueOutOfRange(
                "energy densities must be positive",
            ));
        }
        Ok(())
    }
}

impl MealSplitConfig {
    /// Validate that meal shares are positive and sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if the shares do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares = [self.breakfast, self.lunch, self.dinner, self.snacks];
        if shares.iter().any(|s| !(*s > 0.0 && *s < 1.0)) {
            return Err(ConfigError::ValueOutOfRange(
                "meal shares must be in (0, 1)",
            ));
        }
        let sum: f64 = shares.iter().sum();
        if (sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("meal shares must sum to 1.0"));
        }
        Ok(())
    }
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Install a validated configuration as the global instance
    ///
    /// Called once at startup so handlers serve the configuration that was
    /// checked, rather than loading it again lazily.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a global instance
    /// already exists
    pub fn install(config: Self) -> Result<&'static Self, ConfigError> {
        config.validate()?;
        NUTRITION_CONFIG
            .set(config)
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        Ok(Self::global())
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.macros.validate()?;
        self.meal_split.validate()?;

        if self.calorie_adjustments.weight_loss_deficit_kcal < 0
            || self.calorie_adjustments.muscle_gain_surplus_kcal < 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "calorie adjustments must not be negative",
            ));
        }

        if !(self.hydration.liters_per_kg > 0.0 && self.hydration.liters_per_kg < 0.1) {
            return Err(ConfigError::ValueOutOfRange(
                "hydration liters_per_kg must be in (0, 0.1)",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRITION_WEIGHT_LOSS_DEFICIT_KCAL",
            &mut self.calorie_adjustments.weight_loss_deficit_kcal,
        )?;
        Self::apply_env_var(
            "NUTRITION_MUSCLE_GAIN_SURPLUS_KCAL",
            &mut self.calorie_adjustments.muscle_gain_surplus_kcal,
        )?;
        Self::apply_env_var(
            "NUTRITION_PROTEIN_G_PER_KG",
            &mut self.macros.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRITION_FAT_CALORIE_SHARE",
            &mut self.macros.fat_calorie_share,
        )?;
        Self::apply_env_var(
            "NUTRITION_WATER_LITERS_PER_KG",
            &mut self.hydration.liters_per_kg,
        )?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_activity_factors_rejected() {
        let mut config = NutritionConfig::default();
        config.activity_factors.active = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_meal_split_must_sum_to_one() {
        let mut config = NutritionConfig::default();
        config.meal_split.snacks = 0.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_negative_adjustment_rejected() {
        let mut config = NutritionConfig::default();
        config.calorie_adjustments.weight_loss_deficit_kcal = -10;
        assert!(config.validate().is_err());
    }
}
