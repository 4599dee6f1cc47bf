// ABOUTME: Planner configuration aggregating nutrition, meal planning and hydration tables
// ABOUTME: Environment-only loading with FUELPLAN_* overrides, validation and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration
//!
//! Configuration is environment-only: defaults are compiled in, a small set of
//! `FUELPLAN_*` variables can override individual values, and the result is
//! validated before use.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR, activity factors, MET values, g/kg ranges, goal deltas, advisories
//! - `meal_planning` - Portion scale bounds, fat weights, intra-workout carb rate limits
//! - `hydration` - Fluid and sodium rates, temperature factors, practical unit sizes
//! - `error` - Configuration error types

pub mod error;
pub mod hydration;
pub mod meal_planning;
pub mod nutrition;

pub use error::ConfigError;
pub use hydration::{HydrationConfig, SweatRateValues, TemperatureFactorsConfig};
pub use meal_planning::MealPlanningConfig;
pub use nutrition::{
    ActivityFactorsConfig, AdvisoryConfig, BmrConfig, CarbRangesConfig, GoalValuesConfig,
    GramsPerKgRange, NutritionConfig, TrainingMetConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Energy and macro target tables
    pub nutrition: NutritionConfig,
    /// Meal distribution and composition settings
    pub meal_planning: MealPlanningConfig,
    /// Hydration and electrolyte settings
    pub hydration: HydrationConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Apply environment variable overrides
        config = config.apply_env_overrides()?;

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found in any section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.meal_planning.validate()?;
        self.hydration.validate()
    }

    /// Helper function to parse and apply a numeric environment variable override
    ///
    /// `NaN` and infinities are rejected.
    fn apply_env_var(env_var_name: &str, target: &mut f64) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            let parsed: f64 = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
            if !parsed.is_finite() {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{env_var_name} must be a finite number, got {}",
                    val.trim()
                )));
            }
            *target = parsed;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity factors
        Self::apply_env_var(
            "FUELPLAN_ACTIVITY_FACTOR_LOW",
            &mut self.nutrition.activity_factors.low,
        )?;
        Self::apply_env_var(
            "FUELPLAN_ACTIVITY_FACTOR_MEDIUM",
            &mut self.nutrition.activity_factors.medium,
        )?;
        Self::apply_env_var(
            "FUELPLAN_ACTIVITY_FACTOR_HIGH",
            &mut self.nutrition.activity_factors.high,
        )?;

        // Goal energy deltas
        Self::apply_env_var(
            "FUELPLAN_DEFICIT_KCAL",
            &mut self.nutrition.goal_energy_delta.mild_deficit,
        )?;
        Self::apply_env_var(
            "FUELPLAN_SURPLUS_KCAL",
            &mut self.nutrition.goal_energy_delta.mild_surplus,
        )?;
        Self::apply_env_var(
            "FUELPLAN_CARB_GOAL_ADJUSTMENT",
            &mut self.nutrition.carb_ranges.goal_adjustment,
        )?;

        // Advisory thresholds
        Self::apply_env_var(
            "FUELPLAN_KCAL_DISCREPANCY_THRESHOLD",
            &mut self.nutrition.advisories.kcal_discrepancy_threshold,
        )?;
        Self::apply_env_var(
            "FUELPLAN_LOW_INTRA_CARBS_PER_HOUR",
            &mut self.nutrition.advisories.low_intra_carbs_per_hour,
        )?;

        // Meal planning
        Self::apply_env_var("FUELPLAN_SCALE_MIN", &mut self.meal_planning.scale_min)?;
        Self::apply_env_var("FUELPLAN_SCALE_MAX", &mut self.meal_planning.scale_max)?;
        Self::apply_env_var(
            "FUELPLAN_SNACK_FAT_WEIGHT",
            &mut self.meal_planning.snack_fat_weight,
        )?;
        Self::apply_env_var(
            "FUELPLAN_DEFAULT_CARBS_PER_HOUR",
            &mut self.meal_planning.default_carbs_per_hour,
        )?;

        // Hydration
        Self::apply_env_var("FUELPLAN_BOTTLE_LITERS", &mut self.hydration.bottle_liters)?;
        Self::apply_env_var(
            "FUELPLAN_SODIUM_TABLET_MG",
            &mut self.hydration.sodium_tablet_mg,
        )?;

        Ok(self)
    }
}
