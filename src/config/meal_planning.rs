// ABOUTME: Meal planning configuration for intra-workout fueling and per-meal distribution
// ABOUTME: Portion scale bounds, snack/main fat weights and carbohydrate-per-hour limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use fuelplan_core::models::MealCategory;
use serde::{Deserialize, Serialize};

/// Meal distribution and composition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanningConfig {
    /// Lower clamp on the portion scale factor (0.6)
    pub scale_min: f64,
    /// Upper clamp on the portion scale factor (1.8)
    pub scale_max: f64,
    /// Fat weight for snack slots (0.5)
    pub snack_fat_weight: f64,
    /// Fat weight for principal meals (1.0)
    pub main_fat_weight: f64,
    /// Intra-workout carbohydrate rate used when none is given (60 g/h)
    pub default_carbs_per_hour: f64,
    /// Lowest accepted intra-workout carbohydrate rate (20 g/h)
    pub min_carbs_per_hour: f64,
    /// Highest accepted intra-workout carbohydrate rate (120 g/h)
    pub max_carbs_per_hour: f64,
}

impl Default for MealPlanningConfig {
    fn default() -> Self {
        Self {
            scale_min: 0.6,
            scale_max: 1.8,
            snack_fat_weight: 0.5,
            main_fat_weight: 1.0,
            default_carbs_per_hour: 60.0,
            min_carbs_per_hour: 20.0,
            max_carbs_per_hour: 120.0,
        }
    }
}

impl MealPlanningConfig {
    /// Fat weight for a meal slot
    #[must_use]
    pub const fn fat_weight_for(&self, category: MealCategory) -> f64 {
        if category.is_snack() {
            self.snack_fat_weight
        } else {
            self.main_fat_weight
        }
    }

    /// Validate the meal planning settings
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not finite, the scale bounds exclude
    /// 1.0, a fat weight is not positive, or the default carb rate lies outside
    /// the accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("scale_min", self.scale_min),
            ("scale_max", self.scale_max),
            ("snack_fat_weight", self.snack_fat_weight),
            ("main_fat_weight", self.main_fat_weight),
            ("default_carbs_per_hour", self.default_carbs_per_hour),
            ("min_carbs_per_hour", self.min_carbs_per_hour),
            ("max_carbs_per_hour", self.max_carbs_per_hour),
        ];
        if let Some((name, value)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{name} must be a finite number, got {value}"
            )));
        }

        if self.scale_min <= 0.0 || self.scale_min > 1.0 || self.scale_max < 1.0 {
            return Err(ConfigError::InvalidRange(
                "portion scale bounds must satisfy 0 < scale_min <= 1.0 <= scale_max",
            ));
        }

        if self.snack_fat_weight <= 0.0 || self.main_fat_weight <= 0.0 {
            return Err(ConfigError::InvalidWeights(format!(
                "fat weights must be positive, got snack {} and main {}",
                self.snack_fat_weight, self.main_fat_weight
            )));
        }

        if self.min_carbs_per_hour <= 0.0 || self.min_carbs_per_hour > self.max_carbs_per_hour {
            return Err(ConfigError::InvalidRange(
                "carbs per hour bounds must satisfy 0 < min <= max",
            ));
        }
        if !(self.min_carbs_per_hour..=self.max_carbs_per_hour)
            .contains(&self.default_carbs_per_hour)
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "default carbs per hour must be between {} and {}, got {}",
                self.min_carbs_per_hour, self.max_carbs_per_hour, self.default_carbs_per_hour
            )));
        }

        Ok(())
    }
}
