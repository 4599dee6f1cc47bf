// ABOUTME: Nutrition configuration for energy expenditure and macronutrient targets
// ABOUTME: Configures BMR coefficients, activity factors, MET values, g/kg ranges and goal deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Lookup tables for the energy and macro target models. Every table has a
//! `Default` matching the published heuristics and a `validate()` used by
//! [`PlannerConfig::load`](super::PlannerConfig::load).
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - MET values: Ainsworth et al. (2011) Compendium of Physical Activities
//! - Carbohydrate: Burke et al. (2011) DOI: 10.1080/02640414.2011.585473
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use super::error::ConfigError;
use fuelplan_core::models::{ActivityLevel, BodyGoal, TrainingType};
use serde::{Deserialize, Serialize};

/// Nutrition model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// MET value per training type
    pub training_met: TrainingMetConfig,
    /// Carbohydrate g/kg ranges per training type
    pub carb_ranges: CarbRangesConfig,
    /// Protein g/kg per goal
    pub protein_g_per_kg: GoalValuesConfig,
    /// Fat g/kg per goal
    pub fat_g_per_kg: GoalValuesConfig,
    /// Daily kcal delta per goal
    pub goal_energy_delta: GoalValuesConfig,
    /// Thresholds that raise plan advisories
    pub advisories: AdvisoryConfig,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
            training_met: TrainingMetConfig::default(),
            carb_ranges: CarbRangesConfig::default(),
            protein_g_per_kg: GoalValuesConfig::protein_defaults(),
            fat_g_per_kg: GoalValuesConfig::fat_defaults(),
            goal_energy_delta: GoalValuesConfig::energy_delta_defaults(),
            advisories: AdvisoryConfig::default(),
        }
    }
}

impl NutritionConfig {
    /// Validate every nutrition table
    ///
    /// # Errors
    ///
    /// Returns an error if an overridable value is not finite, or if any table
    /// holds an inverted range or a non-positive rate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("activity_factors.low", self.activity_factors.low),
            ("activity_factors.medium", self.activity_factors.medium),
            ("activity_factors.high", self.activity_factors.high),
            ("goal_energy_delta.mild_deficit", self.goal_energy_delta.mild_deficit),
            ("goal_energy_delta.mild_surplus", self.goal_energy_delta.mild_surplus),
            ("carb_ranges.goal_adjustment", self.carb_ranges.goal_adjustment),
            (
                "advisories.kcal_discrepancy_threshold",
                self.advisories.kcal_discrepancy_threshold,
            ),
            (
                "advisories.low_intra_carbs_per_hour",
                self.advisories.low_intra_carbs_per_hour,
            ),
        ];
        if let Some((name, value)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{name} must be a finite number, got {value}"
            )));
        }

        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.training_met.validate()?;
        self.carb_ranges.validate()?;
        validate_positive_goal_values("protein_g_per_kg", &self.protein_g_per_kg)?;
        validate_positive_goal_values("fat_g_per_kg", &self.fat_g_per_kg)?;

        if self.goal_energy_delta.mild_deficit > 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "mild_deficit energy delta must not be positive, got {}",
                self.goal_energy_delta.mild_deficit
            )));
        }
        if self.goal_energy_delta.mild_surplus < 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "mild_surplus energy delta must not be negative, got {}",
                self.goal_energy_delta.mild_surplus
            )));
        }

        self.advisories.validate()
    }
}

fn validate_positive_goal_values(
    name: &str,
    values: &GoalValuesConfig,
) -> Result<(), ConfigError> {
    for (goal, value) in [
        ("maintain", values.maintain),
        ("mild_deficit", values.mild_deficit),
        ("mild_surplus", values.mild_surplus),
    ] {
        if value <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{name}.{goal} must be positive, got {value}"
            )));
        }
    }
    Ok(())
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
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl BmrConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.msj_weight_coef <= 0.0 || self.msj_height_coef <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        Ok(())
    }
}

/// Daily activity multipliers applied to BMR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Low daily activity (1.2)
    pub low: f64,
    /// Medium daily activity (1.4)
    pub medium: f64,
    /// High daily activity (1.6)
    pub high: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            low: 1.2,
            medium: 1.4,
            high: 1.6,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Low => self.low,
            ActivityLevel::Medium => self.medium,
            ActivityLevel::High => self.high,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.low < 1.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "activity factor low must be at least 1.0, got {}",
                self.low
            )));
        }
        if self.low > self.medium || self.medium > self.high {
            return Err(ConfigError::InvalidRange(
                "activity factors must satisfy low <= medium <= high",
            ));
        }
        Ok(())
    }
}

/// Metabolic equivalents per training type
///
/// Rest and unrecognized types always cost 0 kcal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingMetConfig {
    /// Zone 2 / moderate endurance (7.0)
    pub endurance_moderate: f64,
    /// HIIT / intervals (9.0)
    pub intervals: f64,
    /// Gym strength work (6.0)
    pub strength: f64,
    /// Long ride, race or key session (8.0)
    pub long_key_session: f64,
}

impl Default for TrainingMetConfig {
    fn default() -> Self {
        Self {
            endurance_moderate: 7.0,
            intervals: 9.0,
            strength: 6.0,
            long_key_session: 8.0,
        }
    }
}

impl TrainingMetConfig {
    /// MET value for a training type
    #[must_use]
    pub const fn met_for(&self, training_type: TrainingType) -> f64 {
        match training_type {
            TrainingType::Rest | TrainingType::Other => 0.0,
            TrainingType::EnduranceModerate => self.endurance_moderate,
            TrainingType::Intervals => self.intervals,
            TrainingType::Strength => self.strength,
            TrainingType::LongKeySession => self.long_key_session,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, met) in [
            ("endurance_moderate", self.endurance_moderate),
            ("intervals", self.intervals),
            ("strength", self.strength),
            ("long_key_session", self.long_key_session),
        ] {
            if met < 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "MET for {name} must not be negative, got {met}"
                )));
            }
        }
        Ok(())
    }
}

/// Inclusive g/kg range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GramsPerKgRange {
    /// Lower bound (low-importance sessions)
    pub min: f64,
    /// Upper bound (key sessions)
    pub max: f64,
}

impl GramsPerKgRange {
    /// Build a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Carbohydrate g/kg ranges per training type
///
/// Reference: Burke, L.M., et al. (2011). Carbohydrates for training and competition.
/// Journal of Sports Sciences, 29(S1), S17-S27.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbRangesConfig {
    /// Rest day (3.0-4.0)
    pub rest: GramsPerKgRange,
    /// Moderate endurance (5.0-6.0)
    pub endurance_moderate: GramsPerKgRange,
    /// Intervals (5.5-7.0)
    pub intervals: GramsPerKgRange,
    /// Strength (5.0-6.5)
    pub strength: GramsPerKgRange,
    /// Long or key session (7.0-9.0)
    pub long_key_session: GramsPerKgRange,
    /// Unrecognized type (4.0-5.0)
    pub other: GramsPerKgRange,
    /// g/kg removed for a mild deficit or added for a mild surplus (0.3)
    pub goal_adjustment: f64,
}

impl Default for CarbRangesConfig {
    fn default() -> Self {
        Self {
            rest: GramsPerKgRange::new(3.0, 4.0),
            endurance_moderate: GramsPerKgRange::new(5.0, 6.0),
            intervals: GramsPerKgRange::new(5.5, 7.0),
            strength: GramsPerKgRange::new(5.0, 6.5),
            long_key_session: GramsPerKgRange::new(7.0, 9.0),
            other: GramsPerKgRange::new(4.0, 5.0),
            goal_adjustment: 0.3,
        }
    }
}

impl CarbRangesConfig {
    /// Range for a training type
    #[must_use]
    pub const fn range_for(&self, training_type: TrainingType) -> GramsPerKgRange {
        match training_type {
            TrainingType::Rest => self.rest,
            TrainingType::EnduranceModerate => self.endurance_moderate,
            TrainingType::Intervals => self.intervals,
            TrainingType::Strength => self.strength,
            TrainingType::LongKeySession => self.long_key_session,
            TrainingType::Other => self.other,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("rest", self.rest),
            ("endurance_moderate", self.endurance_moderate),
            ("intervals", self.intervals),
            ("strength", self.strength),
            ("long_key_session", self.long_key_session),
            ("other", self.other),
        ];
        for (name, range) in ranges {
            if range.min <= 0.0 || range.min > range.max {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "carb range for {name} must satisfy 0 < min <= max, got {}-{}",
                    range.min, range.max
                )));
            }
        }
        if self.goal_adjustment < 0.0 {
            return Err(ConfigError::InvalidRange(
                "carb goal adjustment must not be negative",
            ));
        }
        Ok(())
    }
}

/// One value per body-composition goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalValuesConfig {
    /// Maintain
    pub maintain: f64,
    /// Mild deficit
    pub mild_deficit: f64,
    /// Mild surplus
    pub mild_surplus: f64,
}

impl GoalValuesConfig {
    /// Value for a goal
    #[must_use]
    pub const fn value_for(&self, goal: BodyGoal) -> f64 {
        match goal {
            BodyGoal::Maintain => self.maintain,
            BodyGoal::MildDeficit => self.mild_deficit,
            BodyGoal::MildSurplus => self.mild_surplus,
        }
    }

    /// Protein g/kg defaults (1.8 / 1.9 / 2.0)
    #[must_use]
    pub const fn protein_defaults() -> Self {
        Self {
            maintain: 1.8,
            mild_deficit: 1.9,
            mild_surplus: 2.0,
        }
    }

    /// Fat g/kg defaults (0.9 / 0.8 / 1.0)
    #[must_use]
    pub const fn fat_defaults() -> Self {
        Self {
            maintain: 0.9,
            mild_deficit: 0.8,
            mild_surplus: 1.0,
        }
    }

    /// Daily kcal delta defaults (0 / -300 / +200)
    #[must_use]
    pub const fn energy_delta_defaults() -> Self {
        Self {
            maintain: 0.0,
            mild_deficit: -300.0,
            mild_surplus: 200.0,
        }
    }
}

/// Thresholds for the plan advisories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    /// Absolute kcal gap between macro kcal and target that triggers a caution (200)
    pub kcal_discrepancy_threshold: f64,
    /// Intra-workout carb rate (g/h) below which a coaching note is shown (40)
    pub low_intra_carbs_per_hour: f64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            kcal_discrepancy_threshold: 200.0,
            low_intra_carbs_per_hour: 40.0,
        }
    }
}

impl AdvisoryConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.kcal_discrepancy_threshold < 0.0 || self.low_intra_carbs_per_hour < 0.0 {
            return Err(ConfigError::InvalidRange(
                "advisory thresholds must not be negative",
            ));
        }
        Ok(())
    }
}
