// ABOUTME: Hydration and electrolyte configuration for training-session fluid planning
// ABOUTME: Sweat-rate base volumes, temperature factors, sodium rates and practical unit sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Hydration Configuration
//!
//! # Scientific References
//!
//! - Sawka, M.N., et al. (2007). ACSM position stand: Exercise and fluid replacement.
//!   DOI: 10.1249/mss.0b013e31802ca597
//! - Baker, L.B. (2017). Sweating rate and sweat sodium concentration in athletes.
//!   DOI: 10.1007/s40279-017-0691-5

use super::error::ConfigError;
use fuelplan_core::models::{SweatRate, TemperatureCondition};
use serde::{Deserialize, Serialize};

/// Hydration and electrolyte settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Base fluid intake per hour by sweat rate (L/h)
    pub base_liters_per_hour: SweatRateValues,
    /// Multiplier on the base intake by temperature
    pub temperature_factors: TemperatureFactorsConfig,
    /// Sodium per hour by sweat rate (mg/h)
    pub sodium_mg_per_hour: SweatRateValues,
    /// Bottle size used for the practical translation (0.5 L)
    pub bottle_liters: f64,
    /// Sodium per electrolyte tablet (300 mg)
    pub sodium_tablet_mg: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            base_liters_per_hour: SweatRateValues {
                low: 0.45,
                medium: 0.65,
                high: 0.85,
            },
            temperature_factors: TemperatureFactorsConfig::default(),
            sodium_mg_per_hour: SweatRateValues {
                low: 350.0,
                medium: 550.0,
                high: 800.0,
            },
            bottle_liters: 0.5,
            sodium_tablet_mg: 300.0,
        }
    }
}

impl HydrationConfig {
    /// Validate the hydration settings
    ///
    /// # Errors
    ///
    /// Returns an error if a rate, factor or unit size is not a positive finite
    /// number, or if rates do not increase with sweat rate
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_liters_per_hour.validate("base_liters_per_hour")?;
        self.sodium_mg_per_hour.validate("sodium_mg_per_hour")?;
        self.temperature_factors.validate()?;

        if !is_positive_finite(self.bottle_liters) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "bottle size must be a positive finite number, got {}",
                self.bottle_liters
            )));
        }
        if !is_positive_finite(self.sodium_tablet_mg) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "sodium tablet size must be a positive finite number, got {}",
                self.sodium_tablet_mg
            )));
        }
        Ok(())
    }
}

const fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// One value per sweat rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweatRateValues {
    /// Light sweater
    pub low: f64,
    /// Average
    pub medium: f64,
    /// Heavy sweater
    pub high: f64,
}

impl SweatRateValues {
    /// Value for a sweat rate
    #[must_use]
    pub const fn value_for(&self, sweat_rate: SweatRate) -> f64 {
        match sweat_rate {
            SweatRate::Low => self.low,
            SweatRate::Medium => self.medium,
            SweatRate::High => self.high,
        }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if ![self.low, self.medium, self.high]
            .into_iter()
            .all(is_positive_finite)
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{name} values must be a positive finite number, got {}/{}/{}",
                self.low, self.medium, self.high
            )));
        }
        if self.low > self.medium || self.medium > self.high {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{name} must satisfy low <= medium <= high"
            )));
        }
        Ok(())
    }
}

/// Multipliers on the base fluid intake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureFactorsConfig {
    /// Cold (0.9)
    pub cold: f64,
    /// Temperate (1.0)
    pub temperate: f64,
    /// Hot (1.15)
    pub hot: f64,
    /// Very hot (1.3)
    pub very_hot: f64,
}

impl Default for TemperatureFactorsConfig {
    fn default() -> Self {
        Self {
            cold: 0.9,
            temperate: 1.0,
            hot: 1.15,
            very_hot: 1.3,
        }
    }
}

impl TemperatureFactorsConfig {
    /// Multiplier for a temperature condition
    #[must_use]
    pub const fn factor_for(&self, temperature: TemperatureCondition) -> f64 {
        match temperature {
            TemperatureCondition::Cold => self.cold,
            TemperatureCondition::Temperate => self.temperate,
            TemperatureCondition::Hot => self.hot,
            TemperatureCondition::VeryHot => self.very_hot,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if [self.cold, self.temperate, self.hot, self.very_hot]
            .iter()
            .any(|factor| !is_positive_finite(*factor))
        {
            return Err(ConfigError::InvalidRange(
                "temperature factors must be positive",
            ));
        }
        Ok(())
    }
}
