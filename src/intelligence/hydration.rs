// ABOUTME: Hydration and electrolyte recommendations for the training session
// ABOUTME: Fluid L/h from sweat rate and temperature, sodium mg/h, bottle and tablet counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Hydration & Electrolyte Model

use crate::config::HydrationConfig;
use fuelplan_core::models::{EnvironmentalContext, SweatRate, TemperatureCondition, TrainingDay};
use serde::{Deserialize, Serialize};

/// Session hydration recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HydrationPlan {
    /// Session length (h)
    pub duration_hours: f64,
    /// Fluid per hour (L/h)
    pub liters_per_hour: f64,
    /// Fluid for the session (L)
    pub total_liters: f64,
    /// Fluid expressed in bottles
    pub bottles: f64,
    /// Bottle size used for `bottles` (L)
    pub bottle_liters: f64,
    /// Sodium per hour (mg/h)
    pub sodium_mg_per_hour: f64,
    /// Sodium for the session (mg)
    pub total_sodium_mg: f64,
    /// Sodium expressed in tablets
    pub sodium_tablets: f64,
    /// Sodium per tablet (mg)
    pub sodium_tablet_mg: f64,
}

/// Fluid rate in L/h: sweat-rate base x temperature factor
#[must_use]
pub fn hydration_rate(
    temperature: TemperatureCondition,
    sweat_rate: SweatRate,
    config: &HydrationConfig,
) -> f64 {
    config.base_liters_per_hour.value_for(sweat_rate)
        * config.temperature_factors.factor_for(temperature)
}

/// Sodium rate in mg/h
#[must_use]
pub const fn sodium_rate(sweat_rate: SweatRate, config: &HydrationConfig) -> f64 {
    config.sodium_mg_per_hour.value_for(sweat_rate)
}

/// Session plan, or `None` on a rest day or when no time is trained
#[must_use]
pub fn plan_hydration(
    training: &TrainingDay,
    environment: &EnvironmentalContext,
    config: &HydrationConfig,
) -> Option<HydrationPlan> {
    if !training.has_session() {
        return None;
    }

    let duration_hours = training.duration_in_hours();
    let liters_per_hour = hydration_rate(environment.temperature, environment.sweat_rate, config);
    let total_liters = liters_per_hour * duration_hours;
    let sodium_mg_per_hour = sodium_rate(environment.sweat_rate, config);
    let total_sodium_mg = sodium_mg_per_hour * duration_hours;

    Some(HydrationPlan {
        duration_hours,
        liters_per_hour,
        total_liters,
        bottles: total_liters / config.bottle_liters,
        bottle_liters: config.bottle_liters,
        sodium_mg_per_hour,
        total_sodium_mg,
        sodium_tablets: total_sodium_mg / config.sodium_tablet_mg,
        sodium_tablet_mg: config.sodium_tablet_mg,
    })
}
