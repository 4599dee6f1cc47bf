// ABOUTME: Environmental context for the hydration and electrolyte model
// ABOUTME: Temperature condition and typical sweat rate with strict and lossy parsers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_label;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Ambient temperature during the session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureCondition {
    /// Cold
    Cold,
    /// Temperate
    #[default]
    Temperate,
    /// Hot
    Hot,
    /// Very hot
    VeryHot,
}

impl TemperatureCondition {
    /// Parse, falling back to [`TemperatureCondition::Temperate`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!(label = s, "unknown temperature condition, using temperate");
            Self::Temperate
        })
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Temperate => "temperate",
            Self::Hot => "hot",
            Self::VeryHot => "very-hot",
        }
    }
}

impl FromStr for TemperatureCondition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "cold" => Ok(Self::Cold),
            "temperate" | "mild" => Ok(Self::Temperate),
            "hot" => Ok(Self::Hot),
            "very_hot" => Ok(Self::VeryHot),
            other => Err(AppError::invalid_format(format!(
                "Temperature must be one of: cold, temperate, hot, very-hot (got '{other}')"
            ))
            .with_field("temperature")),
        }
    }
}

impl fmt::Display for TemperatureCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Athlete's typical sweat rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SweatRate {
    /// Light sweater
    Low,
    /// Average
    #[default]
    Medium,
    /// Heavy sweater
    High,
}

impl SweatRate {
    /// Parse, falling back to [`SweatRate::Medium`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!(label = s, "unknown sweat rate, using medium");
            Self::Medium
        })
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for SweatRate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_format(format!(
                "Sweat rate must be one of: low, medium, high (got '{other}')"
            ))
            .with_field("sweat_rate")),
        }
    }
}

impl fmt::Display for SweatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Conditions that drive fluid and sodium needs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EnvironmentalContext {
    /// Ambient temperature
    pub temperature: TemperatureCondition,
    /// Typical sweat rate
    pub sweat_rate: SweatRate,
}
