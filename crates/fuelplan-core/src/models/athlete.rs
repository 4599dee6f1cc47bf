// ABOUTME: Athlete profile model with sex, activity level and body-composition goal
// ABOUTME: Enumerations parse strictly for the CLI and lossily for the calculation core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_label;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Sex used by the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Sex {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_format(format!(
                "Sex must be 'male' or 'female', got '{other}'"
            ))
            .with_field("sex")),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Non-sport daily activity level, the multiplier on BMR
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary job and lifestyle
    Low,
    /// Some walking and standing during the day
    #[default]
    Medium,
    /// Physically demanding day
    High,
}

impl ActivityLevel {
    /// Parse, falling back to [`ActivityLevel::Medium`] for unknown labels
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!(label = s, "unknown activity level, using medium");
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

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "low" | "sedentary" => Ok(Self::Low),
            "medium" | "moderate" => Ok(Self::Medium),
            "high" | "very_active" => Ok(Self::High),
            other => Err(AppError::invalid_format(format!(
                "Activity level must be one of: low, medium, high (got '{other}')"
            ))
            .with_field("activity_level")),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body-composition goal for the day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyGoal {
    /// Hold current body mass
    #[default]
    Maintain,
    /// Small energy deficit
    MildDeficit,
    /// Small energy surplus
    MildSurplus,
}

impl BodyGoal {
    /// Parse, falling back to [`BodyGoal::Maintain`] for unknown labels
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!(label = s, "unknown body goal, using maintain");
            Self::Maintain
        })
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Maintain => "maintain",
            Self::MildDeficit => "mild-deficit",
            Self::MildSurplus => "mild-surplus",
        }
    }
}

impl FromStr for BodyGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "maintain" | "maintenance" => Ok(Self::Maintain),
            "mild_deficit" | "deficit" | "cut" => Ok(Self::MildDeficit),
            "mild_surplus" | "surplus" | "build" => Ok(Self::MildSurplus),
            other => Err(AppError::invalid_format(format!(
                "Goal must be one of: maintain, mild-deficit, mild-surplus (got '{other}')"
            ))
            .with_field("goal")),
        }
    }
}

impl fmt::Display for BodyGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Athlete profile, immutable for one planning pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AthleteProfile {
    /// Age in years (10-90)
    pub age: u32,
    /// Sex for the BMR constant
    pub sex: Sex,
    /// Body weight in kilograms (35-150)
    pub weight_kg: f64,
    /// Height in centimeters (140-210)
    pub height_cm: f64,
    /// Daily non-sport activity level
    pub activity_level: ActivityLevel,
    /// Body-composition goal
    pub goal: BodyGoal,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_goal_parsing_accepts_aliases() {
        assert_eq!("mild-deficit".parse::<BodyGoal>().unwrap(), BodyGoal::MildDeficit);
        assert_eq!("Mild Surplus".parse::<BodyGoal>().unwrap(), BodyGoal::MildSurplus);
        assert_eq!("maintenance".parse::<BodyGoal>().unwrap(), BodyGoal::Maintain);
        assert!("bulk-hard".parse::<BodyGoal>().is_err());
    }

    #[test]
    fn test_lossy_parsers_fall_back() {
        assert_eq!(ActivityLevel::from_str_lossy("couch"), ActivityLevel::Medium);
        assert_eq!(BodyGoal::from_str_lossy("???"), BodyGoal::Maintain);
        assert_eq!(ActivityLevel::from_str_lossy("HIGH"), ActivityLevel::High);
    }

    #[test]
    fn test_sex_rejects_unknown_label() {
        let err = "x".parse::<Sex>().unwrap_err();
        assert_eq!(err.context.field.as_deref(), Some("sex"));
    }
}
