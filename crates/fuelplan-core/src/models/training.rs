// ABOUTME: Training day model with session type, importance, duration and time of day
// ABOUTME: Maps the six time-of-day labels onto the four meal-pattern session windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_label;
use crate::constants::units::MINUTES_PER_HOUR;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Kind of session planned for the day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    /// No training
    Rest,
    /// Zone 2 / moderate endurance
    #[default]
    EnduranceModerate,
    /// HIIT / interval session
    Intervals,
    /// Gym strength work
    Strength,
    /// Long ride, race or key session
    LongKeySession,
    /// Unrecognized label; only produced by [`TrainingType::from_str_lossy`]
    Other,
}

impl TrainingType {
    /// Parse, falling back to [`TrainingType::Other`] for unknown labels
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!(label = s, "unknown training type");
            Self::Other
        })
    }

    /// True for a rest day
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::Rest)
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::EnduranceModerate => "endurance-moderate",
            Self::Intervals => "intervals",
            Self::Strength => "strength",
            Self::LongKeySession => "long-key-session",
            Self::Other => "other",
        }
    }
}

impl FromStr for TrainingType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "rest" | "none" => Ok(Self::Rest),
            "endurance_moderate" | "endurance" | "z2" => Ok(Self::EnduranceModerate),
            "intervals" | "hiit" => Ok(Self::Intervals),
            "strength" => Ok(Self::Strength),
            "long_key_session" | "long" | "key" | "race" => Ok(Self::LongKeySession),
            other => Err(AppError::invalid_format(format!(
                "Training type must be one of: rest, endurance-moderate, intervals, strength, long-key-session (got '{other}')"
            ))
            .with_field("training_type")),
        }
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How important today's session is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionImportance {
    /// Easy or optional session
    Low,
    /// Regular session
    #[default]
    Medium,
    /// Key session
    High,
}

impl SessionImportance {
    /// Parse, falling back to [`SessionImportance::High`] for unknown labels
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!(label = s, "unknown session importance, using high");
            Self::High
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

impl FromStr for SessionImportance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" | "key" => Ok(Self::High),
            other => Err(AppError::invalid_format(format!(
                "Importance must be one of: low, medium, high (got '{other}')"
            ))
            .with_field("importance")),
        }
    }
}

impl fmt::Display for SessionImportance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Main time of day for the session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrainingTime {
    /// Before breakfast or just after dawn
    EarlyMorning,
    /// Mid-morning
    MidMorning,
    /// Lunch break
    LunchBreak,
    /// Afternoon
    Afternoon,
    /// Evening
    Evening,
    /// Not specified (or no session)
    #[default]
    Unspecified,
}

impl TrainingTime {
    /// Parse, falling back to [`TrainingTime::Unspecified`] for unknown labels
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!(label = s, "unknown training time, using unspecified");
            Self::Unspecified
        })
    }

    /// Coarse bucket that selects the meal pattern
    #[must_use]
    pub const fn session_window(&self) -> SessionWindow {
        match self {
            Self::EarlyMorning | Self::MidMorning => SessionWindow::Morning,
            Self::LunchBreak => SessionWindow::Midday,
            Self::Afternoon | Self::Evening => SessionWindow::AfternoonEvening,
            Self::Unspecified => SessionWindow::NoSession,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EarlyMorning => "early-morning",
            Self::MidMorning => "mid-morning",
            Self::LunchBreak => "lunch-break",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Unspecified => "unspecified",
        }
    }
}

impl FromStr for TrainingTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "early_morning" | "dawn" => Ok(Self::EarlyMorning),
            "mid_morning" | "morning" => Ok(Self::MidMorning),
            "lunch_break" | "lunch" | "midday" => Ok(Self::LunchBreak),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            "unspecified" | "none" => Ok(Self::Unspecified),
            other => Err(AppError::invalid_format(format!(
                "Training time must be one of: early-morning, mid-morning, lunch-break, afternoon, evening, unspecified (got '{other}')"
            ))
            .with_field("training_time")),
        }
    }
}

impl fmt::Display for TrainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Meal-pattern bucket derived from the training time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionWindow {
    /// Session in the morning
    Morning,
    /// Session over lunch
    Midday,
    /// Session in the afternoon or evening
    AfternoonEvening,
    /// No session or time not given
    NoSession,
}

/// Description of the day's training
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingDay {
    /// Session type
    pub training_type: TrainingType,
    /// Session importance
    pub importance: SessionImportance,
    /// Whole hours of the main session (0-6)
    pub duration_hours: u32,
    /// Extra minutes of the main session (0-59)
    pub duration_minutes: u32,
    /// Main time of day
    pub training_time: TrainingTime,
}

impl TrainingDay {
    /// Rest day with no session
    #[must_use]
    pub const fn rest() -> Self {
        Self {
            training_type: TrainingType::Rest,
            importance: SessionImportance::Medium,
            duration_hours: 0,
            duration_minutes: 0,
            training_time: TrainingTime::Unspecified,
        }
    }

    /// Session length as fractional hours
    #[must_use]
    pub fn duration_in_hours(&self) -> f64 {
        f64::from(self.duration_hours) + f64::from(self.duration_minutes) / MINUTES_PER_HOUR
    }

    /// True when a session actually takes place (not rest, positive duration)
    #[must_use]
    pub fn has_session(&self) -> bool {
        !self.training_type.is_rest() && self.duration_in_hours() > 0.0
    }

    /// Meal-pattern bucket; a rest day always uses the no-session pattern
    #[must_use]
    pub const fn session_window(&self) -> SessionWindow {
        if self.training_type.is_rest() {
            SessionWindow::NoSession
        } else {
            self.training_time.session_window()
        }
    }
}
