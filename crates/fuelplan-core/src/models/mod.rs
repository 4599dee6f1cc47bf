// ABOUTME: Core data models for the daily nutrition planner
// ABOUTME: Re-exports athlete profile, training day, environment and food types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Inputs to one planning pass are an [`AthleteProfile`], a [`TrainingDay`] and an
//! [`EnvironmentalContext`]. All of them are immutable for the duration of a
//! computation and carry no behavior beyond simple derived values.
//!
//! Every enumerated input has two parsers:
//!
//! - `FromStr`: strict, used at the presentation boundary to reject typos
//! - `from_str_lossy`: never fails, maps unknown labels to the documented fallback

mod athlete;
mod environment;
mod nutrition;
mod training;

pub use athlete::{ActivityLevel, AthleteProfile, BodyGoal, Sex};
pub use environment::{EnvironmentalContext, SweatRate, TemperatureCondition};
pub use nutrition::{FoodItem, MacroTotals, MealCategory};
pub use training::{SessionImportance, SessionWindow, TrainingDay, TrainingTime, TrainingType};

/// Normalize a user-facing label: trim, lowercase, and fold `-`/space into `_`
pub(crate) fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['-', ' ', '/'], "_")
}
