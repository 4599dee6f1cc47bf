// ABOUTME: Carbohydrate timing and per-meal macro distribution around the training session
// ABOUTME: Meal patterns per session window, intra-workout carbs and protein/fat splitting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Timing & Distribution Engine
//!
//! Total carbohydrate is split into an intra-workout portion and an
//! out-of-training pool. The pool is spread across a fixed sequence of meals
//! chosen by the session window, with the larger shares on the meals closest
//! to the session. Protein is spread evenly; fat is weighted toward the
//! principal meals.
//!
//! # Reference
//! Kerksick, C.M., et al. (2017). ISSN position stand: nutrient timing.
//! DOI: 10.1186/s12970-017-0189-4

use crate::config::MealPlanningConfig;
use fuelplan_core::models::{MealCategory, SessionWindow, TrainingDay};
use serde::Serialize;

/// One meal in a daily pattern
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MealSlot {
    /// Display label
    pub name: &'static str,
    /// Template category
    pub category: MealCategory,
    /// Share of the out-of-training carbohydrate pool
    pub carb_share: f64,
    /// Advisory clock-time window
    pub time_hint: &'static str,
}

impl MealSlot {
    const fn new(
        name: &'static str,
        category: MealCategory,
        carb_share: f64,
        time_hint: &'static str,
    ) -> Self {
        Self {
            name,
            category,
            carb_share,
            time_hint,
        }
    }
}

static MORNING_PATTERN: &[MealSlot] = &[
    MealSlot::new(
        "Breakfast (pre-training)",
        MealCategory::Breakfast,
        0.20,
        "about 60–90 min before training (e.g. 5:30–6:00 if you train at 7:00)",
    ),
    MealSlot::new(
        "Post-training",
        MealCategory::PostTraining,
        0.25,
        "within 60 min of finishing (e.g. 8:30–9:00)",
    ),
    MealSlot::new("Lunch", MealCategory::Lunch, 0.25, "12:30–13:30"),
    MealSlot::new("Dinner", MealCategory::Dinner, 0.20, "19:30–21:00"),
    MealSlot::new(
        "Snacks",
        MealCategory::Snack,
        0.10,
        "mid-morning/afternoon if needed, more than 2 h before sleep",
    ),
];

static MIDDAY_PATTERN: &[MealSlot] = &[
    MealSlot::new("Breakfast", MealCategory::Breakfast, 0.20, "7:00–8:00"),
    MealSlot::new(
        "Lunch (pre or post)",
        MealCategory::Lunch,
        0.25,
        "right after training, ideally within 60 min (e.g. 13:30–14:30)",
    ),
    MealSlot::new("Afternoon snack", MealCategory::Snack, 0.15, "16:00–17:00"),
    MealSlot::new("Dinner", MealCategory::Dinner, 0.30, "19:30–21:00"),
    MealSlot::new(
        "Snacks",
        MealCategory::Snack,
        0.10,
        "optional light evening snack, 2–3 h before bed",
    ),
];

static AFTERNOON_EVENING_PATTERN: &[MealSlot] = &[
    MealSlot::new("Breakfast", MealCategory::Breakfast, 0.15, "7:00–8:00"),
    MealSlot::new("Lunch", MealCategory::Lunch, 0.25, "12:30–13:30"),
    MealSlot::new(
        "Pre-training snack",
        MealCategory::Snack,
        0.20,
        "60–120 min before training (e.g. 16:30–17:00 if you train at 18:30)",
    ),
    MealSlot::new(
        "Dinner / Post-training",
        MealCategory::PostTraining,
        0.30,
        "within 1–2 h of finishing (e.g. 20:30–21:30)",
    ),
    MealSlot::new(
        "Snacks",
        MealCategory::Snack,
        0.10,
        "optional morning or mid-afternoon snack, depending on hunger",
    ),
];

static NO_SESSION_PATTERN: &[MealSlot] = &[
    MealSlot::new("Breakfast", MealCategory::Breakfast, 0.25, "7:00–8:30"),
    MealSlot::new("Lunch", MealCategory::Lunch, 0.30, "12:30–13:30"),
    MealSlot::new("Dinner", MealCategory::Dinner, 0.30, "19:30–21:00"),
    MealSlot::new(
        "Snacks",
        MealCategory::Snack,
        0.15,
        "mid-morning/afternoon if needed",
    ),
];

/// Ordered meal pattern for a session window; shares sum to 1.0
#[must_use]
pub const fn meal_pattern(window: SessionWindow) -> &'static [MealSlot] {
    match window {
        SessionWindow::Morning => MORNING_PATTERN,
        SessionWindow::Midday => MIDDAY_PATTERN,
        SessionWindow::AfternoonEvening => AFTERNOON_EVENING_PATTERN,
        SessionWindow::NoSession => NO_SESSION_PATTERN,
    }
}

/// Meal name to advisory time string, in pattern order
#[must_use]
pub fn meal_times_suggestion(window: SessionWindow) -> Vec<(&'static str, &'static str)> {
    meal_pattern(window)
        .iter()
        .map(|slot| (slot.name, slot.time_hint))
        .collect()
}

/// Carbohydrate to take during the session (g)
///
/// Zero on a rest day or when no time is trained.
#[must_use]
pub fn carbs_during_training(training: &TrainingDay, carbs_per_hour: f64) -> f64 {
    if training.has_session() {
        carbs_per_hour * training.duration_in_hours()
    } else {
        0.0
    }
}

/// Carbohydrate left for the meals (g), never negative
#[must_use]
pub fn carbs_outside_training(total_carbs_g: f64, during_training_g: f64) -> f64 {
    (total_carbs_g - during_training_g).max(0.0)
}

/// Protein and fat allocation across a meal pattern
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinFatSplit {
    /// Protein per meal (g), identical for every meal
    pub protein_per_meal_g: f64,
    /// Fat per meal (g), in pattern order
    pub fat_per_meal_g: Vec<f64>,
}

/// Spread protein evenly and fat by slot weight
///
/// Snack slots carry `snack_fat_weight`, every other slot `main_fat_weight`.
/// An empty pattern gets nothing.
#[must_use]
pub fn split_protein_and_fat_across_meals(
    total_protein_g: f64,
    total_fat_g: f64,
    meals: &[MealSlot],
    config: &MealPlanningConfig,
) -> ProteinFatSplit {
    if meals.is_empty() {
        return ProteinFatSplit {
            protein_per_meal_g: 0.0,
            fat_per_meal_g: Vec::new(),
        };
    }

    let protein_per_meal_g = total_protein_g / meals.len() as f64;

    let weights: Vec<f64> = meals
        .iter()
        .map(|slot| config.fat_weight_for(slot.category))
        .collect();
    let weight_sum: f64 = weights.iter().sum();
    let fat_per_unit = if weight_sum > 0.0 {
        total_fat_g / weight_sum
    } else {
        0.0
    };

    ProteinFatSplit {
        protein_per_meal_g,
        fat_per_meal_g: weights.iter().map(|weight| weight * fat_per_unit).collect(),
    }
}
