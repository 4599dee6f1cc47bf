// ABOUTME: Meal composition turning per-meal macro targets into concrete food portions
// ABOUTME: Keyword meal classification and carbohydrate-driven template scaling within bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Composition Engine
//!
//! Each meal starts from its category template. All portions are scaled by a
//! single factor chosen to hit the carbohydrate target, clamped so the plate
//! stays realistic. Protein and fat follow the template proportions and are
//! reported next to their targets, not optimized.

use super::food_reference::{macros_for_portions, template_for, Portion};
use crate::config::MealPlanningConfig;
use fuelplan_core::models::{MacroTotals, MealCategory};
use serde::Serialize;
use tracing::debug;

/// Keywords checked in order; the first match wins
const CATEGORY_KEYWORDS: [(&str, MealCategory); 5] = [
    ("breakfast", MealCategory::Breakfast),
    ("post-training", MealCategory::PostTraining),
    ("snack", MealCategory::Snack),
    ("lunch", MealCategory::Lunch),
    ("dinner", MealCategory::Dinner),
];

/// Classify a free-text meal name; unmatched names are treated as lunch
#[must_use]
pub fn classify_meal_name(meal_name: &str) -> MealCategory {
    let lowered = meal_name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(MealCategory::Lunch, |(_, category)| *category)
}

/// Concrete plate for one meal
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealSuggestion {
    /// Template used
    pub category: MealCategory,
    /// Factor applied to every base portion
    pub scale_factor: f64,
    /// Scaled portions, template order
    pub portions: Vec<Portion>,
    /// Macros of the scaled portions
    pub realized: MacroTotals,
    /// Macros the meal was asked for
    pub target: MacroTotals,
}

/// Scale factor toward the carbohydrate target, clamped to the configured bounds
///
/// Neutral (1.0 before clamping) when either the base or the target carries no
/// carbohydrate.
#[must_use]
pub fn portion_scale_factor(base_carbs_g: f64, target_carbs_g: f64, config: &MealPlanningConfig) -> f64 {
    let raw = if base_carbs_g > 0.0 && target_carbs_g > 0.0 {
        target_carbs_g / base_carbs_g
    } else {
        1.0
    };
    raw.clamp(config.scale_min, config.scale_max)
}

/// Build a plate for a meal category
#[must_use]
pub fn suggest_meal_for_category(
    category: MealCategory,
    target: MacroTotals,
    config: &MealPlanningConfig,
) -> MealSuggestion {
    let template = template_for(category);
    let base = template.base_macros();
    let scale_factor = portion_scale_factor(base.carbs_g, target.carbs_g, config);

    let portions: Vec<Portion> = template
        .portions
        .iter()
        .map(|portion| Portion {
            food: portion.food,
            grams: portion.grams * scale_factor,
        })
        .collect();
    let realized = macros_for_portions(&portions);

    debug!(
        category = %category,
        scale_factor,
        target_carbs_g = target.carbs_g,
        realized_carbs_g = realized.carbs_g,
        "composed meal"
    );

    MealSuggestion {
        category,
        scale_factor,
        portions,
        realized,
        target,
    }
}

/// Build a plate for a free-text meal name
#[must_use]
pub fn suggest_meal(
    meal_name: &str,
    target: MacroTotals,
    config: &MealPlanningConfig,
) -> MealSuggestion {
    suggest_meal_for_category(classify_meal_name(meal_name), target, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_order() {
        assert_eq!(classify_meal_name("Breakfast (pre-training)"), MealCategory::Breakfast);
        assert_eq!(classify_meal_name("Dinner / Post-training"), MealCategory::PostTraining);
        assert_eq!(classify_meal_name("Pre-training snack"), MealCategory::Snack);
        assert_eq!(classify_meal_name("Lunch (pre or post)"), MealCategory::Lunch);
        assert_eq!(classify_meal_name("brunch"), MealCategory::Lunch);
    }

    #[test]
    fn test_zero_target_keeps_base_portions() {
        let suggestion = suggest_meal("Dinner", MacroTotals::default(), &MealPlanningConfig::default());
        assert!((suggestion.scale_factor - 1.0).abs() < f64::EPSILON);
        assert!((suggestion.portions[0].grams - 120.0).abs() < 1e-9);
    }
}
